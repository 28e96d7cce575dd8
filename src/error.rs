use std::num::ParseIntError;

use thiserror::Error;

/// Errors produced while building, normalizing or parsing intervals.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// An interval whose end bound lies before its start bound.
    #[error("interval end bound must be >= start bound")]
    InvalidInterval,

    /// Normalization was given no intervals at all.
    #[error("cannot normalize an empty sequence of intervals")]
    EmptyIntervalSet,

    /// A covered length that does not fit in the interval's numeric type.
    #[error("interval length overflows the numeric type")]
    LengthOverflow,

    #[error("line {line}: expected `<lo>-<hi>`, found `{text}`")]
    MalformedRange { line: usize, text: String },

    #[error("line {line}: `{text}` is not a valid integer")]
    InvalidNumber {
        line: usize,
        text: String,
        #[source]
        source: ParseIntError,
    },

    #[error("line {line}: range `{text}` ends before it starts")]
    InvertedRange { line: usize, text: String },
}
