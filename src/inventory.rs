//! Parsing of the fresh-ingredient database.
//!
//! The input is a block of `<lo>-<hi>` ranges, a blank line, then one
//! ingredient ID per line:
//!
//! ```text
//! 3-5
//! 10-14
//!
//! 4
//! 12
//! ```

use std::collections::BTreeSet;
use std::str::FromStr;

use tracing::debug;

use crate::collections::RawIntervals;
use crate::interval::Interval;
use crate::Error;

/// Fresh ID ranges and the ingredient IDs to check against them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    ranges: RawIntervals<u64>,
    ids: BTreeSet<u64>,
}

impl FromStr for Inventory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines().enumerate().map(|(i, line)| (i + 1, line.trim()));

        let mut ranges = RawIntervals::new();
        for (line, text) in lines.by_ref() {
            if text.is_empty() {
                break;
            }
            ranges.push(parse_range(line, text)?);
        }

        let mut ids = BTreeSet::new();
        for (line, text) in lines.filter(|(_, text)| !text.is_empty()) {
            ids.insert(parse_number(line, text)?);
        }

        debug!(ranges = ranges.len(), ids = ids.len(), "parsed inventory");

        Ok(Self { ranges, ids })
    }
}

fn parse_number(line: usize, text: &str) -> Result<u64, Error> {
    text.parse().map_err(|source| Error::InvalidNumber {
        line,
        text: text.to_owned(),
        source,
    })
}

fn parse_range(line: usize, text: &str) -> Result<Interval<u64>, Error> {
    let (lo, hi) = text.split_once('-').ok_or_else(|| Error::MalformedRange {
        line,
        text: text.to_owned(),
    })?;

    let lo = parse_number(line, lo.trim())?;
    let hi = parse_number(line, hi.trim())?;

    Interval::new(lo, hi).map_err(|_| Error::InvertedRange {
        line,
        text: text.to_owned(),
    })
}

impl Inventory {
    pub fn new(ranges: RawIntervals<u64>, ids: BTreeSet<u64>) -> Self {
        Self { ranges, ids }
    }

    pub fn ranges(&self) -> &RawIntervals<u64> {
        &self.ranges
    }

    pub fn ids(&self) -> &BTreeSet<u64> {
        &self.ids
    }

    /// Number of distinct IDs covered by at least one raw range.
    pub fn fresh_count(&self) -> usize {
        self.ids
            .iter()
            .filter(|id| self.ranges.contains(id))
            .count()
    }

    /// Number of distinct IDs the ranges cover in total.
    ///
    /// Counted in `u128`, since a range spanning all of `u64` covers
    /// `u64::MAX + 1` IDs.
    pub fn total_fresh(&self) -> Result<u128, Error> {
        let wide = self
            .ranges
            .normalize()?
            .into_iter()
            .map(|interval| {
                let (lo, hi) = interval.into_inner();
                Interval::between(u128::from(lo), u128::from(hi))
            })
            .collect::<Vec<_>>();
        crate::total_length(&wide)
    }
}
