use num_traits::{CheckedAdd, CheckedSub, Num};

use crate::interval::Interval;
use crate::Error;

mod entry;
pub use entry::Entry;

mod raw;
pub use raw::RawIntervals;

pub mod set;
pub use set::IntervalSet;

/// Sums the inclusive length `end - start + 1` of every interval.
///
/// The intervals must be pairwise disjoint for the result to be a count of
/// covered integers. Overlapping input is summed as-is, so any overlap is
/// counted once per interval covering it. Fails with
/// [`Error::LengthOverflow`] when the sum does not fit in `N`.
pub fn total_length<'a, N, I>(intervals: I) -> Result<N, Error>
where
    N: Ord + Clone + Num + CheckedAdd + CheckedSub + 'a,
    I: IntoIterator<Item = &'a Interval<N>>,
{
    intervals.into_iter().try_fold(N::zero(), |total, interval| {
        interval
            .size()
            .and_then(|size| total.checked_add(&size))
            .ok_or(Error::LengthOverflow)
    })
}
