use num_traits::{CheckedAdd, CheckedSub, Num};

use crate::interval::Interval;
use crate::Error;

use super::IntervalSet;

/// Intervals in the order they were read, overlaps and duplicates included.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_derive", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(
    feature = "serde_derive",
    serde(bound(deserialize = "N: Ord + serde::Deserialize<'de>"))
)]
#[repr(transparent)]
pub struct RawIntervals<N>(Vec<Interval<N>>);

impl<N> Default for RawIntervals<N> {
    #[inline(always)]
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<N> FromIterator<Interval<N>> for RawIntervals<N> {
    fn from_iter<T: IntoIterator<Item = Interval<N>>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<N> Extend<Interval<N>> for RawIntervals<N> {
    fn extend<T: IntoIterator<Item = Interval<N>>>(&mut self, iter: T) {
        self.0.extend(iter)
    }
}

impl<N> From<Vec<Interval<N>>> for RawIntervals<N> {
    fn from(intervals: Vec<Interval<N>>) -> Self {
        Self(intervals)
    }
}

impl<N> RawIntervals<N> {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn push(&mut self, interval: Interval<N>) {
        self.0.push(interval)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[Interval<N>] {
        &self.0
    }

    #[inline(always)]
    pub fn iter(&self) -> impl Iterator<Item = &Interval<N>> {
        self.0.iter()
    }
}

impl<N: Ord> RawIntervals<N> {
    /// Linear scan that stops at the first covering interval.
    pub fn contains(&self, point: &N) -> bool {
        self.0.iter().any(|interval| interval.contains_point(point))
    }
}

impl<N: Ord + Clone> RawIntervals<N> {
    pub fn normalize(&self) -> Result<IntervalSet<N>, Error> {
        IntervalSet::normalize(self.0.iter().map(Interval::from))
    }

    pub fn into_normalized(self) -> Result<IntervalSet<N>, Error> {
        IntervalSet::normalize(self.0)
    }
}

impl<N: Ord + Clone + Num + CheckedAdd + CheckedSub> RawIntervals<N> {
    /// Overlaps are not merged first, so this overstates the number of
    /// covered integers whenever any two intervals overlap.
    pub fn total_length(&self) -> Result<N, Error> {
        super::total_length(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pairs: &[(i64, i64)]) -> RawIntervals<i64> {
        pairs
            .iter()
            .map(|&(lo, hi)| Interval::new(lo, hi).unwrap())
            .collect()
    }

    #[test]
    fn membership_against_raw_list() {
        let ranges = raw(&[(1, 3), (5, 10)]);
        assert!(ranges.contains(&7));
        assert!(!ranges.contains(&4));
        assert!(ranges.contains(&1));
        assert!(ranges.contains(&10));
        assert!(!ranges.contains(&11));
    }

    #[test]
    fn empty_list_contains_nothing() {
        let ranges = RawIntervals::<i64>::new();
        assert!(ranges.is_empty());
        assert!(!ranges.contains(&0));
        assert_eq!(ranges.total_length(), Ok(0));
        assert_eq!(ranges.normalize(), Err(Error::EmptyIntervalSet));
    }

    #[test]
    fn raw_length_double_counts_overlaps() {
        let ranges = raw(&[(5, 10), (1, 3), (8, 12)]);
        assert_eq!(ranges.total_length(), Ok(6 + 3 + 5));
        assert_eq!(ranges.normalize().unwrap().total_length(), Ok(11));
    }

    #[test]
    fn raw_length_overflows_before_merged_length() {
        let half = u64::MAX / 2;
        let ranges: RawIntervals<u64> = vec![
            Interval::new(0, half).unwrap(),
            Interval::new(1, half).unwrap(),
            Interval::new(2, half + 1).unwrap(),
        ]
        .into();

        assert_eq!(ranges.total_length(), Err(Error::LengthOverflow));
        assert_eq!(ranges.normalize().unwrap().total_length(), Ok(half + 2));
    }

    #[test]
    fn normalize_keeps_raw_order_untouched() {
        let mut ranges = raw(&[(8, 12)]);
        ranges.extend(vec![Interval::new(1, 3).unwrap()]);
        ranges.push(Interval::new(2, 9).unwrap());

        let set = ranges.normalize().unwrap();
        assert_eq!(set.as_slice(), &[Interval::new(1, 12).unwrap()]);
        assert_eq!(ranges.as_slice()[0], Interval::new(8, 12).unwrap());
        assert_eq!(ranges.len(), 3);
        assert_eq!(ranges.into_normalized().unwrap(), set);
    }
}
