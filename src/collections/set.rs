use std::cmp::Ordering;

use num_traits::{CheckedAdd, CheckedSub, Num};
use tracing::debug;

use crate::interval::Interval;
use crate::Error;

use super::{Entry, RawIntervals};

/// A non-empty sequence of intervals sorted by start bound, where every
/// interval starts strictly after the previous one ends.
///
/// Intervals are merged only when they overlap: `[1, 2]` and `[3, 4]` touch
/// but stay separate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_derive", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(
    feature = "serde_derive",
    serde(
        try_from = "RawIntervals<N>",
        bound(deserialize = "N: Ord + Clone + serde::Deserialize<'de>")
    )
)]
#[repr(transparent)]
pub struct IntervalSet<N>(Vec<Interval<N>>);

impl<N: Ord + Clone> TryFrom<RawIntervals<N>> for IntervalSet<N> {
    type Error = Error;

    fn try_from(raw: RawIntervals<N>) -> Result<Self, Self::Error> {
        raw.into_normalized()
    }
}

impl<N> IntoIterator for IntervalSet<N> {
    type Item = Interval<N>;
    type IntoIter = std::vec::IntoIter<Interval<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, N> IntoIterator for &'a IntervalSet<N> {
    type Item = &'a Interval<N>;
    type IntoIter = std::slice::Iter<'a, Interval<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<N> IntervalSet<N> {
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
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

impl<N: Ord + Clone> IntervalSet<N> {
    /// Sorts `intervals` by start bound and merges every interval that starts
    /// at or before the end of the previously merged one.
    ///
    /// The sort is stable and the start bound of a merged interval is never
    /// lowered, since later intervals never start earlier. Fails with
    /// [`Error::EmptyIntervalSet`] when `intervals` yields nothing.
    pub fn normalize<I>(intervals: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = Interval<N>>,
    {
        let mut sorted = intervals.into_iter().collect::<Vec<_>>();
        if sorted.is_empty() {
            return Err(Error::EmptyIntervalSet);
        }

        sorted.sort_by(|l, r| l.start().cmp(r.start()));

        let raw = sorted.len();
        let mut merged: Vec<Interval<N>> = Vec::with_capacity(raw);

        for interval in sorted {
            if let Some(last) = merged.last_mut() {
                if interval.start() <= last.end() {
                    if interval.end() > last.end() {
                        let (_, end) = interval.into_inner();
                        last.extend_end(end);
                    }
                    continue;
                }
            }
            merged.push(interval);
        }

        debug!(raw, merged = merged.len(), "normalized intervals");

        Ok(Self(merged))
    }

    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<Entry<N>> {
        self.0.get(index).map(|interval| Entry { index, interval })
    }

    pub fn find_point(&self, point: &N) -> Option<Entry<N>> {
        self.0
            .binary_search_by(|v| {
                if v.contains_point(point) {
                    Ordering::Equal
                } else if point < v.start() {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            })
            .ok()
            .and_then(|index| self.get(index))
    }

    #[inline(always)]
    pub fn contains(&self, point: &N) -> bool {
        self.find_point(point).is_some()
    }

    pub fn overlaps(&self, interval: &Interval<N>) -> bool {
        let first = self.0.partition_point(|v| v.end() < interval.start());
        self.0
            .get(first)
            .map_or(false, |v| v.start() <= interval.end())
    }

    pub fn count_contained<'a, I>(&self, points: I) -> usize
    where
        N: 'a,
        I: IntoIterator<Item = &'a N>,
    {
        points.into_iter().filter(|p| self.contains(p)).count()
    }
}

impl<N: Ord + Clone + Num + CheckedAdd + CheckedSub> IntervalSet<N> {
    /// Number of distinct integers covered by the set, or
    /// [`Error::LengthOverflow`] if that count does not fit in `N`.
    pub fn total_length(&self) -> Result<N, Error> {
        super::total_length(&self.0)
    }
}

impl<N: Ord + Clone + Num> IntervalSet<N> {
    /// The maximal sub-intervals of `within` not covered by the set, in
    /// ascending order.
    pub fn gaps(&self, within: &Interval<N>) -> Vec<Interval<N>> {
        let first = self.0.partition_point(|v| v.end() < within.start());

        let mut gaps = Vec::new();
        let mut cursor = within.start().clone();

        for v in &self.0[first..] {
            if v.start() > within.end() {
                break;
            }
            if v.start() > &cursor {
                gaps.push(Interval::between(cursor, v.start().clone() - N::one()));
            }
            if v.end() >= within.end() {
                return gaps;
            }
            cursor = v.end().clone() + N::one();
        }

        gaps.push(Interval::between(cursor, within.end().clone()));
        gaps
    }
}
