use std::fmt;
use std::ops::RangeInclusive;

use num_traits::{CheckedAdd, CheckedSub, Num};

use crate::Error;

/// A closed integer interval `[start, end]` with `start <= end`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_derive", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(
    feature = "serde_derive",
    serde(
        try_from = "RangeInclusive<N>",
        bound(deserialize = "N: Ord + serde::Deserialize<'de>")
    )
)]
pub struct Interval<N>(RangeInclusive<N>);

impl<N: Ord> TryFrom<RangeInclusive<N>> for Interval<N> {
    type Error = Error;

    fn try_from(range: RangeInclusive<N>) -> Result<Self, Self::Error> {
        if range.end() < range.start() {
            return Err(Error::InvalidInterval);
        }
        Ok(Self(range))
    }
}

impl<N: Ord + Clone> From<&'_ Interval<N>> for Interval<N> {
    fn from(interval: &Interval<N>) -> Self {
        interval.clone()
    }
}

impl<N: fmt::Display> fmt::Display for Interval<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start(), self.end())
    }
}

impl<N> Interval<N> {
    pub fn start(&self) -> &N {
        self.0.start()
    }

    pub fn end(&self) -> &N {
        self.0.end()
    }

    pub fn into_inner(self) -> (N, N) {
        self.0.into_inner()
    }
}

impl<N: Ord> Interval<N> {
    /// Builds `[start, end]`, rejecting an end bound below the start bound.
    pub fn new(start: N, end: N) -> Result<Self, Error> {
        Self::try_from(start..=end)
    }

    pub fn contains(&self, other: &Interval<N>) -> bool {
        self.start() <= other.start() && self.end() >= other.end()
    }

    pub fn contains_point(&self, point: &N) -> bool {
        self.start() <= point && self.end() >= point
    }

    pub fn overlaps(&self, other: &Interval<N>) -> bool {
        self.start() <= other.end() && other.start() <= self.end()
    }
}

impl<N: Ord + Clone> Interval<N> {
    pub fn point(value: N) -> Self {
        Self(value.clone()..=value)
    }

    // Callers guarantee `end >= self.end()`, so the bounds stay ordered.
    pub(crate) fn extend_end(&mut self, end: N) {
        debug_assert!(&end >= self.end());
        self.0 = self.start().clone()..=end;
    }
}

impl<N: Ord + Clone + Num + CheckedAdd + CheckedSub> Interval<N> {
    /// Number of integers covered, `end - start + 1`, or `None` when that
    /// count does not fit in `N`.
    pub fn size(&self) -> Option<N> {
        self.end()
            .checked_sub(self.start())?
            .checked_add(&N::one())
    }
}

impl<N: Ord + Num> Interval<N> {
    pub(crate) fn between(start: N, end: N) -> Self {
        debug_assert!(start <= end);
        Self(start..=end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_inverted_bounds() {
        assert_eq!(Interval::new(5, 4), Err(Error::InvalidInterval));
        assert_eq!(Interval::try_from(10..=-10), Err(Error::InvalidInterval));
    }

    #[test]
    fn single_point_is_valid() {
        let point = Interval::new(7, 7).unwrap();
        assert_eq!(point, Interval::point(7));
        assert_eq!(point.size(), Some(1));
        assert!(point.contains_point(&7));
        assert!(!point.contains_point(&8));
    }

    #[test]
    fn inclusive_bounds() {
        let iv = Interval::new(3u64, 5).unwrap();
        assert!(iv.contains_point(&3));
        assert!(iv.contains_point(&5));
        assert!(!iv.contains_point(&2));
        assert!(!iv.contains_point(&6));
        assert_eq!(iv.size(), Some(3));
    }

    #[test]
    fn overlap_and_containment() {
        let outer = Interval::new(1, 10).unwrap();
        let inner = Interval::new(3, 4).unwrap();
        let touching = Interval::new(10, 12).unwrap();
        let adjacent = Interval::new(11, 12).unwrap();

        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
        assert!(outer.overlaps(&inner) && inner.overlaps(&outer));
        assert!(outer.overlaps(&touching));
        assert!(!outer.overlaps(&adjacent));
    }

    #[test]
    fn size_past_the_domain_is_none() {
        assert_eq!(Interval::new(0u64, u64::MAX).unwrap().size(), None);
        assert_eq!(Interval::new(1u64, u64::MAX).unwrap().size(), Some(u64::MAX));
        assert_eq!(Interval::new(i64::MIN, i64::MAX).unwrap().size(), None);
        assert_eq!(Interval::new(-1i8, 125).unwrap().size(), Some(i8::MAX));
    }

    #[test]
    fn displays_as_input_line() {
        assert_eq!(Interval::new(3, 5).unwrap().to_string(), "3-5");
        assert_eq!(Interval::new(-2, 4).unwrap().into_inner(), (-2, 4));
    }
}
