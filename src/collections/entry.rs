use crate::interval::Interval;

/// A normalized interval together with its position in the set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry<'a, N: Ord + Clone> {
    pub(crate) index: usize,
    pub(crate) interval: &'a Interval<N>,
}

impl<'a, N: Ord + Clone + 'a> Entry<'a, N> {
    #[inline(always)]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline(always)]
    pub fn interval(&self) -> &'a Interval<N> {
        self.interval
    }
}
