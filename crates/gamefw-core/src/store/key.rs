use core::cmp::Ordering;

use super::ZIndex;

/// Total ordering key of a stored entry: layer first, then insertion sequence.
///
/// The sequence makes equal layers keep the order entries were added in,
/// independent of the sort algorithm.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    pub seq: u64,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, seq: u64) -> Self {
        Self { z, seq }
    }
}

impl Ord for SortKey {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.z.cmp(&other.z).then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for SortKey {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
