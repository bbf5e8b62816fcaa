use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

/// Draw layer of a stored value. Lower layers are drawn first.
///
/// Wraps an `f32` and orders it with [`f32::total_cmp`], so every value,
/// NaN included, has a fixed place and sorting never panics.
#[derive(Debug, Copy, Clone, Default)]
pub struct ZIndex(pub f32);

impl ZIndex {
    /// Layer used for values that report no z.
    pub const BASE: ZIndex = ZIndex(0.0);

    #[inline]
    pub const fn new(v: f32) -> Self {
        Self(v)
    }

    #[inline]
    pub const fn get(self) -> f32 {
        self.0
    }
}

impl Ord for ZIndex {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for ZIndex {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ZIndex {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ZIndex {}

// Equal under `total_cmp` means bit-identical.
impl Hash for ZIndex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl From<f32> for ZIndex {
    fn from(v: f32) -> Self {
        Self(v)
    }
}

impl From<i32> for ZIndex {
    fn from(v: i32) -> Self {
        Self(v as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_numerically() {
        assert!(ZIndex(-1.0) < ZIndex::BASE);
        assert!(ZIndex(2.5) > ZIndex::from(2));
        assert_eq!(ZIndex::from(3), ZIndex(3.0));
    }

    #[test]
    fn nan_has_a_fixed_place() {
        let nan = ZIndex(f32::NAN);
        assert_eq!(nan, nan);
        assert!(nan > ZIndex(f32::INFINITY));
    }
}
