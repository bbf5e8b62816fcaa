use super::{Layered, SortKey, ZIndex};

/// One keyed value in an [`ObjectStore`](super::ObjectStore).
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<K, V> {
    pub key: K,
    pub value: V,
    pub(crate) seq: u64,
}

impl<K, V> Entry<K, V> {
    /// Insertion sequence number within the owning store.
    #[inline]
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

impl<K, V: Layered> Entry<K, V> {
    #[inline]
    pub fn sort_key(&self) -> SortKey {
        SortKey::new(self.value.z().unwrap_or(ZIndex::BASE), self.seq)
    }
}
