use std::borrow::Borrow;
use std::fmt;

use super::{Entry, Layered};

/// Keyed values kept sorted by ascending z.
///
/// Ordering rules:
/// 1) `z`: ascending; values without a z sit on [`ZIndex::BASE`](super::ZIndex::BASE)
/// 2) insertion order for equal z
///
/// Keys are not unique: [`set`](Self::set) always appends and
/// [`get`](Self::get) returns the first match in draw order.
///
/// ```
/// use gamefw_core::store::{Layered, ObjectStore, ZIndex};
///
/// struct Sprite(f32);
/// impl Layered for Sprite {
///     fn z(&self) -> Option<ZIndex> { Some(ZIndex(self.0)) }
/// }
///
/// let mut store = ObjectStore::new();
/// store.set("tree", Sprite(5.0));
/// store.set("ground", Sprite(1.0));
/// let keys: Vec<_> = store.keys().copied().collect();
/// assert_eq!(keys, ["ground", "tree"]);
/// ```
pub struct ObjectStore<K, V> {
    entries: Vec<Entry<K, V>>,
    next_seq: u64,
}

impl<K, V> Default for ObjectStore<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
        }
    }
}

impl<K, V: Layered> ObjectStore<K, V> {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First value stored under `key`, scanning in draw order.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.entries
            .iter()
            .find(|e| e.key.borrow() == key)
            .map(|e| &e.value)
    }

    /// Read-only view of all entries in draw order.
    #[inline]
    pub fn entries(&self) -> &[Entry<K, V>] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|e| (&e.key, &e.value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|e| &e.key)
    }

    /// Appends a new entry and re-sorts. Existing entries with the same key
    /// are left alone.
    pub fn set(&mut self, key: K, value: V) {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);

        self.entries.push(Entry { key, value, seq });
        self.sort();

        log::trace!("store: appended entry #{seq} ({} total)", self.entries.len());
    }

    /// Re-establishes draw order.
    pub fn sort(&mut self) {
        self.entries.sort_by_key(Entry::sort_key);
    }

    /// Mutates the first value under `key`, then re-sorts.
    pub fn with_mut<Q, R>(&mut self, key: &Q, f: impl FnOnce(&mut V) -> R) -> Option<R>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let entry = self.entries.iter_mut().find(|e| e.key.borrow() == key)?;
        let out = f(&mut entry.value);
        self.sort();
        Some(out)
    }

    /// Visits every value in draw order, then re-sorts so z changes made by
    /// `f` take effect.
    pub fn update_each(&mut self, mut f: impl FnMut(&K, &mut V)) {
        for e in &mut self.entries {
            f(&e.key, &mut e.value);
        }
        self.sort();
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for ObjectStore<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries.iter().map(|e| (&e.key, &e.value))).finish()
    }
}
