//! Keyed object store kept in draw order.
//!
//! Responsibilities:
//! - hold caller-keyed entries (keys are not unique)
//! - keep entries ordered by ascending z, insertion order within a layer
//! - expose the ordering only through read-only views so it cannot be broken
//!
//! Every `set` re-sorts the whole store: O(n log n) per insertion. Fine for the
//! object counts of a single game state; batch loading thousands of objects
//! will feel it.

mod entry;
mod key;
mod layered;
mod object_store;
mod z_index;

pub use entry::Entry;
pub use key::SortKey;
pub use layered::Layered;
pub use object_store::ObjectStore;
pub use z_index::ZIndex;
