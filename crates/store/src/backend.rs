//! Persistence abstraction for the record store
//!
//! This trait is the single seam between record semantics and persisted
//! bytes. Production uses [`JsonFileBackend`](crate::JsonFileBackend);
//! tests swap in [`MemoryBackend`](crate::MemoryBackend) without touching
//! store logic.

use stockroom_core::{Collection, Result};

/// Storage abstraction for the record store
///
/// Implementations own exactly one collection. `load` returns the current
/// state in full and `save` replaces it in full; the store performs one
/// load and at most one save per operation.
///
/// Thread safety: implementations must be shareable across threads
/// (Send + Sync). Nothing here coordinates concurrent writers: two racing
/// load-save cycles are last-writer-wins, an accepted limitation of the
/// single-writer deployment model.
pub trait StoreBackend: Send + Sync {
    /// Read the full collection
    ///
    /// Absent persisted state yields an empty collection.
    ///
    /// # Errors
    ///
    /// Returns `CorruptStore` if persisted state exists but does not parse
    /// as a collection, `Persistence` on I/O failure.
    fn load(&self) -> Result<Collection>;

    /// Replace the persisted collection in full
    ///
    /// # Errors
    ///
    /// Returns `Persistence` on I/O failure. Durability of the prior
    /// content after a failed write is not guaranteed.
    fn save(&self, collection: &Collection) -> Result<()>;
}
