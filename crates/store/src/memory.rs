//! In-memory persistence
//!
//! Backend fake for tests and for embedders that do not want a file.
//! Holds the collection behind a `parking_lot::RwLock`; load clones the
//! current state, save replaces it.

use crate::backend::StoreBackend;
use parking_lot::RwLock;
use stockroom_core::{Collection, Result};

/// In-memory store backend
///
/// Behaves exactly like [`JsonFileBackend`](crate::JsonFileBackend) minus
/// the file: same full-state load/save contract, no I/O failures.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    data: RwLock<Collection>,
}

impl MemoryBackend {
    /// Create an empty in-memory backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend pre-seeded with a collection
    pub fn seeded(collection: Collection) -> Self {
        MemoryBackend {
            data: RwLock::new(collection),
        }
    }

    /// Number of records currently held
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Whether no records are held
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

impl StoreBackend for MemoryBackend {
    fn load(&self) -> Result<Collection> {
        Ok(self.data.read().clone())
    }

    fn save(&self, collection: &Collection) -> Result<()> {
        *self.data.write() = collection.clone();
        Ok(())
    }
}
