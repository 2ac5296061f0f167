//! Record store operations
//!
//! Stateless CRUD over one collection: every operation loads the backing
//! collection fresh, mutates in memory, and saves in full. Nothing is
//! cached between calls and no locks are taken; racing writers are
//! last-writer-wins.

use crate::backend::StoreBackend;
use crate::config::StoreConfig;
use crate::file::JsonFileBackend;
use std::path::Path;
use stockroom_core::{Collection, Record, RecordId, Result};
use tracing::{debug, info, warn};

/// CRUD surface over a persistence backend
///
/// Generic over [`StoreBackend`]: production code opens it over a
/// [`JsonFileBackend`], tests construct it over a
/// [`MemoryBackend`](crate::MemoryBackend). Operations that can miss
/// (update, delete) return `Option` rather than an error; a miss performs
/// no write.
#[derive(Debug)]
pub struct RecordStore<B> {
    backend: B,
}

impl RecordStore<JsonFileBackend> {
    /// Open a store over a JSON file with default settings
    pub fn open(path: impl AsRef<Path>) -> Self {
        RecordStore::with_backend(JsonFileBackend::new(StoreConfig::new(path)))
    }

    /// Open a store over a JSON file with explicit configuration
    pub fn with_config(config: StoreConfig) -> Self {
        RecordStore::with_backend(JsonFileBackend::new(config))
    }
}

impl<B: StoreBackend> RecordStore<B> {
    /// Build a store over any backend
    pub fn with_backend(backend: B) -> Self {
        RecordStore { backend }
    }

    /// Access the underlying backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Read the full collection
    pub fn list(&self) -> Result<Collection> {
        let collection = self.backend.load()?;
        debug!(target: "stockroom::store", records = collection.len(), "list");
        Ok(collection)
    }

    /// Append one record at the end of the collection
    ///
    /// No uniqueness check is made on `id`: appending a record whose id
    /// duplicates an existing entry stores a duplicate, and the file grows
    /// by one entry either way. Returns the record echoed back unchanged.
    pub fn append(&self, record: Record) -> Result<Record> {
        let mut collection = self.backend.load()?;
        collection.push(record.clone());
        self.backend.save(&collection)?;
        info!(
            target: "stockroom::store",
            records = collection.len(),
            "appended record"
        );
        Ok(record)
    }

    /// Replace the first record whose `id` equals the incoming record's
    ///
    /// On a hit the element is replaced at its original position, the
    /// collection is saved, and the stored record is echoed back. On a
    /// miss nothing is written and `None` is returned; a miss is a normal
    /// outcome, not an error, and it is never treated as a create.
    ///
    /// Matching compares the two `id` fields exactly, including the case
    /// where both records lack one: an id-less incoming record replaces
    /// the first id-less stored record.
    pub fn update(&self, record: Record) -> Result<Option<Record>> {
        let mut collection = self.backend.load()?;
        let position = collection
            .iter()
            .position(|stored| stored.id() == record.id());
        match position {
            Some(index) => {
                collection[index] = record.clone();
                self.backend.save(&collection)?;
                info!(target: "stockroom::store", index, "updated record");
                Ok(Some(record))
            }
            None => {
                warn!(
                    target: "stockroom::store",
                    id = ?record.id(),
                    "update target not found"
                );
                Ok(None)
            }
        }
    }

    /// Remove every record whose `id` is a member of `ids`
    ///
    /// On a hit the remainder is saved and the removed records are
    /// returned in their original relative order. When nothing matches
    /// (including an empty id set) nothing is written and `None` is
    /// returned.
    pub fn delete_by_ids(&self, ids: &[RecordId]) -> Result<Option<Vec<Record>>> {
        let collection = self.backend.load()?;
        let (deleted, kept): (Vec<Record>, Vec<Record>) = collection
            .into_iter()
            .partition(|record| ids.iter().any(|id| id.matches(record.id())));

        if deleted.is_empty() {
            warn!(target: "stockroom::store", "no records matched the delete id set");
            return Ok(None);
        }

        self.backend.save(&Collection::from(kept))?;
        info!(
            target: "stockroom::store",
            deleted = deleted.len(),
            "deleted records"
        );
        Ok(Some(deleted))
    }
}
