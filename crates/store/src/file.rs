//! File-backed persistence
//!
//! One JSON array of record objects in one file. Reads tolerate an absent
//! or zero-length file (empty collection); writes replace the whole file
//! in place. There is no atomic-rename step: an interrupted write can
//! leave a partial file, accepted under the single-writer model.

use crate::backend::StoreBackend;
use crate::config::StoreConfig;
use std::fs;
use std::io;
use std::path::Path;
use stockroom_core::{Collection, Error, Result};
use tracing::debug;

/// File-backed store backend
///
/// Serializes the collection as a JSON array, pretty-printed with 2-space
/// indentation unless configured otherwise.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    config: StoreConfig,
}

impl JsonFileBackend {
    /// Create a backend over the configured backing file
    ///
    /// The file is not touched until the first operation; a missing file
    /// is created by the first save.
    pub fn new(config: StoreConfig) -> Self {
        JsonFileBackend { config }
    }

    /// The configured backing file path
    pub fn path(&self) -> &Path {
        &self.config.path
    }
}

impl StoreBackend for JsonFileBackend {
    fn load(&self) -> Result<Collection> {
        let bytes = match fs::read(&self.config.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(
                    target: "stockroom::store",
                    path = ?self.config.path,
                    "backing file absent, starting empty"
                );
                return Ok(Collection::new());
            }
            Err(e) => return Err(e.into()),
        };

        // A zero-length file is an empty collection; anything else must
        // parse, whitespace included.
        if bytes.is_empty() {
            return Ok(Collection::new());
        }

        let collection: Collection =
            serde_json::from_slice(&bytes).map_err(|e| Error::CorruptStore(e.to_string()))?;
        debug!(
            target: "stockroom::store",
            path = ?self.config.path,
            records = collection.len(),
            "loaded collection"
        );
        Ok(collection)
    }

    fn save(&self, collection: &Collection) -> Result<()> {
        let bytes = if self.config.pretty {
            serde_json::to_vec_pretty(collection)
        } else {
            serde_json::to_vec(collection)
        }
        .map_err(|e| Error::Persistence(io::Error::new(io::ErrorKind::InvalidData, e)))?;

        fs::write(&self.config.path, bytes)?;
        debug!(
            target: "stockroom::store",
            path = ?self.config.path,
            records = collection.len(),
            "saved collection"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use stockroom_core::Record;
    use tempfile::TempDir;

    fn backend_in(dir: &TempDir) -> JsonFileBackend {
        JsonFileBackend::new(StoreConfig::new(dir.path().join("data.json")))
    }

    fn sample() -> Collection {
        vec![
            Record::try_from(json!({"id": 1, "name": "Shirt", "sizes": ["M"]})).unwrap(),
            Record::try_from(json!({"id": 2, "name": "Saree", "colors": ["Red"]})).unwrap(),
        ]
        .into()
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let backend = backend_in(&dir);
        let collection = backend.load().unwrap();
        assert!(collection.is_empty());
    }

    #[test]
    fn test_zero_length_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let backend = backend_in(&dir);
        fs::write(backend.path(), b"").unwrap();
        let collection = backend.load().unwrap();
        assert!(collection.is_empty());
    }

    #[test]
    fn test_whitespace_only_file_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let backend = backend_in(&dir);
        fs::write(backend.path(), b"  \n").unwrap();
        let err = backend.load().unwrap_err();
        assert!(matches!(err, Error::CorruptStore(_)));
    }

    #[test]
    fn test_non_array_file_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let backend = backend_in(&dir);
        fs::write(backend.path(), br#"{"id": 1}"#).unwrap();
        let err = backend.load().unwrap_err();
        assert!(matches!(err, Error::CorruptStore(_)));
    }

    #[test]
    fn test_array_of_non_objects_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let backend = backend_in(&dir);
        fs::write(backend.path(), b"[1, 2, 3]").unwrap();
        let err = backend.load().unwrap_err();
        assert!(matches!(err, Error::CorruptStore(_)));
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let backend = backend_in(&dir);
        let collection = sample();
        backend.save(&collection).unwrap();
        assert_eq!(backend.load().unwrap(), collection);
    }

    #[test]
    fn test_pretty_output_uses_two_space_indent() {
        let dir = TempDir::new().unwrap();
        let backend = backend_in(&dir);
        backend.save(&sample()).unwrap();
        let text = fs::read_to_string(backend.path()).unwrap();
        assert!(text.contains("\n  {"));
    }

    #[test]
    fn test_compact_output_has_no_newlines() {
        let dir = TempDir::new().unwrap();
        let config = StoreConfig::new(dir.path().join("data.json")).with_pretty(false);
        let backend = JsonFileBackend::new(config);
        backend.save(&sample()).unwrap();
        let text = fs::read_to_string(backend.path()).unwrap();
        assert!(!text.contains('\n'));
    }

    #[test]
    fn test_save_overwrites_previous_content() {
        let dir = TempDir::new().unwrap();
        let backend = backend_in(&dir);
        backend.save(&sample()).unwrap();
        backend.save(&Collection::new()).unwrap();
        assert!(backend.load().unwrap().is_empty());
    }
}
