//! File-backed record store
//!
//! The persistence half of Stockroom: stateless CRUD over a JSON-array
//! backing file, behind a swappable backend seam.
//!
//! - StoreBackend: the load/save seam
//! - JsonFileBackend: production file persistence
//! - MemoryBackend: in-memory fake for tests and embedding
//! - StoreConfig: backing file settings
//! - RecordStore: list / append / update / delete_by_ids
//! - DeleteRequest: validated wire shape for batch deletes
//!
//! Every operation is an independent load-mutate-save cycle; the store
//! keeps no state between calls.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod config;
pub mod file;
pub mod memory;
pub mod request;
pub mod store;

// Re-export commonly used types
pub use backend::StoreBackend;
pub use config::StoreConfig;
pub use file::JsonFileBackend;
pub use memory::MemoryBackend;
pub use request::DeleteRequest;
pub use store::RecordStore;
