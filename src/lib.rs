//! Stockroom - File-backed product catalog store with multi-facet filtering
//!
//! Stockroom turns one JSON array file into a small catalog-management
//! core: a stateless CRUD record store plus a pure filter engine for
//! narrowing a loaded snapshot by name, design, size, color, and
//! free-text search.
//!
//! # Quick Start
//!
//! ```ignore
//! use stockroom::{FilterSelections, Record, RecordStore};
//! use serde_json::json;
//!
//! // Open a store over its backing file
//! let store = RecordStore::open("data.json");
//!
//! // Append a record (ids are caller-supplied)
//! store.append(Record::try_from(json!({
//!     "id": 1, "name": "Shirt", "sizes": ["M", "L"], "price": 25,
//! }))?)?;
//!
//! // Load a snapshot, then filter it locally
//! let snapshot = store.list()?;
//! let selections = FilterSelections::new().with_size("M");
//! let view = stockroom::evaluate(&snapshot, &selections);
//! ```
//!
//! # Architecture
//!
//! Two components share nothing but the on-disk file. The record store
//! ([`RecordStore`]) performs a full load-mutate-save cycle per call; the
//! filter engine ([`evaluate`], [`FacetUniverses`]) works purely on the
//! snapshot a `list` returned and never touches the file. Callers
//! re-snapshot after any mutation.

// Re-export the public API of the member crates
pub use stockroom_core::*;
pub use stockroom_filter::*;
pub use stockroom_store::*;
