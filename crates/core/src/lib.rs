//! Core types for Stockroom
//!
//! This crate defines the foundational types used throughout the system:
//! - Record: one catalog entry, a schema-agnostic JSON object
//! - RecordId: validated identifier (a JSON string or number)
//! - Collection: the ordered sequence of records a backing file holds
//! - Facet: the filterable attributes (name, design, sizes, colors)
//! - Error: error type hierarchy
//!
//! No I/O happens here; persistence lives in `stockroom-store` and
//! filtering in `stockroom-filter`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod collection;
pub mod error;
pub mod facet;
pub mod record;

// Re-export commonly used types
pub use collection::Collection;
pub use error::{Error, Result};
pub use facet::Facet;
pub use record::{Record, RecordId};
