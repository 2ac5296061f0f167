//! Error types for the catalog store
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! A missed update or delete target is not an error: operations that can
//! miss return `Option` in their success type and reserve this enum for
//! genuine failures.

use std::io;
use thiserror::Error;

/// Result type alias for catalog store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the catalog store
#[derive(Debug, Error)]
pub enum Error {
    /// Persisted state exists but does not parse as a collection
    #[error("corrupt store: {0}")]
    CorruptStore(String),

    /// I/O failure while reading or writing the backing file
    #[error("persistence error: {0}")]
    Persistence(#[from] io::Error),

    /// Caller supplied a structurally malformed request
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}
