//! Store configuration
//!
//! Controls where the backing file lives and how it is written.

use std::path::{Path, PathBuf};

/// Record store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path of the backing JSON file
    pub path: PathBuf,
    /// Pretty-print saved JSON with 2-space indentation
    pub pretty: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            path: PathBuf::from("data.json"),
            pretty: true,
        }
    }
}

impl StoreConfig {
    /// Create a config for the given backing file
    ///
    /// Saved output is pretty-printed by default, matching how the file is
    /// meant to be inspected and hand-edited.
    pub fn new(path: impl AsRef<Path>) -> Self {
        StoreConfig {
            path: path.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    /// Set the backing file path
    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = path.as_ref().to_path_buf();
        self
    }

    /// Toggle pretty-printing of saved JSON
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
