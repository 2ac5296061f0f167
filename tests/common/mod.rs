//! Shared test utilities for the workspace integration suites
//!
//! Import via `mod common;` from any test root.

#![allow(dead_code)]
#![allow(unused_imports)]

use std::path::PathBuf;
pub use stockroom::{
    evaluate, facet_universe, Collection, DeleteRequest, Facet, FacetUniverses, FilterSelections,
    JsonFileBackend, Record, RecordId, RecordStore, SelectionSet, StoreBackend, StoreConfig,
};
use tempfile::TempDir;

// ============================================================================
// TestCatalog - store over a throwaway backing file
// ============================================================================

/// Record store wrapper owning its temp directory
pub struct TestCatalog {
    pub store: RecordStore<JsonFileBackend>,
    pub dir: TempDir,
}

impl TestCatalog {
    /// Create a catalog over a fresh backing file
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let store = RecordStore::open(dir.path().join("data.json"));
        TestCatalog { store, dir }
    }

    /// Create a catalog pre-populated with [`sample_records`]
    pub fn seeded() -> Self {
        let catalog = Self::new();
        for record in sample_records() {
            catalog.store.append(record).expect("seed record");
        }
        catalog
    }

    /// Path of the backing file
    pub fn path(&self) -> PathBuf {
        self.dir.path().join("data.json")
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// Build a record from a JSON literal
pub fn record(value: serde_json::Value) -> Record {
    Record::try_from(value).expect("record fixture must be an object")
}

/// Four clothing records with overlapping facet values
pub fn sample_records() -> Vec<Record> {
    vec![
        record(serde_json::json!({
            "id": 1, "name": "Shirt", "design": "Plain",
            "sizes": ["M", "L"], "colors": ["Blue", "White"],
            "price": 25, "barcode": "890100000001",
        })),
        record(serde_json::json!({
            "id": 2, "name": "Shirt", "design": "Checked",
            "sizes": ["S", "M"], "colors": ["Red"],
            "price": 30, "barcode": "890100000002",
        })),
        record(serde_json::json!({
            "id": 3, "name": "Saree", "design": "Floral",
            "sizes": ["Free"], "colors": ["Green", "Gold"],
            "price": 75, "barcode": "890100000003",
        })),
        record(serde_json::json!({
            "id": 4, "name": "Kurta", "design": "Plain",
            "sizes": ["M", "XL"], "colors": ["Black"],
            "price": 40, "barcode": "890100000004",
        })),
    ]
}

/// Ids of a filtered view, for terse assertions
pub fn view_ids(view: &[&Record]) -> Vec<i64> {
    view.iter()
        .map(|r| {
            r.id()
                .and_then(serde_json::Value::as_i64)
                .expect("fixture records carry numeric ids")
        })
        .collect()
}
