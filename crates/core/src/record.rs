//! Record and identifier types
//!
//! This module defines the unit of storage and filtering:
//! - Record: one catalog entry, a schema-agnostic JSON object
//! - RecordId: validated identifier (a JSON string or number)
//!
//! The store is deliberately schema-agnostic: a Record persists whatever
//! structurally valid JSON object the caller supplies and round-trips it
//! unchanged, including fields this crate knows nothing about. The typed
//! accessors below are conveniences over the well-known fields, never
//! validators.

use crate::error::{Error, Result};
use crate::facet::Facet;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::ops::{Deref, DerefMut};

/// Name of the JSON type carried by a value, for error messages
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// =============================================================================
// Record
// =============================================================================

/// One catalog entry
///
/// Newtype around a JSON object providing:
/// - Direct access to the underlying map via Deref/DerefMut
/// - Typed accessors for the well-known fields (`id`, `name`, `design`,
///   `sizes`, `colors`, `price`)
/// - Per-facet value extraction for the filter engine
///
/// # Examples
///
/// ```
/// use stockroom_core::{Facet, Record};
/// use serde_json::json;
///
/// let record = Record::try_from(json!({
///     "id": 1,
///     "name": "Shirt",
///     "sizes": ["M", "L"],
/// }))
/// .unwrap();
///
/// assert_eq!(record.name(), Some("Shirt"));
/// assert_eq!(record.facet_values(Facet::Sizes).count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Record(Map::new())
    }

    /// Get the underlying JSON object
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    /// View the record as a `serde_json::Value`
    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }

    /// The `id` field, if present
    ///
    /// Identifiers are caller-supplied and opaque; a record without one is
    /// structurally valid and simply never matches an id lookup.
    pub fn id(&self) -> Option<&Value> {
        self.0.get("id")
    }

    /// The `name` field, if present and a string
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// The `design` field, if present and a string
    pub fn design(&self) -> Option<&str> {
        self.0.get("design").and_then(Value::as_str)
    }

    /// String elements of the `sizes` array
    ///
    /// Yields nothing if the field is absent or not an array; non-string
    /// elements are skipped.
    pub fn sizes<'a>(&'a self) -> impl Iterator<Item = &'a str> + 'a {
        self.str_list("sizes")
    }

    /// String elements of the `colors` array, same tolerance as [`sizes`](Self::sizes)
    pub fn colors<'a>(&'a self) -> impl Iterator<Item = &'a str> + 'a {
        self.str_list("colors")
    }

    /// The `price` field, if present
    ///
    /// Opaque to the store: no numeric validation is performed.
    pub fn price(&self) -> Option<&Value> {
        self.0.get("price")
    }

    /// All of this record's string values for one facet
    ///
    /// Scalar facets yield zero or one value, list facets yield each string
    /// element in order. This is the single extraction point shared by
    /// facet universes, facet constraints, and free-text search.
    pub fn facet_values<'a>(&'a self, facet: Facet) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        match facet {
            Facet::Name => Box::new(self.name().into_iter()),
            Facet::Design => Box::new(self.design().into_iter()),
            Facet::Sizes => Box::new(self.sizes()),
            Facet::Colors => Box::new(self.colors()),
        }
    }

    fn str_list<'a>(&'a self, field: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .get(field)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .filter_map(Value::as_str)
    }
}

impl Deref for Record {
    type Target = Map<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Record {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Record(map)
    }
}

impl TryFrom<Value> for Record {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Record(map)),
            other => Err(Error::InvalidRequest(format!(
                "record must be a JSON object, got {}",
                json_type_name(&other)
            ))),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Value::Object(self.0.clone()))
    }
}

// =============================================================================
// RecordId
// =============================================================================

/// Validated record identifier
///
/// Wraps the JSON value a record carries in its `id` field, restricted to
/// strings and numbers. Comparison is exact JSON equality with no coercion
/// between types: a numeric id never matches a string id, and `1` does not
/// match `1.0` or `"1"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RecordId(Value);

impl RecordId {
    /// View the identifier as a `serde_json::Value`
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Whether `candidate` (a record's `id` field) equals this identifier
    ///
    /// A record without an `id` field never matches.
    pub fn matches(&self, candidate: Option<&Value>) -> bool {
        candidate == Some(&self.0)
    }
}

impl TryFrom<Value> for RecordId {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(_) | Value::Number(_) => Ok(RecordId(value)),
            other => Err(Error::InvalidRequest(format!(
                "identifier must be a string or number, got {}",
                json_type_name(&other)
            ))),
        }
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        RecordId(Value::String(id.to_string()))
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        RecordId(Value::String(id))
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        RecordId(Value::from(id))
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        RecordId(Value::from(id))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
