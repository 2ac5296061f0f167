//! Delete request validation
//!
//! The wire shape for a batch delete is `{"ids": [...]}`. Validation is
//! strict and happens before any backend access: a malformed request never
//! touches the backing file.

use serde_json::Value;
use stockroom_core::{Error, RecordId, Result};
use tracing::warn;

/// Validated batch-delete request
///
/// Carries the id set in request order. An empty id set is a valid
/// request; it simply matches nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteRequest {
    ids: Vec<RecordId>,
}

impl DeleteRequest {
    /// Build a request from already-validated identifiers
    pub fn new(ids: Vec<RecordId>) -> Self {
        DeleteRequest { ids }
    }

    /// Parse and validate the wire shape `{"ids": [...]}`
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` if the body is not a JSON object, the
    /// `ids` field is missing or not an array, or any element is not a
    /// string or number.
    pub fn from_value(body: Value) -> Result<Self> {
        match Self::parse(body) {
            Ok(ids) => Ok(DeleteRequest { ids }),
            Err(e) => {
                warn!(target: "stockroom::store", error = %e, "rejected delete request");
                Err(e)
            }
        }
    }

    fn parse(body: Value) -> Result<Vec<RecordId>> {
        let mut map = match body {
            Value::Object(map) => map,
            _ => {
                return Err(Error::InvalidRequest(
                    "request body must be a JSON object".to_string(),
                ))
            }
        };
        let raw = match map.remove("ids") {
            Some(Value::Array(raw)) => raw,
            _ => return Err(Error::InvalidRequest("ids must be an array".to_string())),
        };
        raw.into_iter().map(RecordId::try_from).collect()
    }

    /// The validated identifiers, in request order
    pub fn ids(&self) -> &[RecordId] {
        &self.ids
    }

    /// Consume the request, yielding the identifiers
    pub fn into_ids(self) -> Vec<RecordId> {
        self.ids
    }
}
