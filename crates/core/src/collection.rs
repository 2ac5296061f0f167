//! The persisted sequence of records
//!
//! A Collection is what the backing file serializes to: a JSON array of
//! record objects. Insertion order is significant only in that appends go
//! at the end; every operation that returns records preserves their
//! relative order.

use crate::record::Record;
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};

/// Ordered sequence of records, the unit of persistence
///
/// Newtype around `Vec<Record>` providing slice access via Deref/DerefMut.
/// Mutation beyond in-place element replacement goes through [`push`](Self::push)
/// or by consuming the collection with `into_iter` and rebuilding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Collection(Vec<Record>);

impl Collection {
    /// Create an empty collection
    pub fn new() -> Self {
        Collection(Vec::new())
    }

    /// Append a record at the end
    pub fn push(&mut self, record: Record) {
        self.0.push(record);
    }

    /// Get the underlying vector
    pub fn into_inner(self) -> Vec<Record> {
        self.0
    }
}

impl Deref for Collection {
    type Target = [Record];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Collection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<Record>> for Collection {
    fn from(records: Vec<Record>) -> Self {
        Collection(records)
    }
}

impl FromIterator<Record> for Collection {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Collection(iter.into_iter().collect())
    }
}

impl IntoIterator for Collection {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
