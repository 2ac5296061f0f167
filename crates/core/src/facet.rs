//! Facet enumeration
//!
//! A facet is one of the record attributes usable as a filter dimension.
//! There are exactly four: two scalar (`name`, `design`) and two
//! multi-valued (`sizes`, `colors`). The free-text search clause spans all
//! four.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four filterable record attributes
///
/// Scalar facets hold one free-text value per record and filter by exact
/// equality; multi-valued facets hold a list of tokens per record and
/// filter by membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facet {
    /// Product name (scalar)
    Name,
    /// Design or pattern (scalar)
    Design,
    /// Available sizes (multi-valued)
    Sizes,
    /// Available colors (multi-valued)
    Colors,
}

impl Facet {
    /// All facets (for iteration)
    pub const ALL: [Facet; 4] = [Facet::Name, Facet::Design, Facet::Sizes, Facet::Colors];

    /// Get all facets as a slice
    pub fn all() -> &'static [Facet] {
        &Self::ALL
    }

    /// The record field this facet reads
    pub const fn field_name(&self) -> &'static str {
        match self {
            Facet::Name => "name",
            Facet::Design => "design",
            Facet::Sizes => "sizes",
            Facet::Colors => "colors",
        }
    }

    /// Parse from a record field name
    pub fn from_field_name(field: &str) -> Option<Self> {
        match field {
            "name" => Some(Facet::Name),
            "design" => Some(Facet::Design),
            "sizes" => Some(Facet::Sizes),
            "colors" => Some(Facet::Colors),
            _ => None,
        }
    }

    /// Whether this facet holds a list of tokens rather than one value
    pub const fn is_multi_valued(&self) -> bool {
        matches!(self, Facet::Sizes | Facet::Colors)
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.field_name())
    }
}
