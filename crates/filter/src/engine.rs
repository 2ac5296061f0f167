//! Predicate evaluation and facet universes
//!
//! Pure functions over an immutable snapshot: no I/O, no mutation, no
//! internal state. Facet constraints AND together; the free-text clause
//! ORs across every facet value with case-insensitive substring matching.
//! Universes always come from the full snapshot, so dropdown options never
//! shrink as filters are applied.

use crate::selections::FilterSelections;
use std::collections::HashSet;
use stockroom_core::{Collection, Facet, Record};

/// Records satisfying every active constraint, in snapshot order
///
/// A record passes when each selected facet matches (exact equality for
/// scalar facets, membership for multi-valued ones) and, if a query is
/// active, at least one of its facet values contains the query
/// case-insensitively. With nothing active this is the whole snapshot.
pub fn evaluate<'a>(snapshot: &'a Collection, selections: &FilterSelections) -> Vec<&'a Record> {
    let query = selections.query().map(str::to_lowercase);
    snapshot
        .iter()
        .filter(|record| matches(record, selections, query.as_deref()))
        .collect()
}

fn matches(record: &Record, selections: &FilterSelections, query: Option<&str>) -> bool {
    for facet in Facet::ALL {
        if let Some(selection) = selections.selection(facet) {
            if !record.facet_values(facet).any(|value| value == selection) {
                return false;
            }
        }
    }

    match query {
        Some(needle) => Facet::ALL.iter().any(|facet| {
            record
                .facet_values(*facet)
                .any(|value| value.to_lowercase().contains(needle))
        }),
        None => true,
    }
}

/// Distinct values one facet takes across the full snapshot
///
/// First-appearance order, scanning records front to back and list
/// entries left to right. Independent of any active filter.
pub fn facet_universe(snapshot: &Collection, facet: Facet) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut values = Vec::new();
    for record in snapshot {
        for value in record.facet_values(facet) {
            if seen.insert(value) {
                values.push(value.to_string());
            }
        }
    }
    values
}

/// The four dropdown universes, computed from the same snapshot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacetUniverses {
    /// Distinct `name` values
    pub names: Vec<String>,
    /// Distinct `design` values
    pub designs: Vec<String>,
    /// Distinct `sizes` entries
    pub sizes: Vec<String>,
    /// Distinct `colors` entries
    pub colors: Vec<String>,
}

impl FacetUniverses {
    /// Compute every universe from one snapshot
    pub fn from_snapshot(snapshot: &Collection) -> Self {
        FacetUniverses {
            names: facet_universe(snapshot, Facet::Name),
            designs: facet_universe(snapshot, Facet::Design),
            sizes: facet_universe(snapshot, Facet::Sizes),
            colors: facet_universe(snapshot, Facet::Colors),
        }
    }

    /// The universe backing one facet's dropdown
    pub fn for_facet(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Name => &self.names,
            Facet::Design => &self.designs,
            Facet::Sizes => &self.sizes,
            Facet::Colors => &self.colors,
        }
    }
}
