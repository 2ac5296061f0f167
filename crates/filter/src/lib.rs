//! Multi-facet filtering over a catalog snapshot
//!
//! The query half of Stockroom. Everything here is pure: the caller loads
//! a snapshot with the store's `list`, then recomputes views locally as
//! the user changes inputs, re-snapshotting after any mutation.
//!
//! - FilterSelections: per-facet selections plus the free-text query
//! - SelectionSet: checked rows destined for a batch delete
//! - evaluate: the compound predicate, AND across facets with an OR'd
//!   case-insensitive text clause
//! - facet_universe / FacetUniverses: distinct dropdown options,
//!   first-appearance order, never narrowed by active filters

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod engine;
pub mod selections;

// Re-export commonly used types
pub use engine::{evaluate, facet_universe, FacetUniverses};
pub use selections::{FilterSelections, SelectionSet};
