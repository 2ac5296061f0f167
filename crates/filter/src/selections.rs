//! Active filter state
//!
//! [`FilterSelections`] carries what the user has picked: one optional
//! value per facet plus the free-text query. [`SelectionSet`] carries
//! which rows are checked for a batch delete. Both are plain client-side
//! state; neither touches the store.

use serde::{Deserialize, Serialize};
use stockroom_core::{Facet, RecordId};

/// Active facet selections plus the free-text query
///
/// An empty selection means "no constraint" for that facet, never "match
/// empty"; an empty query imposes no text constraint. The five fields
/// change independently and clear together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSelections {
    /// Selected product name (exact match)
    pub name: Option<String>,
    /// Selected design (exact match)
    pub design: Option<String>,
    /// Selected size (membership match)
    pub size: Option<String>,
    /// Selected color (membership match)
    pub color: Option<String>,
    /// Free-text query (case-insensitive substring across all facets)
    pub query: String,
}

impl FilterSelections {
    /// No constraints at all
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name selection
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the design selection
    pub fn with_design(mut self, design: impl Into<String>) -> Self {
        self.design = Some(design.into());
        self
    }

    /// Set the size selection
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Set the color selection
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the free-text query
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Change one facet's selection in place
    pub fn set(&mut self, facet: Facet, value: Option<String>) {
        match facet {
            Facet::Name => self.name = value,
            Facet::Design => self.design = value,
            Facet::Sizes => self.size = value,
            Facet::Colors => self.color = value,
        }
    }

    /// The active constraint for one facet
    ///
    /// `None` when nothing is selected or the selection is the empty
    /// string, which the UI uses as its "All" option.
    pub fn selection(&self, facet: Facet) -> Option<&str> {
        let value = match facet {
            Facet::Name => &self.name,
            Facet::Design => &self.design,
            Facet::Sizes => &self.size,
            Facet::Colors => &self.color,
        };
        value.as_deref().filter(|v| !v.is_empty())
    }

    /// The active text query, `None` when empty
    pub fn query(&self) -> Option<&str> {
        if self.query.is_empty() {
            None
        } else {
            Some(&self.query)
        }
    }

    /// Reset every facet and the query to unconstrained
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether no facet and no query is active
    pub fn is_unconstrained(&self) -> bool {
        Facet::ALL.iter().all(|f| self.selection(*f).is_none()) && self.query().is_none()
    }
}

/// Checked-rows model for batch deletes
///
/// Toggling an id in and out mirrors a row checkbox; the accumulated ids
/// feed the store's `delete_by_ids` in the order they were checked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionSet {
    ids: Vec<RecordId>,
}

impl SelectionSet {
    /// Create an empty selection set
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the id if unchecked, uncheck it if checked
    pub fn toggle(&mut self, id: RecordId) {
        match self.ids.iter().position(|existing| *existing == id) {
            Some(index) => {
                self.ids.remove(index);
            }
            None => self.ids.push(id),
        }
    }

    /// Whether the id is currently checked
    pub fn contains(&self, id: &RecordId) -> bool {
        self.ids.contains(id)
    }

    /// The checked ids, in check order
    pub fn ids(&self) -> &[RecordId] {
        &self.ids
    }

    /// Consume the set, yielding the checked ids
    pub fn into_ids(self) -> Vec<RecordId> {
        self.ids
    }

    /// Uncheck everything
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Number of checked ids
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is checked
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_selection_is_no_constraint() {
        let selections = FilterSelections::new().with_name("");
        assert_eq!(selections.selection(Facet::Name), None);
        assert!(selections.is_unconstrained());
    }

    #[test]
    fn test_selection_reads_the_right_field() {
        let selections = FilterSelections::new()
            .with_name("Shirt")
            .with_design("Plain")
            .with_size("M")
            .with_color("Blue");
        assert_eq!(selections.selection(Facet::Name), Some("Shirt"));
        assert_eq!(selections.selection(Facet::Design), Some("Plain"));
        assert_eq!(selections.selection(Facet::Sizes), Some("M"));
        assert_eq!(selections.selection(Facet::Colors), Some("Blue"));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut selections = FilterSelections::new().with_name("Shirt").with_query("lu");
        selections.clear();
        assert!(selections.is_unconstrained());
        assert_eq!(selections.query(), None);
    }

    #[test]
    fn test_set_overwrites_and_unsets() {
        let mut selections = FilterSelections::new();
        selections.set(Facet::Sizes, Some("M".to_string()));
        assert_eq!(selections.selection(Facet::Sizes), Some("M"));
        selections.set(Facet::Sizes, None);
        assert_eq!(selections.selection(Facet::Sizes), None);
    }

    #[test]
    fn test_toggle_checks_and_unchecks() {
        let mut set = SelectionSet::new();
        set.toggle(RecordId::from(1i64));
        set.toggle(RecordId::from(2i64));
        assert!(set.contains(&RecordId::from(1i64)));
        assert_eq!(set.len(), 2);

        set.toggle(RecordId::from(1i64));
        assert!(!set.contains(&RecordId::from(1i64)));
        assert_eq!(set.ids(), &[RecordId::from(2i64)]);
    }

    #[test]
    fn test_toggle_preserves_check_order() {
        let mut set = SelectionSet::new();
        set.toggle(RecordId::from("c"));
        set.toggle(RecordId::from("a"));
        set.toggle(RecordId::from("b"));
        let ids: Vec<_> = set.into_ids();
        assert_eq!(ids, vec![
            RecordId::from("c"),
            RecordId::from("a"),
            RecordId::from("b"),
        ]);
    }

    #[test]
    fn test_clear_empties_the_set() {
        let mut set = SelectionSet::new();
        set.toggle(RecordId::from(5i64));
        set.clear();
        assert!(set.is_empty());
    }
}
