//! Row selection for bulk actions.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::entity::{EntityId, Identified};

/// Visual state of the select-all checkbox in the table header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckboxState {
    Checked,
    Indeterminate,
    Unchecked,
}

/// Set of checked row ids.
///
/// Selection order does not matter; batch payloads are built in display
/// order with [`Selection::ordered_ids`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    ids: BTreeSet<EntityId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &EntityId) -> bool {
        self.ids.contains(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntityId> {
        self.ids.iter()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Select every row of `collection`, or none if all are already selected.
    ///
    /// Never additive: the result is always exactly the collection or empty.
    pub fn toggle_all<T: Identified>(&mut self, collection: &[T]) {
        if self.is_all_selected(collection) {
            self.ids.clear();
        } else {
            self.ids = collection.iter().map(|item| item.id().clone()).collect();
        }
    }

    /// Flip a single row. Returns whether the row is selected afterwards.
    pub fn toggle_one(&mut self, id: &EntityId) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }

    pub fn is_all_selected<T: Identified>(&self, collection: &[T]) -> bool {
        !collection.is_empty()
            && self.ids.len() == collection.len()
            && collection.iter().all(|item| self.ids.contains(item.id()))
    }

    pub fn is_partially_selected<T: Identified>(&self, collection: &[T]) -> bool {
        !self.ids.is_empty() && self.ids.len() < collection.len()
    }

    pub fn header_checkbox<T: Identified>(&self, collection: &[T]) -> CheckboxState {
        if self.is_all_selected(collection) {
            CheckboxState::Checked
        } else if self.is_partially_selected(collection) {
            CheckboxState::Indeterminate
        } else {
            CheckboxState::Unchecked
        }
    }

    /// Selected ids in the order they appear in `collection`.
    pub fn ordered_ids<T: Identified>(&self, collection: &[T]) -> Vec<EntityId> {
        collection
            .iter()
            .map(|item| item.id())
            .filter(|id| self.ids.contains(*id))
            .cloned()
            .collect()
    }

    /// Forget ids that are no longer displayed. Returns how many were dropped.
    pub fn retain_visible<T: Identified>(&mut self, collection: &[T]) -> usize {
        let before = self.ids.len();
        let visible: BTreeSet<&EntityId> = collection.iter().map(|item| item.id()).collect();
        self.ids.retain(|id| visible.contains(id));
        before - self.ids.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<EntityId> {
        raw.iter().map(|id| EntityId::from(*id)).collect()
    }

    #[test]
    fn toggle_all_selects_everything_then_nothing() {
        let collection = ids(&["1", "2", "3"]);
        let mut selection = Selection::new();

        selection.toggle_all(&collection);
        assert!(selection.is_all_selected(&collection));
        assert_eq!(selection.len(), 3);

        selection.toggle_all(&collection);
        assert!(selection.is_empty());
    }

    #[test]
    fn toggle_all_from_partial_selects_all() {
        let collection = ids(&["1", "2", "3"]);
        let mut selection = Selection::new();
        selection.toggle_one(&EntityId::from("2"));

        selection.toggle_all(&collection);
        assert!(selection.is_all_selected(&collection));
    }

    #[test]
    fn toggle_all_replaces_rather_than_adds() {
        let collection = ids(&["1", "2"]);
        let mut selection = Selection::new();
        selection.toggle_one(&EntityId::from("stale"));

        selection.toggle_all(&collection);
        assert_eq!(selection.ordered_ids(&collection), collection);
        assert!(!selection.contains(&EntityId::from("stale")));
    }

    #[test]
    fn toggle_one_reports_new_state() {
        let mut selection = Selection::new();
        let id = EntityId::from("7");
        assert!(selection.toggle_one(&id));
        assert!(selection.contains(&id));
        assert!(!selection.toggle_one(&id));
        assert!(selection.is_empty());
    }

    #[test]
    fn partial_selection_is_indeterminate() {
        let collection = ids(&["1", "2", "3"]);
        let mut selection = Selection::new();
        selection.toggle_one(&EntityId::from("1"));
        selection.toggle_one(&EntityId::from("2"));

        assert!(selection.is_partially_selected(&collection));
        assert!(!selection.is_all_selected(&collection));
        assert_eq!(selection.header_checkbox(&collection), CheckboxState::Indeterminate);
    }

    #[test]
    fn empty_collection_is_never_all_selected() {
        let empty: Vec<EntityId> = Vec::new();
        let mut selection = Selection::new();

        assert!(!selection.is_all_selected(&empty));
        selection.toggle_all(&empty);
        assert!(selection.is_empty());
        assert_eq!(selection.header_checkbox(&empty), CheckboxState::Unchecked);
    }

    #[test]
    fn ordered_ids_follow_display_order() {
        let collection = ids(&["c", "a", "b"]);
        let mut selection = Selection::new();
        selection.toggle_one(&EntityId::from("b"));
        selection.toggle_one(&EntityId::from("c"));

        assert_eq!(selection.ordered_ids(&collection), ids(&["c", "b"]));
    }

    #[test]
    fn retain_visible_drops_hidden_rows() {
        let mut selection = Selection::new();
        for id in ["1", "2", "3"] {
            selection.toggle_one(&EntityId::from(id));
        }

        let dropped = selection.retain_visible(&ids(&["2", "3", "4"]));
        assert_eq!(dropped, 1);
        assert!(!selection.contains(&EntityId::from("1")));
        assert_eq!(selection.len(), 2);
    }
}
