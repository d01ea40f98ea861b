//! Form session state
//!
//! Owns the current document and the selected field id. Every mutation flows
//! through the action methods below, which commit a whole new document
//! atomically; renderers only read. The selected field is re-derived from the
//! document on every read, so a selection left dangling by a structural
//! change simply resolves to "no selection".

use super::document::FormData;
use super::factory::new_field;
use super::field::{Field, FieldType, FieldView};

/// What happens when a field is dropped into an occupied column slot
///
/// Overwriting discards the previous occupant from the whole document, so
/// the choice is explicit rather than baked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotDropPolicy {
    /// Replace the occupant; the previous field is dropped from the document
    #[default]
    Overwrite,
    /// Leave the slot untouched; the drop becomes a no-op
    KeepExisting,
}

/// Mutable-but-action-gated holder of the current document and selection
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    document: FormData,
    selected_id: Option<String>,
    slot_policy: SlotDropPolicy,
}

impl FormSession {
    /// Start a session over an externally supplied document
    pub fn new(document: FormData, slot_policy: SlotDropPolicy) -> Self {
        Self {
            document,
            selected_id: None,
            slot_policy,
        }
    }

    /// The current document, read-only
    pub fn document(&self) -> &FormData {
        &self.document
    }

    /// The raw selected id, if any (may be stale)
    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    /// The currently selected field, re-derived from the document
    pub fn selected_field(&self) -> Option<FieldView<'_>> {
        self.selected_id.as_deref().and_then(|id| self.document.find(id))
    }

    /// Select a field by id, or clear the selection with `None`
    pub fn select_field(&mut self, id: Option<String>) {
        self.selected_id = id;
    }

    /// Clear the selection
    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }

    /// Create a field of the given type and append it to the document
    ///
    /// The new field becomes the selection. Returns its id.
    pub fn add_field(&mut self, tag: FieldType) -> String {
        let field = new_field(tag);
        let id = field.id().to_string();
        tracing::debug!(field_type = tag.as_str(), id = %id, "add field");
        self.document = self.document.insert_top_level(field);
        self.selected_id = Some(id.clone());
        id
    }

    /// Create a field and place it into a column slot
    ///
    /// No-op when the parent is unknown, the slot index is out of bounds,
    /// the tag is itself a row (rows cannot nest), or the slot is occupied
    /// under [`SlotDropPolicy::KeepExisting`]. Returns the new field's id
    /// when a field was placed.
    pub fn add_field_to_slot(
        &mut self,
        parent_id: &str,
        slot_index: usize,
        tag: FieldType,
    ) -> Option<String> {
        if tag.is_row() {
            tracing::warn!(field_type = tag.as_str(), "rows cannot be placed into slots");
            return None;
        }
        if !self.slot_accepts(parent_id, slot_index) {
            return None;
        }

        let Field::Leaf(leaf) = new_field(tag) else {
            return None;
        };
        let id = leaf.id.clone();
        tracing::debug!(parent = parent_id, slot = slot_index, id = %id, "add field to slot");
        self.document = self.document.insert_into_slot(parent_id, slot_index, leaf);
        self.selected_id = Some(id.clone());
        Some(id)
    }

    /// Replace a field with an edited value, wherever it lives
    pub fn update_field(&mut self, field: Field) {
        tracing::debug!(id = field.id(), "update field");
        self.document = self.document.replace(&field);
    }

    /// Delete a field by id, wherever it lives
    pub fn delete_field(&mut self, id: &str) {
        tracing::debug!(id, "delete field");
        self.document = self.document.remove(id);
    }

    /// Move a top-level field to a new position
    pub fn reorder_fields(&mut self, from: usize, to: usize) {
        if from == to {
            return;
        }
        tracing::debug!(from, to, "reorder fields");
        self.document = self.document.reorder_top_level(from, to);
    }

    /// Move a top-level field into a column slot of another row
    ///
    /// The resolved end of a drag gesture: the field leaves the top level and
    /// becomes the slot's occupant. No-op when the moved field is not a
    /// top-level leaf, the target is invalid, or the slot is occupied under
    /// [`SlotDropPolicy::KeepExisting`].
    pub fn move_field_to_slot(&mut self, field_id: &str, parent_id: &str, slot_index: usize) {
        if field_id == parent_id {
            return;
        }
        let Some(leaf) = self
            .document
            .fields
            .iter()
            .find(|f| f.id() == field_id)
            .and_then(|f| f.as_leaf())
            .cloned()
        else {
            tracing::warn!(id = field_id, "move target is not a top-level leaf");
            return;
        };
        if !self.slot_accepts(parent_id, slot_index) {
            return;
        }

        tracing::debug!(id = field_id, parent = parent_id, slot = slot_index, "move field to slot");
        self.document = self
            .document
            .remove(field_id)
            .insert_into_slot(parent_id, slot_index, leaf);
    }

    /// Whether the addressed slot exists and may be written under the policy
    fn slot_accepts(&self, parent_id: &str, slot_index: usize) -> bool {
        let Some(FieldView::Row(row)) = self.document.find(parent_id) else {
            return false;
        };
        let Some(slot) = row.slots.get(slot_index) else {
            return false;
        };
        match self.slot_policy {
            SlotDropPolicy::Overwrite => true,
            SlotDropPolicy::KeepExisting => slot.is_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_field_appends_and_selects() {
        let mut session = FormSession::default();
        let id = session.add_field(FieldType::Text);

        assert_eq!(session.document().fields.len(), 1);
        assert_eq!(session.selected_id(), Some(id.as_str()));
        assert_eq!(session.selected_field().unwrap().id(), id);
    }

    #[test]
    fn test_add_fields_have_unique_ids() {
        let mut session = FormSession::default();
        for tag in FieldType::ALL {
            session.add_field(tag);
        }
        let ids = session.document().all_ids();
        let mut deduped = ids.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn test_text_then_two_column_scenario() {
        let mut session = FormSession::default();
        session.add_field(FieldType::Text);
        let row_id = session.add_field(FieldType::TwoColumnRow);

        assert_eq!(session.document().fields.len(), 2);
        let row = session.document().fields[1].as_row().unwrap();
        assert_eq!(row.slots, vec![None, None]);

        let email_id = session
            .add_field_to_slot(&row_id, 0, FieldType::Email)
            .unwrap();

        let row = session.document().fields[1].as_row().unwrap();
        assert_eq!(row.slots[0].as_ref().unwrap().id, email_id);
        assert!(row.slots[1].is_none());
    }

    #[test]
    fn test_add_row_to_slot_is_rejected() {
        let mut session = FormSession::default();
        let row_id = session.add_field(FieldType::TwoColumnRow);

        let placed = session.add_field_to_slot(&row_id, 0, FieldType::ThreeColumnRow);

        assert!(placed.is_none());
        let row = session.document().fields[0].as_row().unwrap();
        assert_eq!(row.occupied_count(), 0);
    }

    #[test]
    fn test_add_to_out_of_range_slot_is_noop() {
        let mut session = FormSession::default();
        let row_id = session.add_field(FieldType::TwoColumnRow);
        let before = session.document().clone();

        assert!(session.add_field_to_slot(&row_id, 2, FieldType::Text).is_none());
        assert_eq!(session.document(), &before);
    }

    #[test]
    fn test_delete_unknown_id_leaves_document_unchanged() {
        let mut session = FormSession::default();
        session.add_field(FieldType::Text);
        session.add_field(FieldType::H1);
        let before = session.document().clone();

        session.delete_field("missing");
        assert_eq!(session.document(), &before);
    }

    #[test]
    fn test_selection_resolves_to_none_after_deletion() {
        let mut session = FormSession::default();
        let id = session.add_field(FieldType::Text);
        session.select_field(Some(id.clone()));
        assert!(session.selected_field().is_some());

        session.delete_field(&id);

        assert!(session.selected_field().is_none());
    }

    #[test]
    fn test_update_field_rewrites_name() {
        let mut session = FormSession::default();
        let id = session.add_field(FieldType::Text);

        let mut edited = session.selected_field().unwrap().to_field();
        if let Field::Leaf(ref mut leaf) = edited {
            leaf.name = "Full name".to_string();
        }
        session.update_field(edited);

        assert_eq!(session.selected_field().unwrap().name(), "Full name");
        assert_eq!(session.selected_field().unwrap().id(), id);
    }

    #[test]
    fn test_reorder_fields() {
        let mut session = FormSession::default();
        let a = session.add_field(FieldType::Text);
        let b = session.add_field(FieldType::Number);

        session.reorder_fields(0, 1);

        let order: Vec<_> = session.document().fields.iter().map(|f| f.id()).collect();
        assert_eq!(order, vec![b.as_str(), a.as_str()]);
    }

    #[test]
    fn test_move_field_to_slot_removes_from_top_level() {
        let mut session = FormSession::default();
        let text_id = session.add_field(FieldType::Text);
        let row_id = session.add_field(FieldType::TwoColumnRow);

        session.move_field_to_slot(&text_id, &row_id, 1);

        assert_eq!(session.document().fields.len(), 1);
        let row = session.document().fields[0].as_row().unwrap();
        assert_eq!(row.slots[1].as_ref().unwrap().id, text_id);
        // Still findable, now inside the slot
        assert!(session.document().contains(&text_id));
    }

    #[test]
    fn test_move_row_into_slot_is_noop() {
        let mut session = FormSession::default();
        let inner_row = session.add_field(FieldType::TwoColumnRow);
        let outer_row = session.add_field(FieldType::TwoColumnRow);
        let before = session.document().clone();

        session.move_field_to_slot(&inner_row, &outer_row, 0);
        assert_eq!(session.document(), &before);
    }

    #[test]
    fn test_overwrite_policy_discards_previous_occupant() {
        let mut session = FormSession::default();
        let row_id = session.add_field(FieldType::TwoColumnRow);
        let first = session.add_field_to_slot(&row_id, 0, FieldType::Text).unwrap();
        let second = session.add_field_to_slot(&row_id, 0, FieldType::Email).unwrap();

        assert!(!session.document().contains(&first));
        assert!(session.document().contains(&second));
    }

    #[test]
    fn test_keep_existing_policy_rejects_occupied_slot() {
        let mut session = FormSession::new(FormData::default(), SlotDropPolicy::KeepExisting);
        let row_id = session.add_field(FieldType::TwoColumnRow);
        let first = session.add_field_to_slot(&row_id, 0, FieldType::Text).unwrap();

        let second = session.add_field_to_slot(&row_id, 0, FieldType::Email);

        assert!(second.is_none());
        assert!(session.document().contains(&first));
    }

    #[test]
    fn test_keep_existing_policy_keeps_moved_field_at_top_level() {
        let mut session = FormSession::new(FormData::default(), SlotDropPolicy::KeepExisting);
        let row_id = session.add_field(FieldType::TwoColumnRow);
        let occupant = session.add_field_to_slot(&row_id, 0, FieldType::Text).unwrap();
        let mover = session.add_field(FieldType::Email);

        session.move_field_to_slot(&mover, &row_id, 0);

        // Nothing moved, nothing lost
        assert_eq!(session.document().fields.len(), 2);
        let row = session.document().fields[0].as_row().unwrap();
        assert_eq!(row.slots[0].as_ref().unwrap().id, occupant);
    }
}
