//! Form document and pure tree operations
//!
//! All operations return a new document and leave the input untouched. The
//! tree is at most two levels deep: top-level fields, and the column slots
//! inside row fields. Anomalies (unknown ids, out-of-bounds indices) never
//! fail; they yield the document unchanged.

use super::field::{Field, FieldView, LeafField};
use serde::{Deserialize, Serialize};

/// A form document: an ordered list of top-level fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub fields: Vec<Field>,
}

impl FormData {
    /// Find a field by id anywhere in the document
    ///
    /// Depth-first: top-level fields in order, descending into each row's
    /// occupied slots in slot order. Ids are unique, so the first match is
    /// the only one.
    pub fn find(&self, id: &str) -> Option<FieldView<'_>> {
        for field in &self.fields {
            match field {
                Field::Leaf(leaf) if leaf.id == id => return Some(FieldView::Leaf(leaf)),
                Field::Leaf(_) => {}
                Field::Row(row) => {
                    if row.id == id {
                        return Some(FieldView::Row(row));
                    }
                    for slot in row.slots.iter().flatten() {
                        if slot.id == id {
                            return Some(FieldView::Leaf(slot));
                        }
                    }
                }
            }
        }
        None
    }

    /// Whether any field in the document has the given id
    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Replace the field whose id matches `updated`, anywhere in the tree
    ///
    /// Fields with no matching id pass through unchanged; rows are rebuilt
    /// with their (possibly updated) slots. A row update can only land at the
    /// top level, since slots never hold rows.
    pub fn replace(&self, updated: &Field) -> FormData {
        let fields = self
            .fields
            .iter()
            .map(|field| {
                if field.id() == updated.id() {
                    return updated.clone();
                }
                match field {
                    Field::Row(row) => {
                        let Field::Leaf(updated_leaf) = updated else {
                            return field.clone();
                        };
                        let mut row = row.clone();
                        for slot in row.slots.iter_mut() {
                            if slot.as_ref().is_some_and(|f| f.id == updated_leaf.id) {
                                *slot = Some(updated_leaf.clone());
                            }
                        }
                        Field::Row(row)
                    }
                    Field::Leaf(_) => field.clone(),
                }
            })
            .collect();
        FormData { fields }
    }

    /// Remove the field with the given id, anywhere in the tree
    ///
    /// Removing a row drops the whole container and its occupants. A match
    /// inside a row clears that slot; the slot itself stays (rows keep their
    /// fixed size).
    pub fn remove(&self, id: &str) -> FormData {
        let fields = self
            .fields
            .iter()
            .filter(|field| field.id() != id)
            .map(|field| match field {
                Field::Row(row) => {
                    let mut row = row.clone();
                    for slot in row.slots.iter_mut() {
                        if slot.as_ref().is_some_and(|f| f.id == id) {
                            *slot = None;
                        }
                    }
                    Field::Row(row)
                }
                Field::Leaf(_) => field.clone(),
            })
            .collect();
        FormData { fields }
    }

    /// Append a field to the end of the top-level sequence
    pub fn insert_top_level(&self, field: Field) -> FormData {
        let mut fields = self.fields.clone();
        fields.push(field);
        FormData { fields }
    }

    /// Place a leaf into a column slot of the row with `parent_id`
    ///
    /// No-op when the parent is missing, is not a row, or the slot index is
    /// out of bounds for its fixed size. An occupied slot is overwritten;
    /// callers enforce any keep-existing policy before calling.
    pub fn insert_into_slot(&self, parent_id: &str, slot_index: usize, leaf: LeafField) -> FormData {
        let valid = self.fields.iter().any(|field| {
            field
                .as_row()
                .is_some_and(|row| row.id == parent_id && slot_index < row.slots.len())
        });
        if !valid {
            return self.clone();
        }

        let fields = self
            .fields
            .iter()
            .map(|field| match field {
                Field::Row(row) if row.id == parent_id => {
                    let mut row = row.clone();
                    row.slots[slot_index] = Some(leaf.clone());
                    Field::Row(row)
                }
                _ => field.clone(),
            })
            .collect();
        FormData { fields }
    }

    /// Move the top-level field at `from` to position `to`
    ///
    /// Intervening fields shift to fill the gap. No-op when either index is
    /// out of bounds.
    pub fn reorder_top_level(&self, from: usize, to: usize) -> FormData {
        if from >= self.fields.len() || to >= self.fields.len() {
            return self.clone();
        }
        let mut fields = self.fields.clone();
        let field = fields.remove(from);
        fields.insert(to, field);
        FormData { fields }
    }

    /// Ids of every field in the document, in find order
    pub fn all_ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        for field in &self.fields {
            ids.push(field.id());
            if let Field::Row(row) = field {
                for slot in row.slots.iter().flatten() {
                    ids.push(slot.id.as_str());
                }
            }
        }
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::factory::new_field;
    use crate::state::field::FieldType;
    use pretty_assertions::assert_eq;

    fn leaf(tag: FieldType) -> LeafField {
        match new_field(tag) {
            Field::Leaf(leaf) => leaf,
            Field::Row(_) => panic!("expected a leaf tag"),
        }
    }

    fn doc_with(fields: Vec<Field>) -> FormData {
        FormData { fields }
    }

    mod find {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_find_after_insert_returns_the_field() {
            let field = new_field(FieldType::Text);
            let id = field.id().to_string();
            let doc = FormData::default().insert_top_level(field.clone());

            let found = doc.find(&id).unwrap();
            assert_eq!(found.to_field(), field);
        }

        #[test]
        fn test_find_descends_into_slots() {
            let email = leaf(FieldType::Email);
            let email_id = email.id.clone();
            let row = new_field(FieldType::TwoColumnRow);
            let row_id = row.id().to_string();

            let doc = FormData::default()
                .insert_top_level(row)
                .insert_into_slot(&row_id, 1, email);

            let found = doc.find(&email_id).unwrap();
            assert_eq!(found.id(), email_id);
            assert_eq!(found.field_type(), FieldType::Email);
        }

        #[test]
        fn test_find_unknown_id_returns_none() {
            let doc = FormData::default().insert_top_level(new_field(FieldType::Text));
            assert!(doc.find("missing").is_none());
        }

        #[test]
        fn test_contains() {
            let field = new_field(FieldType::Radio);
            let id = field.id().to_string();
            let doc = FormData::default().insert_top_level(field);
            assert!(doc.contains(&id));
            assert!(!doc.contains("missing"));
        }
    }

    mod replace {
        use super::*;
        use pretty_assertions::assert_eq;
        use crate::state::field::LeafBody;

        #[test]
        fn test_replace_top_level_field() {
            let field = new_field(FieldType::Text);
            let id = field.id().to_string();
            let doc = FormData::default().insert_top_level(field);

            let mut edited = doc.find(&id).unwrap().to_field();
            if let Field::Leaf(ref mut l) = edited {
                l.name = "Full name".to_string();
            }
            let doc = doc.replace(&edited);

            assert_eq!(doc.find(&id).unwrap().name(), "Full name");
        }

        #[test]
        fn test_replace_inside_slot() {
            let email = leaf(FieldType::Email);
            let email_id = email.id.clone();
            let row = new_field(FieldType::TwoColumnRow);
            let row_id = row.id().to_string();
            let doc = FormData::default()
                .insert_top_level(row)
                .insert_into_slot(&row_id, 0, email.clone());

            let mut edited = email;
            edited.name = "Work email".to_string();
            let doc = doc.replace(&Field::Leaf(edited));

            assert_eq!(doc.find(&email_id).unwrap().name(), "Work email");
        }

        #[test]
        fn test_replace_is_idempotent() {
            let field = new_field(FieldType::Select);
            let id = field.id().to_string();
            let doc = FormData::default()
                .insert_top_level(field)
                .insert_top_level(new_field(FieldType::Paragraph));

            let mut edited = doc.find(&id).unwrap().to_field();
            if let Field::Leaf(ref mut l) = edited {
                if let LeafBody::Choice(ref mut attrs) = l.body {
                    attrs.options = vec!["Yes".to_string(), "No".to_string()];
                }
            }

            let once = doc.replace(&edited);
            let twice = once.replace(&edited);
            assert_eq!(once, twice);
        }

        #[test]
        fn test_replace_unknown_id_leaves_document_unchanged() {
            let doc = FormData::default().insert_top_level(new_field(FieldType::Text));
            let stranger = new_field(FieldType::Number);
            assert_eq!(doc.replace(&stranger), doc);
        }

        #[test]
        fn test_replace_preserves_sibling_order() {
            let a = new_field(FieldType::Text);
            let b = new_field(FieldType::Number);
            let c = new_field(FieldType::Email);
            let b_id = b.id().to_string();
            let doc = doc_with(vec![a.clone(), b.clone(), c.clone()]);

            let mut edited = b;
            if let Field::Leaf(ref mut l) = edited {
                l.name = "Age".to_string();
            }
            let doc = doc.replace(&edited);

            let ids: Vec<_> = doc.fields.iter().map(|f| f.id().to_string()).collect();
            assert_eq!(ids, vec![a.id().to_string(), b_id, c.id().to_string()]);
        }
    }

    mod remove {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_remove_top_level_preserves_others_and_order() {
            let a = new_field(FieldType::Text);
            let b = new_field(FieldType::Number);
            let c = new_field(FieldType::Email);
            let b_id = b.id().to_string();
            let doc = doc_with(vec![a.clone(), b, c.clone()]);

            let doc = doc.remove(&b_id);

            assert!(!doc.contains(&b_id));
            let ids: Vec<_> = doc.fields.iter().map(|f| f.id()).collect();
            assert_eq!(ids, vec![a.id(), c.id()]);
        }

        #[test]
        fn test_remove_clears_matching_slot() {
            let email = leaf(FieldType::Email);
            let email_id = email.id.clone();
            let row = new_field(FieldType::TwoColumnRow);
            let row_id = row.id().to_string();
            let doc = FormData::default()
                .insert_top_level(row)
                .insert_into_slot(&row_id, 0, email);

            let doc = doc.remove(&email_id);

            assert!(!doc.contains(&email_id));
            let row = doc.find(&row_id).unwrap();
            let FieldView::Row(row) = row else {
                panic!("expected a row");
            };
            // Slot count is fixed; the slot is emptied, not removed
            assert_eq!(row.slots, vec![None, None]);
        }

        #[test]
        fn test_remove_row_drops_occupants_too() {
            let email = leaf(FieldType::Email);
            let email_id = email.id.clone();
            let row = new_field(FieldType::TwoColumnRow);
            let row_id = row.id().to_string();
            let doc = FormData::default()
                .insert_top_level(row)
                .insert_into_slot(&row_id, 0, email);

            let doc = doc.remove(&row_id);

            assert!(!doc.contains(&row_id));
            assert!(!doc.contains(&email_id));
            assert!(doc.fields.is_empty());
        }

        #[test]
        fn test_remove_unknown_id_is_noop() {
            let doc = doc_with(vec![new_field(FieldType::Text), new_field(FieldType::H1)]);
            let unchanged = doc.remove("missing");
            assert_eq!(unchanged, doc);
        }
    }

    mod insert_into_slot {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_fills_the_addressed_slot_only() {
            let row = new_field(FieldType::ThreeColumnRow);
            let row_id = row.id().to_string();
            let email = leaf(FieldType::Email);
            let email_id = email.id.clone();

            let doc = FormData::default()
                .insert_top_level(row)
                .insert_into_slot(&row_id, 1, email);

            let FieldView::Row(row) = doc.find(&row_id).unwrap() else {
                panic!("expected a row");
            };
            assert!(row.slots[0].is_none());
            assert_eq!(row.slots[1].as_ref().unwrap().id, email_id);
            assert!(row.slots[2].is_none());
        }

        #[test]
        fn test_out_of_range_index_is_noop() {
            let row = new_field(FieldType::TwoColumnRow);
            let row_id = row.id().to_string();
            let doc = FormData::default().insert_top_level(row);

            let unchanged = doc.insert_into_slot(&row_id, 2, leaf(FieldType::Text));
            assert_eq!(unchanged, doc);
        }

        #[test]
        fn test_unknown_parent_is_noop() {
            let doc = FormData::default().insert_top_level(new_field(FieldType::TwoColumnRow));
            let unchanged = doc.insert_into_slot("missing", 0, leaf(FieldType::Text));
            assert_eq!(unchanged, doc);
        }

        #[test]
        fn test_non_row_parent_is_noop() {
            let text = new_field(FieldType::Text);
            let text_id = text.id().to_string();
            let doc = FormData::default().insert_top_level(text);

            let unchanged = doc.insert_into_slot(&text_id, 0, leaf(FieldType::Email));
            assert_eq!(unchanged, doc);
        }

        #[test]
        fn test_overwrite_drops_previous_occupant() {
            let row = new_field(FieldType::TwoColumnRow);
            let row_id = row.id().to_string();
            let first = leaf(FieldType::Text);
            let first_id = first.id.clone();
            let second = leaf(FieldType::Email);
            let second_id = second.id.clone();

            let doc = FormData::default()
                .insert_top_level(row)
                .insert_into_slot(&row_id, 0, first)
                .insert_into_slot(&row_id, 0, second);

            // The previous occupant is gone from the whole document, not
            // relocated to the top level
            assert!(!doc.contains(&first_id));
            assert!(doc.contains(&second_id));
            assert_eq!(doc.fields.len(), 1);
        }
    }

    mod reorder {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_move_shifts_intervening_fields() {
            let a = new_field(FieldType::Text);
            let b = new_field(FieldType::Number);
            let c = new_field(FieldType::Email);
            let ids = [a.id().to_string(), b.id().to_string(), c.id().to_string()];
            let doc = doc_with(vec![a, b, c]);

            let doc = doc.reorder_top_level(0, 2);

            let order: Vec<_> = doc.fields.iter().map(|f| f.id().to_string()).collect();
            assert_eq!(order, vec![ids[1].clone(), ids[2].clone(), ids[0].clone()]);
        }

        #[test]
        fn test_reorder_there_and_back_restores_order() {
            let doc = doc_with(vec![
                new_field(FieldType::Text),
                new_field(FieldType::H1),
                new_field(FieldType::Select),
                new_field(FieldType::Separator),
            ]);

            let round_trip = doc.reorder_top_level(1, 3).reorder_top_level(3, 1);
            assert_eq!(round_trip, doc);
        }

        #[test]
        fn test_out_of_bounds_is_noop() {
            let doc = doc_with(vec![new_field(FieldType::Text)]);
            assert_eq!(doc.reorder_top_level(0, 5), doc);
            assert_eq!(doc.reorder_top_level(5, 0), doc);
        }

        #[test]
        fn test_same_position_is_identity() {
            let doc = doc_with(vec![new_field(FieldType::Text), new_field(FieldType::H2)]);
            assert_eq!(doc.reorder_top_level(1, 1), doc);
        }
    }

    mod all_ids {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_lists_top_level_and_slot_ids_in_order() {
            let text = new_field(FieldType::Text);
            let row = new_field(FieldType::TwoColumnRow);
            let row_id = row.id().to_string();
            let email = leaf(FieldType::Email);
            let email_id = email.id.clone();

            let doc = FormData::default()
                .insert_top_level(text.clone())
                .insert_top_level(row)
                .insert_into_slot(&row_id, 0, email);

            assert_eq!(
                doc.all_ids(),
                vec![text.id(), row_id.as_str(), email_id.as_str()]
            );
        }
    }
}
