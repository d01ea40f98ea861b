//! Field factory
//!
//! Creates new fields with fresh ids and per-shape defaults when a palette
//! action fires.

use super::field::{
    ChoiceAttrs, Field, FieldType, InputAttrs, LeafBody, LeafField, RowField,
};
use super::registry::{describe, FieldKind};
use uuid::Uuid;

/// Generate a fresh field id for the given tag
///
/// Ids embed a v4 UUID so that arbitrarily rapid successive calls never
/// collide within a session.
fn new_field_id(tag: FieldType) -> String {
    format!("{}_{}", tag.as_str(), Uuid::new_v4().simple())
}

/// Create a new field of the given type with default attributes
pub fn new_field(tag: FieldType) -> Field {
    let descriptor = describe(tag);
    let id = new_field_id(tag);
    let name = descriptor.default_name.to_string();

    match descriptor.kind {
        FieldKind::Input => Field::Leaf(LeafField {
            id,
            name,
            field_type: tag,
            body: LeafBody::Input(InputAttrs {
                placeholder: String::new(),
                description: String::new(),
                required: false,
            }),
        }),
        FieldKind::Choice => Field::Leaf(LeafField {
            id,
            name,
            field_type: tag,
            body: LeafBody::Choice(ChoiceAttrs {
                options: vec![
                    "Option 1".to_string(),
                    "Option 2".to_string(),
                    "Option 3".to_string(),
                ],
                placeholder: String::new(),
                description: String::new(),
                required: false,
            }),
        }),
        FieldKind::Static => Field::Leaf(LeafField {
            id,
            name,
            field_type: tag,
            body: LeafBody::Static,
        }),
        FieldKind::Columns => {
            // slot_count is Some for every Columns-kind tag
            let count = tag.slot_count().unwrap_or(2);
            Field::Row(RowField {
                id,
                name,
                field_type: tag,
                slots: vec![None; count],
            })
        }
    }
}
