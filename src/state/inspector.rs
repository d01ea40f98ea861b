//! Property form for the inspector panel
//!
//! Builds an editable set of property rows from the selected field's shape,
//! supports character-level editing, and commits back to a whole [`Field`]
//! value for the session's update action. The form works on a copy; nothing
//! touches the document until commit.

use super::field::{Field, FieldType, FieldView, LeafBody};
use super::registry::{describe, FieldKind};

/// Which field attribute a property row edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropKey {
    Name,
    Placeholder,
    Description,
    Required,
    Options,
}

/// A single editable property row
#[derive(Debug, Clone)]
pub struct PropRow {
    pub key: PropKey,
    pub label: &'static str,
    pub text: String,
    pub flag: bool,
    pub is_flag: bool,
    pub is_multiline: bool,
}

impl PropRow {
    fn text_row(key: PropKey, label: &'static str, text: String, is_multiline: bool) -> Self {
        Self {
            key,
            label,
            text,
            flag: false,
            is_flag: false,
            is_multiline,
        }
    }

    fn flag_row(key: PropKey, label: &'static str, flag: bool) -> Self {
        Self {
            key,
            label,
            text: String::new(),
            flag,
            is_flag: true,
            is_multiline: false,
        }
    }
}

/// Editable property rows for one field
#[derive(Debug, Clone)]
pub struct PropertyForm {
    /// The field value being edited, updated on commit
    original: Field,
    rows: Vec<PropRow>,
    active: usize,
}

impl PropertyForm {
    /// Build a form for the given field, with rows matching its shape
    pub fn for_field(view: FieldView<'_>) -> Self {
        let original = view.to_field();
        let rows = match &original {
            Field::Row(row) => vec![PropRow::text_row(
                PropKey::Name,
                "Name",
                row.name.clone(),
                false,
            )],
            Field::Leaf(leaf) => match &leaf.body {
                LeafBody::Input(attrs) => vec![
                    PropRow::text_row(PropKey::Name, "Name", leaf.name.clone(), false),
                    PropRow::text_row(
                        PropKey::Placeholder,
                        "Placeholder",
                        attrs.placeholder.clone(),
                        false,
                    ),
                    PropRow::text_row(
                        PropKey::Description,
                        "Description",
                        attrs.description.clone(),
                        true,
                    ),
                    PropRow::flag_row(PropKey::Required, "Required", attrs.required),
                ],
                LeafBody::Choice(attrs) => vec![
                    PropRow::text_row(PropKey::Name, "Name", leaf.name.clone(), false),
                    PropRow::text_row(
                        PropKey::Options,
                        "Options (comma-separated)",
                        attrs.options.join(", "),
                        false,
                    ),
                    PropRow::text_row(
                        PropKey::Description,
                        "Description",
                        attrs.description.clone(),
                        true,
                    ),
                    PropRow::flag_row(PropKey::Required, "Required", attrs.required),
                ],
                // Separator has nothing to edit; other static fields expose
                // their name as the displayed text
                LeafBody::Static => match leaf.field_type {
                    FieldType::Separator => Vec::new(),
                    _ => vec![PropRow::text_row(
                        PropKey::Name,
                        "Text",
                        leaf.name.clone(),
                        false,
                    )],
                },
            },
        };

        Self {
            original,
            rows,
            active: 0,
        }
    }

    /// Id of the field being edited
    pub fn field_id(&self) -> &str {
        self.original.id()
    }

    /// Type of the field being edited
    pub fn field_type(&self) -> FieldType {
        self.original.field_type()
    }

    /// Human-readable title for the panel
    pub fn title(&self) -> String {
        format!("Edit {}", describe(self.field_type()).default_name)
    }

    pub fn rows(&self) -> &[PropRow] {
        &self.rows
    }

    pub fn active_row(&self) -> usize {
        self.active
    }

    /// Move to the next row, wrapping around
    pub fn next_row(&mut self) {
        if !self.rows.is_empty() {
            self.active = (self.active + 1) % self.rows.len();
        }
    }

    /// Move to the previous row, wrapping around
    pub fn prev_row(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        if self.active == 0 {
            self.active = self.rows.len() - 1;
        } else {
            self.active -= 1;
        }
    }

    /// Append a character to the active text row
    pub fn push_char(&mut self, c: char) {
        if let Some(row) = self.rows.get_mut(self.active) {
            if !row.is_flag {
                row.text.push(c);
            }
        }
    }

    /// Remove the last character from the active text row
    pub fn pop_char(&mut self) {
        if let Some(row) = self.rows.get_mut(self.active) {
            if !row.is_flag {
                row.text.pop();
            }
        }
    }

    /// Toggle the active flag row
    pub fn toggle_flag(&mut self) {
        if let Some(row) = self.rows.get_mut(self.active) {
            if row.is_flag {
                row.flag = !row.flag;
            }
        }
    }

    /// Build the edited field value from the current rows
    pub fn commit(&self) -> Field {
        let mut field = self.original.clone();
        for row in &self.rows {
            match (&mut field, row.key) {
                (Field::Row(f), PropKey::Name) => f.name = row.text.clone(),
                (Field::Leaf(f), PropKey::Name) => f.name = row.text.clone(),
                (Field::Leaf(f), PropKey::Placeholder) => match &mut f.body {
                    LeafBody::Input(attrs) => attrs.placeholder = row.text.clone(),
                    LeafBody::Choice(attrs) => attrs.placeholder = row.text.clone(),
                    LeafBody::Static => {}
                },
                (Field::Leaf(f), PropKey::Description) => match &mut f.body {
                    LeafBody::Input(attrs) => attrs.description = row.text.clone(),
                    LeafBody::Choice(attrs) => attrs.description = row.text.clone(),
                    LeafBody::Static => {}
                },
                (Field::Leaf(f), PropKey::Required) => match &mut f.body {
                    LeafBody::Input(attrs) => attrs.required = row.flag,
                    LeafBody::Choice(attrs) => attrs.required = row.flag,
                    LeafBody::Static => {}
                },
                (Field::Leaf(f), PropKey::Options) => {
                    if let LeafBody::Choice(attrs) = &mut f.body {
                        attrs.options = row
                            .text
                            .split(',')
                            .map(|s| s.trim().to_string())
                            .collect();
                    }
                }
                _ => {}
            }
        }
        field
    }
}

/// Whether a field kind exposes any editable rows
pub fn has_editable_rows(view: FieldView<'_>) -> bool {
    match describe(view.field_type()).kind {
        FieldKind::Static => view.field_type() != FieldType::Separator,
        _ => true,
    }
}
