//! Form field data model
//!
//! A document is a flat list of [`Field`]s, where a field is either a leaf
//! (input, choice, or static content) or a row container holding a fixed
//! number of column slots. Slots hold leaves only, so nesting is capped at
//! one level by construction.

use serde::{Deserialize, Serialize};

/// Closed set of field type tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
    Email,
    Textarea,
    Select,
    Radio,
    Checkbox,
    H1,
    H2,
    H3,
    Paragraph,
    Separator,
    #[serde(rename = "two-column-row")]
    TwoColumnRow,
    #[serde(rename = "three-column-row")]
    ThreeColumnRow,
}

impl FieldType {
    /// All field types in palette order
    pub const ALL: [FieldType; 14] = [
        FieldType::Text,
        FieldType::Number,
        FieldType::Email,
        FieldType::Textarea,
        FieldType::Select,
        FieldType::Radio,
        FieldType::Checkbox,
        FieldType::H1,
        FieldType::H2,
        FieldType::H3,
        FieldType::Paragraph,
        FieldType::Separator,
        FieldType::TwoColumnRow,
        FieldType::ThreeColumnRow,
    ];

    /// Stable tag string, also used as the id prefix
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Email => "email",
            Self::Textarea => "textarea",
            Self::Select => "select",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::Paragraph => "paragraph",
            Self::Separator => "separator",
            Self::TwoColumnRow => "two-column-row",
            Self::ThreeColumnRow => "three-column-row",
        }
    }

    /// Number of column slots for row types, `None` for everything else
    pub fn slot_count(&self) -> Option<usize> {
        match self {
            Self::TwoColumnRow => Some(2),
            Self::ThreeColumnRow => Some(3),
            _ => None,
        }
    }

    /// Whether this tag is a row container
    pub fn is_row(&self) -> bool {
        self.slot_count().is_some()
    }
}

/// Attributes of text-like input fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputAttrs {
    pub placeholder: String,
    pub description: String,
    pub required: bool,
}

/// Attributes of choice fields (select, radio, checkbox)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceAttrs {
    pub options: Vec<String>,
    pub placeholder: String,
    pub description: String,
    pub required: bool,
}

/// Type-specific payload of a leaf field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeafBody {
    Input(InputAttrs),
    Choice(ChoiceAttrs),
    Static,
}

/// A non-container field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeafField {
    pub id: String,
    pub name: String,
    #[serde(rename = "fieldType")]
    pub field_type: FieldType,
    pub body: LeafBody,
}

impl LeafField {
    /// Input attributes, if this is an input field
    pub fn input(&self) -> Option<&InputAttrs> {
        match &self.body {
            LeafBody::Input(attrs) => Some(attrs),
            _ => None,
        }
    }

    /// Choice attributes, if this is a choice field
    pub fn choice(&self) -> Option<&ChoiceAttrs> {
        match &self.body {
            LeafBody::Choice(attrs) => Some(attrs),
            _ => None,
        }
    }
}

/// A row container with a fixed number of column slots
///
/// The slot vector length is set at creation (2 or 3, matching the tag) and
/// never changes; a slot is either empty or holds exactly one leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowField {
    pub id: String,
    pub name: String,
    #[serde(rename = "fieldType")]
    pub field_type: FieldType,
    pub slots: Vec<Option<LeafField>>,
}

impl RowField {
    /// Number of occupied slots
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

/// A top-level entry in a form document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Leaf(LeafField),
    Row(RowField),
}

impl Field {
    pub fn id(&self) -> &str {
        match self {
            Self::Leaf(f) => &f.id,
            Self::Row(f) => &f.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Leaf(f) => &f.name,
            Self::Row(f) => &f.name,
        }
    }

    pub fn field_type(&self) -> FieldType {
        match self {
            Self::Leaf(f) => f.field_type,
            Self::Row(f) => f.field_type,
        }
    }

    pub fn as_leaf(&self) -> Option<&LeafField> {
        match self {
            Self::Leaf(f) => Some(f),
            Self::Row(_) => None,
        }
    }

    pub fn as_row(&self) -> Option<&RowField> {
        match self {
            Self::Row(f) => Some(f),
            Self::Leaf(_) => None,
        }
    }
}

/// Borrowed view of a field found anywhere in the document
#[derive(Debug, Clone, Copy)]
pub enum FieldView<'a> {
    Leaf(&'a LeafField),
    Row(&'a RowField),
}

impl<'a> FieldView<'a> {
    pub fn id(&self) -> &'a str {
        match self {
            Self::Leaf(f) => &f.id,
            Self::Row(f) => &f.id,
        }
    }

    pub fn name(&self) -> &'a str {
        match self {
            Self::Leaf(f) => &f.name,
            Self::Row(f) => &f.name,
        }
    }

    pub fn field_type(&self) -> FieldType {
        match self {
            Self::Leaf(f) => f.field_type,
            Self::Row(f) => f.field_type,
        }
    }

    /// Rebuild an owned [`Field`] from this view
    pub fn to_field(&self) -> Field {
        match self {
            Self::Leaf(f) => Field::Leaf((*f).clone()),
            Self::Row(f) => Field::Row((*f).clone()),
        }
    }
}
