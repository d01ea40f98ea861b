//! Field type registry
//!
//! Static display metadata and shape classification for every field type.
//! The matches are exhaustive over [`FieldType`], so adding a tag without
//! registry data is a compile error.

use super::field::FieldType;

/// Shape class of a field type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Text-like inputs: text, number, email, textarea
    Input,
    /// Option pickers: select, radio, checkbox
    Choice,
    /// Static content: headings, paragraph, separator
    Static,
    /// Row containers with fixed column slots
    Columns,
}

/// Display metadata for a field type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Name given to freshly created fields
    pub default_name: &'static str,
    /// Shape class deciding which attributes the field carries
    pub kind: FieldKind,
    /// Short glyph shown in the palette and canvas
    pub icon: &'static str,
}

/// Look up the descriptor for a field type
///
/// Total over the tag enumeration; there is no error case.
pub fn describe(tag: FieldType) -> FieldDescriptor {
    match tag {
        FieldType::Text => FieldDescriptor {
            default_name: "Text",
            kind: FieldKind::Input,
            icon: "Aa",
        },
        FieldType::Number => FieldDescriptor {
            default_name: "Number",
            kind: FieldKind::Input,
            icon: "#",
        },
        FieldType::Email => FieldDescriptor {
            default_name: "Email",
            kind: FieldKind::Input,
            icon: "@",
        },
        FieldType::Textarea => FieldDescriptor {
            default_name: "Textarea",
            kind: FieldKind::Input,
            icon: "≡",
        },
        FieldType::Select => FieldDescriptor {
            default_name: "Select",
            kind: FieldKind::Choice,
            icon: "▾",
        },
        FieldType::Radio => FieldDescriptor {
            default_name: "Radio",
            kind: FieldKind::Choice,
            icon: "◉",
        },
        FieldType::Checkbox => FieldDescriptor {
            default_name: "Checkbox",
            kind: FieldKind::Choice,
            icon: "☑",
        },
        FieldType::H1 => FieldDescriptor {
            default_name: "H1",
            kind: FieldKind::Static,
            icon: "H1",
        },
        FieldType::H2 => FieldDescriptor {
            default_name: "H2",
            kind: FieldKind::Static,
            icon: "H2",
        },
        FieldType::H3 => FieldDescriptor {
            default_name: "H3",
            kind: FieldKind::Static,
            icon: "H3",
        },
        FieldType::Paragraph => FieldDescriptor {
            default_name: "Paragraph",
            kind: FieldKind::Static,
            icon: "¶",
        },
        FieldType::Separator => FieldDescriptor {
            default_name: "Separator",
            kind: FieldKind::Static,
            icon: "─",
        },
        FieldType::TwoColumnRow => FieldDescriptor {
            default_name: "Two Columns",
            kind: FieldKind::Columns,
            icon: "▥",
        },
        FieldType::ThreeColumnRow => FieldDescriptor {
            default_name: "Three Columns",
            kind: FieldKind::Columns,
            icon: "▦",
        },
    }
}
