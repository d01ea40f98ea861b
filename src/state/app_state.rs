//! Application state definitions

use super::field::Field;
use super::inspector::PropertyForm;
use super::session::FormSession;
use chrono::{DateTime, Local};

/// Main content tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Edit,
    Preview,
}

impl Tab {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Edit => Self::Preview,
            Self::Preview => Self::Edit,
        };
    }
}

/// Which panel owns keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Canvas,
    Palette,
    Inspector,
}

/// One selectable position on the canvas
///
/// The canvas cursor walks a flattened list of top-level fields and the
/// column slots inside rows (empty slots included, as add/drop targets).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasEntry {
    TopLevel(usize),
    Slot { row: usize, slot: usize },
}

/// Keyboard move mode: a grabbed top-level field and its drop target
#[derive(Debug, Clone)]
pub struct MoveState {
    /// Id of the grabbed field
    pub field_id: String,
    /// Top-level index the field was grabbed from
    pub origin: usize,
    /// Index into the canvas entry list currently targeted
    pub target_entry: usize,
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    /// The form session: document + selection, action-gated
    pub session: FormSession,

    // Navigation
    pub tab: Tab,
    pub focus: Focus,
    pub palette_index: usize,
    pub canvas_index: usize,

    // Move mode (keyboard drag-and-drop)
    pub move_state: Option<MoveState>,

    // Inspector
    pub inspector_form: Option<PropertyForm>,

    // Slot target for the next palette add (set when Enter is pressed on an
    // empty slot)
    pub pending_slot: Option<(String, usize)>,

    // UI state
    pub preview_scroll: usize,
    pub status_message: Option<String>,
    pub last_saved: Option<DateTime<Local>>,
    pub dirty: bool,
}

impl AppState {
    /// Flattened list of canvas cursor positions for the current document
    pub fn canvas_entries(&self) -> Vec<CanvasEntry> {
        let mut entries = Vec::new();
        for (i, field) in self.session.document().fields.iter().enumerate() {
            entries.push(CanvasEntry::TopLevel(i));
            if let Field::Row(row) = field {
                for slot in 0..row.slots.len() {
                    entries.push(CanvasEntry::Slot { row: i, slot });
                }
            }
        }
        entries
    }

    /// The entry under the canvas cursor
    pub fn current_entry(&self) -> Option<CanvasEntry> {
        self.canvas_entries().get(self.canvas_index).copied()
    }

    /// Id of the field at the given entry, if the entry holds one
    pub fn entry_field_id(&self, entry: CanvasEntry) -> Option<String> {
        let fields = &self.session.document().fields;
        match entry {
            CanvasEntry::TopLevel(i) => fields.get(i).map(|f| f.id().to_string()),
            CanvasEntry::Slot { row, slot } => fields
                .get(row)
                .and_then(|f| f.as_row())
                .and_then(|r| r.slots.get(slot))
                .and_then(|s| s.as_ref())
                .map(|leaf| leaf.id.clone()),
        }
    }

    /// Move the canvas cursor down
    pub fn canvas_down(&mut self) {
        let max = self.canvas_entries().len();
        if max > 0 && self.canvas_index < max - 1 {
            self.canvas_index += 1;
        }
    }

    /// Move the canvas cursor up
    pub fn canvas_up(&mut self) {
        if self.canvas_index > 0 {
            self.canvas_index -= 1;
        }
    }

    /// Clamp the canvas cursor after a structural change
    pub fn clamp_canvas_cursor(&mut self) {
        let max = self.canvas_entries().len();
        if max == 0 {
            self.canvas_index = 0;
        } else if self.canvas_index >= max {
            self.canvas_index = max - 1;
        }
    }

    /// Move the palette cursor down
    pub fn palette_down(&mut self, max: usize) {
        if max > 0 && self.palette_index < max - 1 {
            self.palette_index += 1;
        }
    }

    /// Move the palette cursor up
    pub fn palette_up(&mut self) {
        if self.palette_index > 0 {
            self.palette_index -= 1;
        }
    }

    /// Advance the move-mode target down the entry list
    pub fn move_target_down(&mut self) {
        let max = self.canvas_entries().len();
        if let Some(ref mut mv) = self.move_state {
            if max > 0 && mv.target_entry < max - 1 {
                mv.target_entry += 1;
            }
        }
    }

    /// Advance the move-mode target up the entry list
    pub fn move_target_up(&mut self) {
        if let Some(ref mut mv) = self.move_state {
            if mv.target_entry > 0 {
                mv.target_entry -= 1;
            }
        }
    }

    /// Scroll the preview down
    pub fn preview_scroll_down(&mut self) {
        self.preview_scroll = self.preview_scroll.saturating_add(1);
    }

    /// Scroll the preview up
    pub fn preview_scroll_up(&mut self) {
        self.preview_scroll = self.preview_scroll.saturating_sub(1);
    }
}
