//! Application state and core logic

use crate::config::TuiConfig;
use crate::platform::COPY_MODIFIER;
use crate::sink::{FormSink, JsonFileSink};
use crate::state::{
    has_editable_rows, AppState, CanvasEntry, FieldType, Focus, FormData, FormSession, MoveState,
    PropertyForm, Tab,
};
use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};

/// Window within which a second Ctrl+C quits
const CTRL_C_WINDOW: Duration = Duration::from_secs(1);

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration
    pub config: TuiConfig,
    /// Save target for the form document
    sink: Box<dyn FormSink>,
    /// Whether the app should quit
    quit: bool,
    /// Timestamp of last Ctrl+C press for double-tap quit
    pub last_ctrl_c: Option<Instant>,
}

impl App {
    /// Create a new App instance
    pub async fn new() -> Result<Self> {
        let config = TuiConfig::load()?;
        let sink: Box<dyn FormSink> = Box::new(JsonFileSink::new(config.form_path()));

        let mut status_message = None;
        let document = match sink.load().await {
            Ok(Some(document)) => document,
            Ok(None) => FormData::default(),
            Err(e) => {
                tracing::error!(error = %e, "failed to load form document");
                status_message = Some(format!("Load failed: {e}"));
                FormData::default()
            }
        };

        let mut state = AppState {
            session: FormSession::new(document, config.slot_policy()),
            ..Default::default()
        };
        state.status_message = status_message;

        Ok(Self {
            state,
            config,
            sink,
            quit: false,
            last_ctrl_c: None,
        })
    }

    #[cfg(test)]
    fn with_sink(sink: Box<dyn FormSink>) -> Self {
        Self {
            state: AppState::default(),
            config: TuiConfig::default(),
            sink,
            quit: false,
            last_ctrl_c: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        self.state.status_message = None;

        // Double-tap Ctrl+C to quit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if self
                .last_ctrl_c
                .is_some_and(|t| t.elapsed() < CTRL_C_WINDOW)
            {
                self.quit = true;
            } else {
                self.last_ctrl_c = Some(Instant::now());
                self.state.status_message = Some("Press Ctrl+C again to quit".to_string());
            }
            return Ok(());
        }
        self.last_ctrl_c = None;

        if self.state.tab == Tab::Preview {
            self.handle_preview_key(key);
            return Ok(());
        }

        if self.state.move_state.is_some() {
            self.handle_move_key(key);
            return Ok(());
        }

        match self.state.focus {
            Focus::Canvas => self.handle_canvas_key(key).await?,
            Focus::Palette => self.handle_palette_key(key),
            Focus::Inspector => self.handle_inspector_key(key),
        }

        Ok(())
    }

    fn handle_preview_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.preview_scroll_down(),
            KeyCode::Char('k') | KeyCode::Up => self.state.preview_scroll_up(),
            KeyCode::Char('p') | KeyCode::Esc => {
                self.state.tab.toggle();
                self.state.preview_scroll = 0;
            }
            _ => {}
        }
    }

    fn handle_move_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.move_target_down(),
            KeyCode::Char('k') | KeyCode::Up => self.state.move_target_up(),
            KeyCode::Enter => self.drop_move(),
            KeyCode::Esc => {
                self.state.move_state = None;
                self.state.status_message = Some("Move cancelled".to_string());
            }
            _ => {}
        }
    }

    /// Resolve the pending move at the targeted entry
    fn drop_move(&mut self) {
        let Some(mv) = self.state.move_state.take() else {
            return;
        };
        let entries = self.state.canvas_entries();
        let Some(target) = entries.get(mv.target_entry).copied() else {
            return;
        };

        match target {
            CanvasEntry::TopLevel(to) => {
                self.state.session.reorder_fields(mv.origin, to);
            }
            CanvasEntry::Slot { row, slot } => {
                let row_id = self.state.session.document().fields[row].id().to_string();
                self.state.session.move_field_to_slot(&mv.field_id, &row_id, slot);
            }
        }

        self.state.dirty = true;
        self.focus_canvas_on(&mv.field_id);
    }

    async fn handle_canvas_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('s')
            && (key.modifiers.contains(KeyModifiers::CONTROL)
                || key.modifiers.contains(COPY_MODIFIER))
        {
            self.save_form().await;
            return Ok(());
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.canvas_down(),
            KeyCode::Char('k') | KeyCode::Up => self.state.canvas_up(),
            KeyCode::Char('a') | KeyCode::Tab => {
                self.state.pending_slot = None;
                self.state.focus = Focus::Palette;
            }
            KeyCode::Char('p') => self.state.tab.toggle(),
            KeyCode::Enter => self.activate_canvas_entry(),
            KeyCode::Char('d') | KeyCode::Delete => self.delete_at_cursor(),
            KeyCode::Char('g') | KeyCode::Char(' ') => self.grab_at_cursor(),
            KeyCode::Char('y') => self.copy_form_json(),
            KeyCode::Esc => {
                self.state.session.clear_selection();
                self.state.inspector_form = None;
            }
            _ => {}
        }
        Ok(())
    }

    /// Enter on the canvas: open the inspector on a field, or start a
    /// palette add targeted at an empty slot
    fn activate_canvas_entry(&mut self) {
        let Some(entry) = self.state.current_entry() else {
            return;
        };

        match self.state.entry_field_id(entry) {
            Some(id) => {
                self.state.session.select_field(Some(id.clone()));
                if let Some(view) = self.state.session.selected_field() {
                    if has_editable_rows(view) {
                        self.state.inspector_form = Some(PropertyForm::for_field(view));
                        self.state.focus = Focus::Inspector;
                    } else {
                        self.state.status_message = Some("No editable properties".to_string());
                    }
                }
            }
            None => {
                // Empty slot: the next palette pick lands here
                if let CanvasEntry::Slot { row, slot } = entry {
                    let row_id = self.state.session.document().fields[row].id().to_string();
                    self.state.pending_slot = Some((row_id, slot));
                    self.state.focus = Focus::Palette;
                }
            }
        }
    }

    fn delete_at_cursor(&mut self) {
        let Some(id) = self
            .state
            .current_entry()
            .and_then(|entry| self.state.entry_field_id(entry))
        else {
            return;
        };

        if self
            .state
            .inspector_form
            .as_ref()
            .is_some_and(|form| form.field_id() == id)
        {
            self.state.inspector_form = None;
        }
        self.state.session.delete_field(&id);
        self.state.dirty = true;
        self.state.clamp_canvas_cursor();
        self.state.status_message = Some("Field deleted".to_string());
    }

    fn grab_at_cursor(&mut self) {
        let Some(CanvasEntry::TopLevel(origin)) = self.state.current_entry() else {
            return;
        };
        let field_id = self.state.session.document().fields[origin].id().to_string();
        self.state.move_state = Some(MoveState {
            field_id,
            origin,
            target_entry: self.state.canvas_index,
        });
    }

    fn copy_form_json(&mut self) {
        let json = match serde_json::to_string_pretty(self.state.session.document()) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize form");
                return;
            }
        };
        match self.copy_to_clipboard(&json) {
            Ok(()) => self.state.status_message = Some("Copied form JSON".to_string()),
            Err(e) => {
                tracing::warn!(error = %e, "clipboard unavailable");
                self.state.status_message = Some("Clipboard unavailable".to_string());
            }
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }

    fn handle_palette_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.palette_down(FieldType::ALL.len()),
            KeyCode::Char('k') | KeyCode::Up => self.state.palette_up(),
            KeyCode::Enter => self.add_from_palette(),
            KeyCode::Esc | KeyCode::Tab => {
                self.state.pending_slot = None;
                self.state.focus = Focus::Canvas;
            }
            _ => {}
        }
    }

    fn add_from_palette(&mut self) {
        let tag = FieldType::ALL[self.state.palette_index];

        let added = match self.state.pending_slot.take() {
            Some((row_id, slot)) => self.state.session.add_field_to_slot(&row_id, slot, tag),
            None => Some(self.state.session.add_field(tag)),
        };

        match added {
            Some(id) => {
                self.state.dirty = true;
                self.focus_canvas_on(&id);
            }
            None => {
                self.state.status_message =
                    Some(format!("Cannot place {} there", tag.as_str()));
                self.state.focus = Focus::Canvas;
            }
        }
    }

    fn handle_inspector_key(&mut self, key: KeyEvent) {
        let Some(form) = self.state.inspector_form.as_mut() else {
            self.state.focus = Focus::Canvas;
            return;
        };

        if key.code == KeyCode::Char('s')
            && (key.modifiers.contains(KeyModifiers::CONTROL)
                || key.modifiers.contains(COPY_MODIFIER))
        {
            self.apply_inspector();
            return;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => form.next_row(),
            KeyCode::BackTab | KeyCode::Up => form.prev_row(),
            KeyCode::Backspace => form.pop_char(),
            KeyCode::Enter => self.apply_inspector(),
            KeyCode::Esc => {
                self.state.inspector_form = None;
                self.state.focus = Focus::Canvas;
            }
            KeyCode::Char(' ') => {
                // Space toggles flags; in a text row it is just a character
                if form.rows().get(form.active_row()).is_some_and(|r| r.is_flag) {
                    form.toggle_flag();
                } else {
                    form.push_char(' ');
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.push_char(c);
            }
            _ => {}
        }
    }

    /// Commit the property form back into the document
    fn apply_inspector(&mut self) {
        let Some(form) = self.state.inspector_form.take() else {
            return;
        };
        self.state.session.update_field(form.commit());
        self.state.dirty = true;
        self.state.focus = Focus::Canvas;
        self.state.status_message = Some("Properties applied".to_string());
    }

    /// Persist the document through the sink
    async fn save_form(&mut self) {
        match self.sink.save(self.state.session.document()).await {
            Ok(()) => {
                self.state.last_saved = Some(Local::now());
                self.state.dirty = false;
                self.state.status_message = Some("Form saved".to_string());
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to save form");
                self.state.status_message = Some(format!("Save failed: {e}"));
            }
        }
    }

    /// Return focus to the canvas with the cursor on the given field
    fn focus_canvas_on(&mut self, id: &str) {
        self.state.focus = Focus::Canvas;
        let position = self
            .state
            .canvas_entries()
            .iter()
            .position(|entry| self.state.entry_field_id(*entry).as_deref() == Some(id));
        match position {
            Some(idx) => self.state.canvas_index = idx,
            None => self.state.clamp_canvas_cursor(),
        }
    }
}
