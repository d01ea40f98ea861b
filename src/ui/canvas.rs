//! Form editor canvas
//!
//! Renders the field tree as a flat list of rows: one row per top-level
//! field, plus an indented row per column slot. The cursor, the session
//! selection, and the move-mode target are all marked here.

use crate::app::App;
use crate::state::{describe, CanvasEntry, Field, Focus, LeafField};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Draw the canvas (Edit tab)
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.state.focus == Focus::Canvas;
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let entries = app.state.canvas_entries();
    if entries.is_empty() {
        let content = Paragraph::new(
            "No fields have been added to the form.\nPress 'a' to add a field.",
        )
        .style(Style::default().fg(Color::DarkGray))
        .block(
            Block::default()
                .title(" Form Editor ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        );
        frame.render_widget(content, area);
        return;
    }

    let fields = &app.state.session.document().fields;
    let selected_id = app.state.session.selected_id();
    let move_target = app
        .state
        .move_state
        .as_ref()
        .map(|mv| (mv.field_id.as_str(), mv.target_entry));

    let items: Vec<ListItem> = entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let is_cursor = is_focused && idx == app.state.canvas_index;
            let is_drop_target = move_target.is_some_and(|(_, target)| target == idx);

            let line = match *entry {
                CanvasEntry::TopLevel(i) => {
                    top_level_line(&fields[i], is_cursor, is_drop_target, selected_id, move_target)
                }
                CanvasEntry::Slot { row, slot } => {
                    let occupant = fields[row]
                        .as_row()
                        .and_then(|r| r.slots.get(slot))
                        .and_then(|s| s.as_ref());
                    slot_line(slot, occupant, is_cursor, is_drop_target, selected_id)
                }
            };
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Form Editor ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );

    frame.render_widget(list, area);
}

fn top_level_line<'a>(
    field: &'a Field,
    is_cursor: bool,
    is_drop_target: bool,
    selected_id: Option<&str>,
    move_target: Option<(&str, usize)>,
) -> Line<'a> {
    let is_selected = selected_id == Some(field.id());
    let is_grabbed = move_target.is_some_and(|(id, _)| id == field.id());
    let descriptor = describe(field.field_type());

    let cursor = if is_cursor { "▸" } else { " " };
    let drop_marker = if is_drop_target { "▼ " } else { "" };

    let row_style = if is_cursor {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default()
    };
    let name_style = if is_grabbed {
        row_style.fg(Color::Yellow).add_modifier(Modifier::ITALIC)
    } else if is_selected {
        row_style.fg(Color::Cyan)
    } else {
        row_style
    };

    let mut spans = vec![
        Span::styled(cursor, row_style),
        Span::styled("⠿ ", Style::default().fg(Color::DarkGray)),
        Span::styled(drop_marker, Style::default().fg(Color::Yellow)),
        Span::styled(
            format!("{:<2} ", descriptor.icon),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(field.name(), name_style),
        Span::styled(
            format!("  {}", field.field_type().as_str()),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    if let Field::Row(row) = field {
        spans.push(Span::styled(
            format!("  {}/{} columns filled", row.occupied_count(), row.slots.len()),
            Style::default().fg(Color::DarkGray),
        ));
    }

    Line::from(spans)
}

fn slot_line<'a>(
    slot: usize,
    occupant: Option<&'a LeafField>,
    is_cursor: bool,
    is_drop_target: bool,
    selected_id: Option<&str>,
) -> Line<'a> {
    let cursor = if is_cursor { "▸" } else { " " };
    let drop_marker = if is_drop_target { "▼ " } else { "" };

    let row_style = if is_cursor {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default()
    };

    let mut spans = vec![
        Span::styled(cursor, row_style),
        Span::styled(
            format!("   └ column {}: ", slot + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(drop_marker, Style::default().fg(Color::Yellow)),
    ];

    match occupant {
        Some(leaf) => {
            let is_selected = selected_id == Some(leaf.id.as_str());
            let name_style = if is_selected {
                row_style.fg(Color::Cyan)
            } else {
                row_style
            };
            let descriptor = describe(leaf.field_type);
            spans.push(Span::styled(
                format!("{:<2} ", descriptor.icon),
                Style::default().fg(Color::Cyan),
            ));
            spans.push(Span::styled(leaf.name.as_str(), name_style));
            spans.push(Span::styled(
                format!("  {}", leaf.field_type.as_str()),
                Style::default().fg(Color::DarkGray),
            ));
        }
        None => {
            spans.push(Span::styled(
                "(empty, Enter to add)",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            ));
        }
    }

    Line::from(spans)
}
