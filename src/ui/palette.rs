//! Field type palette

use crate::app::App;
use crate::state::{describe, FieldType, Focus};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Draw the palette of field types
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.state.focus == Focus::Palette;
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let title = match &app.state.pending_slot {
        Some((_, slot)) => format!(" Add to Column {} ", slot + 1),
        None => " Add Field ".to_string(),
    };

    let items: Vec<ListItem> = FieldType::ALL
        .iter()
        .enumerate()
        .map(|(idx, tag)| {
            let descriptor = describe(*tag);
            let is_selected = is_focused && idx == app.state.palette_index;

            let prefix = if is_selected { "▸ " } else { "  " };
            let style = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            let line = Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(
                    format!("{:<2} ", descriptor.icon),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(descriptor.default_name, style),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );

    frame.render_widget(list, area);
}
