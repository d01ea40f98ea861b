//! Property inspector panel
//!
//! Shows the property form for the selected field as a stack of labeled
//! boxes, one per editable row. Edits happen on the form's copy; the panel
//! only renders what the form holds.

use crate::app::App;
use crate::state::{Focus, PropRow};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the inspector panel
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.state.focus == Focus::Inspector;
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let Some(form) = &app.state.inspector_form else {
        let placeholder = Paragraph::new("No Field Selected\n\nSelect a field to edit its properties.")
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(" Properties ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color)),
            );
        frame.render_widget(placeholder, area);
        return;
    };

    let outer = Block::default()
        .title(format!(" {} ", form.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    if form.rows().is_empty() {
        let note = Paragraph::new("No editable properties.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(note, inner);
        return;
    }

    let constraints: Vec<Constraint> = form
        .rows()
        .iter()
        .map(|row| {
            if row.is_flag {
                Constraint::Length(1)
            } else if row.is_multiline {
                Constraint::Length(4)
            } else {
                Constraint::Length(3)
            }
        })
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (idx, row) in form.rows().iter().enumerate() {
        let is_active = is_focused && idx == form.active_row();
        if row.is_flag {
            draw_flag_row(frame, chunks[idx], row, is_active);
        } else {
            draw_text_row(frame, chunks[idx], row, is_active);
        }
    }
}

fn draw_text_row(frame: &mut Frame, area: Rect, row: &PropRow, is_active: bool) {
    let border_color = if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let mut spans = Vec::new();
    if row.text.is_empty() {
        spans.push(Span::styled(
            "(empty)",
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::raw(row.text.as_str()));
    }
    if is_active {
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }

    let content = Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(row.label)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        );
    frame.render_widget(content, area);
}

fn draw_flag_row(frame: &mut Frame, area: Rect, row: &PropRow, is_active: bool) {
    let mark = if row.flag { "[x]" } else { "[ ]" };
    let style = if is_active {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let line = Line::from(vec![
        Span::styled(format!(" {mark} "), style),
        Span::styled(row.label, style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
