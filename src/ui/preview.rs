//! Form preview
//!
//! Renders the document as end users would see the form: headings, inputs
//! with placeholders, choice options, and row columns side by side as
//! indented groups. Read-only; `j`/`k` scroll.

use crate::app::App;
use crate::state::{Field, LeafBody, LeafField};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the preview (Preview tab)
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let fields = &app.state.session.document().fields;

    let lines = if fields.is_empty() {
        vec![
            Line::raw(""),
            Line::styled(
                "  No fields have been added to the form.",
                Style::default().fg(Color::DarkGray),
            ),
        ]
    } else {
        let mut lines = Vec::new();
        for field in fields {
            match field {
                Field::Leaf(leaf) => render_leaf(&mut lines, leaf, 2),
                Field::Row(row) => {
                    for (i, slot) in row.slots.iter().enumerate() {
                        match slot {
                            Some(leaf) => render_leaf(&mut lines, leaf, 4),
                            None => lines.push(Line::styled(
                                format!("    (column {} empty)", i + 1),
                                Style::default().fg(Color::DarkGray),
                            )),
                        }
                    }
                    lines.push(Line::raw(""));
                }
            }
        }
        lines
    };

    let content = Paragraph::new(lines)
        .scroll((app.state.preview_scroll as u16, 0))
        .block(
            Block::default()
                .title(" Preview ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(content, area);
}

fn indent(width: usize) -> String {
    " ".repeat(width)
}

fn render_leaf(lines: &mut Vec<Line<'static>>, leaf: &LeafField, pad: usize) {
    use crate::state::FieldType;

    match leaf.field_type {
        FieldType::H1 => {
            lines.push(Line::styled(
                format!("{}{}", indent(pad), leaf.name),
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .add_modifier(Modifier::UNDERLINED),
            ));
            lines.push(Line::raw(""));
        }
        FieldType::H2 | FieldType::H3 => {
            lines.push(Line::styled(
                format!("{}{}", indent(pad), leaf.name),
                Style::default().add_modifier(Modifier::BOLD),
            ));
            lines.push(Line::raw(""));
        }
        FieldType::Paragraph => {
            lines.push(Line::raw(format!("{}{}", indent(pad), leaf.name)));
            lines.push(Line::raw(""));
        }
        FieldType::Separator => {
            lines.push(Line::styled(
                format!("{}{}", indent(pad), "─".repeat(40)),
                Style::default().fg(Color::DarkGray),
            ));
            lines.push(Line::raw(""));
        }
        _ => match &leaf.body {
            LeafBody::Input(attrs) => {
                lines.push(label_line(&leaf.name, attrs.required, pad));
                let hint = if attrs.placeholder.is_empty() {
                    "___________________".to_string()
                } else {
                    attrs.placeholder.clone()
                };
                lines.push(Line::styled(
                    format!("{}[ {} ]", indent(pad), hint),
                    Style::default().fg(Color::DarkGray),
                ));
                push_description(lines, &attrs.description, pad);
                lines.push(Line::raw(""));
            }
            LeafBody::Choice(attrs) => {
                lines.push(label_line(&leaf.name, attrs.required, pad));
                let glyph = match leaf.field_type {
                    FieldType::Checkbox => "☐",
                    _ => "◉",
                };
                for option in &attrs.options {
                    lines.push(Line::raw(format!("{}{} {}", indent(pad), glyph, option)));
                }
                push_description(lines, &attrs.description, pad);
                lines.push(Line::raw(""));
            }
            LeafBody::Static => {
                lines.push(Line::raw(format!("{}{}", indent(pad), leaf.name)));
                lines.push(Line::raw(""));
            }
        },
    }
}

fn label_line(name: &str, required: bool, pad: usize) -> Line<'static> {
    let mut spans = vec![Span::raw(format!("{}{}", indent(pad), name))];
    if required {
        spans.push(Span::styled(" *", Style::default().fg(Color::Red)));
    }
    Line::from(spans)
}

fn push_description(lines: &mut Vec<Line<'static>>, description: &str, pad: usize) {
    if !description.is_empty() {
        lines.push(Line::styled(
            format!("{}{}", indent(pad), description),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ));
    }
}
