//! Layout components (panel split, status bar)

use crate::app::App;
use crate::platform::SAVE_SHORTCUT;
use crate::state::{Focus, Tab};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create the main layout: canvas/preview on the left, palette and inspector
/// stacked on the right, one status line at the bottom
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Canvas / preview
            Constraint::Length(36), // Side panel
        ])
        .split(vertical[0]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(18), // Palette
            Constraint::Min(0),     // Inspector
        ])
        .split(horizontal[1]);

    (horizontal[0], side[0], side[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Dirty marker
    let dirty = if app.state.dirty {
        Span::styled(" ● ", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Green))
    };
    spans.push(dirty);

    // Key hints for the focused panel
    let hints = get_focus_hints(app);
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    // Transient status message
    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(Color::Green)));
    }

    // Last save time
    if let Some(saved) = &app.state.last_saved {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("saved {}", saved.format("%H:%M:%S")),
            Style::default().fg(Color::Blue),
        ));
    }

    let quit_hint = " ^C^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Render quit hint on the right
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the focused panel
fn get_focus_hints(app: &App) -> String {
    if app.state.tab == Tab::Preview {
        return "j/k:scroll  p/Esc:edit".to_string();
    }
    if app.state.move_state.is_some() {
        return "j/k:position  Enter:drop  Esc:cancel".to_string();
    }
    match app.state.focus {
        Focus::Canvas => format!(
            "j/k:nav  Enter:edit  g:grab  d:del  a:add  p:preview  y:copy  {SAVE_SHORTCUT}:save"
        ),
        Focus::Palette => "j/k:nav  Enter:add  Esc:back".to_string(),
        Focus::Inspector => format!("Tab:next  Space:toggle  {SAVE_SHORTCUT}:apply  Esc:close"),
    }
}
