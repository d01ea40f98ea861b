//! UI rendering

mod canvas;
mod inspector;
mod layout;
mod palette;
mod preview;

use crate::app::App;
use crate::state::Tab;
use ratatui::Frame;

/// Draw the whole UI
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, palette_area, inspector_area) = layout::create_layout(frame.area());

    match app.state.tab {
        Tab::Edit => canvas::draw(frame, main_area, app),
        Tab::Preview => preview::draw(frame, main_area, app),
    }

    palette::draw(frame, palette_area, app);
    inspector::draw(frame, inspector_area, app);
    layout::draw_status_bar(frame, app);
}
