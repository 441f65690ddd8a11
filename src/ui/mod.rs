//! UI module for rendering the TUI

mod components;
mod forms;
mod history;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (form_area, history_area) = layout::create_layout(area);

    forms::draw_create_asset(frame, form_area, app);
    history::draw(frame, history_area, app);

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Error dialog overlays everything
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message);
    }
}
