//! Create asset form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{CLEAR_BUTTON, CREATE_BUTTON, NAME_FIELD, PRICE_FIELD};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the create asset form with action sidebar
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    // Split into form (left) and action panel (right)
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(30),    // Form area
            Constraint::Length(18), // Action panel
        ])
        .split(area);

    draw_form(frame, main_chunks[0], app);
    draw_action_panel(frame, main_chunks[1], app);
}

/// Draw the form fields
fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(3), // Price
            Constraint::Length(2), // Help text
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    let form_focused = !form.is_buttons_row_active();
    let block = Block::default()
        .title(" Create Asset ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if form_focused {
            Color::Cyan
        } else {
            Color::DarkGray
        }));
    frame.render_widget(block, area);

    draw_field(
        frame,
        chunks[0],
        &form.name,
        form.active_field_index == NAME_FIELD,
    );
    draw_field(
        frame,
        chunks[1],
        &form.price,
        form.active_field_index == PRICE_FIELD,
    );

    let help = Paragraph::new(Line::from(Span::styled(
        format!("Tab to move between fields, {SUBMIT_SHORTCUT} to create."),
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(help, chunks[2]);
}

/// Draw the action panel sidebar
fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let is_focused = form.is_buttons_row_active();

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if is_focused {
            Color::Cyan
        } else {
            Color::DarkGray
        }));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let button_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Create (primary)
            Constraint::Length(BUTTON_HEIGHT), // Clear
            Constraint::Min(0),
        ])
        .split(inner_area);

    // Create is disabled while a request is on the wire
    let create_label = if form.is_submitting() {
        "Creating…"
    } else {
        "Create"
    };
    render_action_button(
        frame,
        button_chunks[0],
        create_label,
        is_focused && form.selected_button == CREATE_BUTTON,
        !form.is_submitting(),
        Some(Color::Green),
    );

    render_action_button(
        frame,
        button_chunks[1],
        "Clear",
        is_focused && form.selected_button == CLEAR_BUTTON,
        true,
        Some(Color::Gray),
    );
}
