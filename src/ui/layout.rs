//! Layout components (panels, status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::SubmitStatus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create the main layout: form on the left, created-assets panel on the right
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    // Reserve bottom line for status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form
            Constraint::Length(36), // Created assets
        ])
        .split(rows[0]);

    (columns[0], columns[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: area.x,
        y: area.bottom().saturating_sub(1),
        width: area.width,
        height: area.height.min(1),
    };

    let mut spans = vec![status_span(&app.state.form.status)];

    spans.push(Span::styled(
        format!(" Tab: next field | {SUBMIT_SHORTCUT}: create | Esc: quit "),
        Style::default().fg(Color::DarkGray),
    ));

    spans.push(Span::raw("| "));
    spans.push(Span::styled(
        app.state.service_url.as_str(),
        Style::default().fg(Color::Blue),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), status_area);
}

fn status_span(status: &SubmitStatus) -> Span<'static> {
    match status {
        SubmitStatus::Idle => Span::styled(" ● ready ", Style::default().fg(Color::Green)),
        SubmitStatus::Submitting => {
            Span::styled(" ◌ submitting… ", Style::default().fg(Color::Yellow))
        }
        SubmitStatus::Succeeded(summary) => {
            Span::styled(format!(" ✓ {summary} "), Style::default().fg(Color::Green))
        }
        SubmitStatus::Failed(err) => {
            Span::styled(format!(" ✗ {err} "), Style::default().fg(Color::Red))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::SubmitError;
    use crate::service::ServiceError;
    use crate::ui::test_support::{buffer_text, render, test_app};

    #[test]
    fn test_create_layout_splits_columns() {
        let (form, history) = create_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(form.width + history.width, 100);
        assert_eq!(history.width, 36);
        assert_eq!(form.height, 29);
    }

    #[test]
    fn test_status_bar_shows_submitting() {
        let mut app = test_app();
        app.state.form.status = SubmitStatus::Submitting;
        let text = buffer_text(&render(&app, 120, 20));
        assert!(text.contains("submitting"));
    }

    #[test]
    fn test_status_bar_shows_failure() {
        let mut app = test_app();
        app.state.form.status =
            SubmitStatus::Failed(SubmitError::Transport(ServiceError::Timeout));
        let text = buffer_text(&render(&app, 120, 20));
        assert!(text.contains("request timed out"));
    }
}
