//! Error dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Widest the dialog gets, borders included
const MAX_WIDTH: u16 = 60;

/// Render an error dialog overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, error_message: &str) {
    let area = frame.area();
    let width = MAX_WIDTH.min(area.width);
    let inner_width = width.saturating_sub(4).max(1) as usize;

    // Rough line count for the wrapped message: title, blank, message, blank, hint
    let message_lines = error_message
        .split('\n')
        .map(|line| line.chars().count().div_ceil(inner_width).max(1))
        .sum::<usize>();
    let height = message_lines
        .saturating_add(6)
        .min(usize::from(area.height)) as u16;

    let dialog_area = centered_rect(width, height, area);

    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut content = vec![
        Line::from(Span::styled(
            "Error",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.extend(error_message.split('\n').map(|line| Line::from(line.to_string())));
    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to dismiss"),
    ]));

    let dialog = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(Clear, dialog_area);
    frame.render_widget(dialog, dialog_area);
}

/// A `width` x `height` rectangle centered in `area`, clipped to it
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::{buffer_text, render, test_app};

    #[test]
    fn test_centered_rect_centers() {
        let rect = centered_rect(20, 10, Rect::new(0, 0, 100, 30));
        assert_eq!(rect, Rect::new(40, 10, 20, 10));
    }

    #[test]
    fn test_centered_rect_clips_to_area() {
        let area = Rect::new(5, 5, 10, 4);
        let rect = centered_rect(60, 20, area);
        assert_eq!(rect, area);
    }

    #[test]
    fn test_very_long_message_fits_screen() {
        // More lines than a u16 can count
        let mut app = test_app();
        app.push_error("line\n".repeat(70_000));

        let text = buffer_text(&render(&app, 80, 24));
        let first_row = text.lines().next().unwrap_or_default();
        // Full height, centered horizontally at the maximum width
        assert_eq!(first_row.chars().nth(10), Some('┌'));
        assert_eq!(first_row.chars().nth(69), Some('┐'));
        assert!(text.lines().nth(1).unwrap_or_default().contains("Error"));
    }
}
