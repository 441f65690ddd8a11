//! Panel listing assets created this session

use crate::app::App;
use crate::state::CreatedAsset;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Draw the created-assets panel
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let created = &app.state.created;
    let block = Block::default()
        .title(format!(" Created ({}) ", created.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if created.is_empty() {
        let empty = Paragraph::new("No assets created yet.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = created.iter().map(asset_item).collect();
    frame.render_widget(List::new(items).block(block), area);
}

fn asset_item(asset: &CreatedAsset) -> ListItem<'static> {
    let id = asset.id.clone().unwrap_or_else(|| "-".to_string());
    ListItem::new(vec![
        Line::from(vec![
            Span::styled(
                asset.created_at.format("%H:%M:%S ").to_string(),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw(asset.name.clone()),
        ]),
        Line::from(vec![
            Span::styled(format!("  {}", asset.price), Style::default().fg(Color::Green)),
            Span::styled(format!("  #{id}"), Style::default().fg(Color::Blue)),
        ]),
    ])
}
