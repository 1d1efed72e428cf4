//! Active listings table

use super::super::state::{DashboardState, Focus};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

pub fn render_listings(f: &mut Frame, area: Rect, state: &DashboardState) {
    let focused = state.focus == Focus::Listings;
    let services = state.dashboard.services();

    let lines: Vec<Line> = services
        .surface
        .listing_rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let details = services
                .store
                .listing(&row.listing_id)
                .map(|l| {
                    format!(
                        " ${:.2} {} {} views {} watching",
                        l.price,
                        l.condition.label(),
                        l.views,
                        l.watchers
                    )
                })
                .unwrap_or_default();
            let line = Line::from(vec![
                Span::raw(format!("{} ", row.listing_id)),
                Span::styled(row.title.clone(), Style::default().fg(Color::White)),
                Span::styled(details, Style::default().fg(Color::DarkGray)),
            ]);
            if focused && index == state.selected_listing {
                line.style(Style::default().add_modifier(Modifier::REVERSED))
            } else {
                line
            }
        })
        .collect();

    let border = if focused { Color::Yellow } else { Color::DarkGray };
    let panel = Paragraph::new(lines).block(
        Block::default()
            .title("ACTIVE LISTINGS")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .padding(Padding::horizontal(1)),
    );
    f.render_widget(panel, area);
}
