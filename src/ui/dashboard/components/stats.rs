//! Stats cards
//!
//! Headline numbers from the dataset summary

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_stats(f: &mut Frame, area: Rect, state: &DashboardState) {
    let stats = state.dashboard.stats();
    let cards = [
        ("Active Listings", stats.active_listings.to_string(), Color::Cyan),
        ("Sold This Month", stats.sold_this_month.to_string(), Color::LightGreen),
        (
            "Monthly Revenue",
            format!("${:.2}", stats.monthly_revenue),
            Color::LightYellow,
        ),
        ("Total Views", stats.total_views.to_string(), Color::LightMagenta),
    ];

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for ((label, value, color), chunk) in cards.into_iter().zip(chunks.iter()) {
        let card = Paragraph::new(vec![Line::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(label)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        );
        f.render_widget(card, *chunk);
    }
}
