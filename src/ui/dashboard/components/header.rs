//! Dashboard header component
//!
//! Renders the title and session summary line

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render header with title and session summary.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(1)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!("RETRO MARKET SELLER DASHBOARD v{}", version))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let uptime = state.now.saturating_duration_since(state.start_time).as_secs();
    let services = state.dashboard.services();
    let summary = Line::from(vec![
        Span::styled("Dataset: ", Style::default().fg(Color::DarkGray)),
        Span::raw(state.dataset.as_str()),
        Span::styled("  Orders: ", Style::default().fg(Color::DarkGray)),
        Span::raw(services.store.orders().len().to_string()),
        Span::styled("  Listings: ", Style::default().fg(Color::DarkGray)),
        Span::raw(services.store.listings().len().to_string()),
        Span::styled("  Uptime: ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}m {:02}s", uptime / 60, uptime % 60)),
    ]);
    f.render_widget(
        Paragraph::new(summary).alignment(Alignment::Center),
        header_chunks[1],
    );
}
