//! Top sellers and quick action tools

use super::super::state::DashboardState;
use crate::managers::QuickAction;
use crate::records::Trend;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};
use strum::IntoEnumIterator;

pub fn render_sidebar(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(7)])
        .split(area);

    render_top_selling(f, chunks[0], state);
    render_quick_actions(f, chunks[1]);
}

fn render_top_selling(f: &mut Frame, area: Rect, state: &DashboardState) {
    let lines: Vec<Line> = state
        .dashboard
        .top_selling()
        .iter()
        .map(|seller| {
            let (arrow, color) = match seller.trend {
                Trend::Up => ("↑", Color::LightGreen),
                Trend::Down => ("↓", Color::LightRed),
            };
            Line::from(vec![
                Span::styled(seller.item.clone(), Style::default().fg(Color::White)),
                Span::styled(
                    format!("  {} sold  ${:.2} ", seller.sold, seller.revenue),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{}{}%", arrow, seller.trend_percentage),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title("TOP SELLING")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::LightYellow))
            .padding(Padding::horizontal(1)),
    );
    f.render_widget(panel, area);
}

fn render_quick_actions(f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = QuickAction::iter()
        .enumerate()
        .map(|(index, action)| {
            Line::from(vec![
                Span::styled(
                    format!("[{}] ", index + 1),
                    Style::default().fg(Color::Magenta),
                ),
                Span::raw(action.label()),
            ])
        })
        .collect();

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title("QUICK ACTIONS")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Magenta))
            .padding(Padding::horizontal(1)),
    );
    f.render_widget(panel, area);
}
