//! Recent orders table

use super::super::state::{DashboardState, Focus};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

fn status_color(label: &str) -> Color {
    match label {
        "Paid" => Color::LightYellow,
        "Shipped" => Color::LightGreen,
        _ => Color::Gray,
    }
}

pub fn render_orders(f: &mut Frame, area: Rect, state: &DashboardState) {
    let focused = state.focus == Focus::Orders;
    let services = state.dashboard.services();

    let lines: Vec<Line> = services
        .surface
        .order_rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let item = services
                .store
                .order(&row.order_id)
                .map(|order| order.item.as_str())
                .unwrap_or_default();
            let line = Line::from(vec![
                Span::raw(format!("{} ", row.order_id)),
                Span::styled(
                    format!("{:<8}", row.status_label),
                    Style::default().fg(status_color(&row.status_label)),
                ),
                Span::styled(format!("[{}] ", row.action), Style::default().fg(Color::Cyan)),
                Span::styled(item.to_string(), Style::default().fg(Color::DarkGray)),
            ]);
            if focused && index == state.selected_order {
                line.style(Style::default().add_modifier(Modifier::REVERSED))
            } else {
                line
            }
        })
        .collect();

    let border = if focused { Color::Cyan } else { Color::DarkGray };
    let panel = Paragraph::new(lines).block(
        Block::default()
            .title("RECENT ORDERS")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .padding(Padding::horizontal(1)),
    );
    f.render_widget(panel, area);
}
