//! Notification toasts
//!
//! Stacked in the top-right corner, sliding in from and out to the right.

use super::super::state::DashboardState;
use super::super::utils::{severity_color, toast_area};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

pub fn render_notifications(f: &mut Frame, area: Rect, state: &DashboardState) {
    let now = state.now;
    for (index, notification) in state.dashboard.services().notifications.iter().enumerate() {
        let offset = notification.slide_offset(now);
        let Some(rect) = toast_area(area, index, offset) else {
            continue;
        };

        let color = severity_color(notification.severity);
        let toast = Paragraph::new(Line::from(vec![
            Span::styled(
                format!("{} ", notification.severity.icon()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(notification.message.as_str()),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        );
        f.render_widget(Clear, rect);
        f.render_widget(toast, rect);
    }
}
