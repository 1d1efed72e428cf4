//! Dashboard main renderer

use super::components::{
    chart, footer, header, listings, logs, modal, notifications, orders, sidebar, stats,
};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Percentage(35),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);
    stats::render_stats(f, main_chunks[1], state);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(main_chunks[2]);

    chart::render_chart(f, content_chunks[0], state);
    sidebar::render_sidebar(f, content_chunks[1], state);

    let record_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(35),
            Constraint::Percentage(30),
        ])
        .split(main_chunks[3]);

    orders::render_orders(f, record_chunks[0], state);
    listings::render_listings(f, record_chunks[1], state);
    logs::render_logs_panel(f, record_chunks[2], state);

    let modal_open = state.dashboard.modal().is_open();
    footer::render_footer(f, main_chunks[4], modal_open);

    // Overlays
    modal::render_modal(f, f.area(), state);
    notifications::render_notifications(f, f.area(), state);
}
