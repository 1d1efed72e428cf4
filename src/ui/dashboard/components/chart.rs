//! Sales chart panel
//!
//! Period selector tabs above a 12-slot bar chart. Bars grow towards their
//! final height while the entrance animation runs.

use super::super::state::DashboardState;
use crate::consts::cli_consts::chart::{BAR_SLOTS, MAX_BAR_HEIGHT_PX};
use crate::records::Period;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Tabs};
use strum::IntoEnumIterator;

pub fn render_chart(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chart = state.dashboard.chart();
    let block = Block::default()
        .title("SALES")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Fill(1)])
        .split(inner);

    let periods: Vec<Period> = Period::iter().collect();
    let selected = periods
        .iter()
        .position(|p| *p == chart.active())
        .unwrap_or_default();
    let tabs = Tabs::new(periods.iter().map(|p| format!("[{}] {}", &p.label()[..1], p.label())))
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(tabs, chunks[0]);

    let progress = chart.animation_progress(state.now);
    let bars: Vec<Bar> = chart
        .slots()
        .iter()
        .enumerate()
        .map(|(index, slot)| match slot {
            Some(bar) => Bar::default()
                .value((bar.height_px * progress).round() as u64)
                .text_value(bar.tooltip.clone())
                .label(Line::from((index + 1).to_string()))
                .style(Style::default().fg(Color::LightCyan)),
            None => Bar::default().value(0).text_value(String::new()),
        })
        .collect();

    let slots = BAR_SLOTS as u16;
    let bar_width = (chunks[1].width.saturating_sub(slots - 1) / slots).max(1);
    let bar_chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .max(MAX_BAR_HEIGHT_PX as u64)
        .value_style(Style::default().fg(Color::Black).bg(Color::LightCyan));
    f.render_widget(bar_chart, chunks[1]);
}
