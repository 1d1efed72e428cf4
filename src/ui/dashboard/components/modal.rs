//! Modal dialog
//!
//! Drawn centered over everything else. The display layer reports it as
//! attached after the frame is drawn, which wires any confirm controls.

use super::super::state::DashboardState;
use super::super::utils::modal_area;
use crate::modal::{FormField, ModalContent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};

const FORM_FIELDS: [FormField; 4] = [
    FormField::Title,
    FormField::Price,
    FormField::Condition,
    FormField::Description,
];

fn content_lines(content: &ModalContent, choice_wired: bool) -> Vec<Line<'static>> {
    match content {
        ModalContent::Confirm { message } => {
            let buttons = if choice_wired {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            vec![
                Line::from(message.clone()),
                Line::from(""),
                Line::styled("[Y] Confirm    [N] Cancel", buttons),
            ]
        }
        ModalContent::ListingForm(form) => {
            let mut lines: Vec<Line> = FORM_FIELDS
                .iter()
                .map(|field| {
                    let focused = form.focus == *field;
                    let marker = if focused { "> " } else { "  " };
                    let value_style = if focused {
                        Style::default().fg(Color::Black).bg(Color::LightCyan)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    let value = match field {
                        FormField::Condition => format!("< {} >", form.value(*field)),
                        _ => form.value(*field),
                    };
                    Line::from(vec![
                        Span::raw(marker),
                        Span::styled(
                            format!("{:<12}", field.label()),
                            Style::default().fg(Color::DarkGray),
                        ),
                        Span::styled(value, value_style),
                    ])
                })
                .collect();
            lines.push(Line::from(""));
            lines.push(Line::styled(
                "[Enter] Save Changes",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ));
            lines
        }
        other => other.text_lines().into_iter().map(Line::from).collect(),
    }
}

pub fn render_modal(f: &mut Frame, area: Rect, state: &DashboardState) {
    let Some(open) = state.dashboard.modal().current() else {
        return;
    };
    let rect = modal_area(area);

    let dialog = Paragraph::new(content_lines(&open.content, open.choice_wired()))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {} ", open.title),
                    Style::default().add_modifier(Modifier::BOLD),
                ))
                .title_bottom(Line::from(" [Esc] Close ").right_aligned())
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::LightCyan))
                .padding(Padding::uniform(1)),
        );
    f.render_widget(Clear, rect);
    f.render_widget(dialog, rect);
}
