//! Dashboard footer component
//!
//! Renders the key bindings

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render footer with the key bindings for the current context.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, modal_open: bool) {
    let footer_text = if modal_open {
        "[Y/Enter] Confirm | [N] Cancel | [Tab] Next field | [Enter] Save | [Esc] Close"
    } else {
        "[Q] Quit | [Tab] Switch table | [Enter] Row action | [E/S/D/X] Edit/Stats/Duplicate/Delete | [W/M/Y] Period | [1-5] Tools | [c/C] Dismiss | [?] Help"
    };

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
