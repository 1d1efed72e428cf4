//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Source;
use crate::notifications::Severity;
use ratatui::layout::Rect;
use ratatui::prelude::Color;

const MODAL_WIDTH_PCT: u16 = 60;
const MODAL_HEIGHT_PCT: u16 = 60;

pub const TOAST_WIDTH: u16 = 44;
pub const TOAST_HEIGHT: u16 = 3;

/// Get a ratatui color for an activity event based on where it came from
pub fn get_source_color(source: &Source) -> Color {
    match source {
        Source::Orders => Color::Cyan,
        Source::Listings => Color::Yellow,
        Source::Chart => Color::LightBlue,
        Source::Modal => Color::Gray,
        Source::QuickActions => Color::Magenta,
        Source::Drafts => Color::LightGreen,
    }
}

pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Success => Color::LightGreen,
        Severity::Error => Color::LightRed,
        Severity::Warning => Color::LightYellow,
        Severity::Info => Color::LightCyan,
    }
}

/// Format compact timestamp ("MM-DD HH:MM") from a "YYYY-MM-DD HH:MM:SS" timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    let compact = timestamp.split_once(' ').and_then(|(date, time)| {
        let month_day = date.get(5..10)?;
        let hour_min = time.get(0..5)?;
        Some(format!("{} {}", month_day, hour_min))
    });
    compact.unwrap_or_else(|| timestamp.to_string())
}

/// The centered rectangle the modal dialog occupies inside `area`.
pub fn modal_area(area: Rect) -> Rect {
    let width = area.width * MODAL_WIDTH_PCT / 100;
    let height = area.height * MODAL_HEIGHT_PCT / 100;
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Rectangle of the `index`-th notification in the top-right stack.
///
/// `offset` in `0.0..=1.0` slides the box off the right edge, where 1.0 is
/// fully hidden. Returns `None` when the box would fall outside `area`.
pub fn toast_area(area: Rect, index: usize, offset: f64) -> Option<Rect> {
    let width = TOAST_WIDTH.min(area.width);
    let y = area.y + 1 + (index as u16).saturating_mul(TOAST_HEIGHT);
    if y + TOAST_HEIGHT > area.bottom() {
        return None;
    }
    let shift = (f64::from(width) * offset.clamp(0.0, 1.0)).round() as u16;
    let x = area.right().saturating_sub(width + 1) + shift;
    let visible = width.saturating_sub(shift);
    if visible == 0 {
        return None;
    }
    Some(Rect::new(x, y, visible, TOAST_HEIGHT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(
            format_compact_timestamp("2025-02-15 09:41:07"),
            "02-15 09:41"
        );
        assert_eq!(format_compact_timestamp("garbled"), "garbled");
    }

    #[test]
    fn test_modal_area_is_centered() {
        let modal = modal_area(Rect::new(0, 0, 100, 50));
        assert_eq!(modal, Rect::new(20, 10, 60, 30));
    }

    #[test]
    // Toasts stack downwards and slide out to the right.
    fn test_toast_area_stacks_and_slides() {
        let area = Rect::new(0, 0, 100, 12);
        let first = toast_area(area, 0, 0.0).unwrap();
        let second = toast_area(area, 1, 0.0).unwrap();
        assert_eq!(second.y, first.y + TOAST_HEIGHT);
        assert_eq!(first.right(), 99);

        let sliding = toast_area(area, 0, 0.5).unwrap();
        assert!(sliding.x > first.x);
        assert!(toast_area(area, 0, 1.0).is_none());
        assert!(toast_area(area, 5, 0.0).is_none());
    }
}
