//! Ratatui widgets for the bdwild TUI.

pub mod about;
pub mod blog;
pub mod command_bar;
pub mod cursor;
pub mod detail;
pub mod filter_popup;
pub mod help;
pub mod home;
pub mod nav_bar;
pub mod query_bar;
pub mod species_list;

use crate::theme::Theme;
use bdwild_core::ConservationStatus;
use ratatui::{layout::Rect, text::Span};

/// Conservation badge: the two-letter code when `short`, else the full label.
pub fn status_badge(status: ConservationStatus, short: bool, theme: &Theme) -> Span<'static> {
    let label = if short { status.code() } else { status.as_str() };
    Span::styled(format!(" {label} "), theme.status_style(status))
}

/// A `width` x `height` rect centred in `area`, clipped to it.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
