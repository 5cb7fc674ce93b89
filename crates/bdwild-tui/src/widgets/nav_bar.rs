//! Nav bar widget: the strip of top-level pages at the top of the screen.

use crate::router::Route;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Tabs, Widget},
};

/// Renders the 1-line strip of top-level pages.
///
/// The tab owning the current route is highlighted. The current page title
/// is right-aligned in the same row.
pub struct NavBar<'a> {
    current: Route,
    title: &'a str,
    theme: &'a Theme,
}

impl<'a> NavBar<'a> {
    pub fn new(current: Route, title: &'a str, theme: &'a Theme) -> Self {
        Self { current, title, theme }
    }
}

impl Widget for NavBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let labels: Vec<Line> = Route::NAV
            .iter()
            .enumerate()
            .map(|(i, route)| Line::from(format!(" {}:{} ", i + 1, route.label())))
            .collect();

        Tabs::new(labels)
            .select(self.current.nav_index())
            .highlight_style(self.theme.selected.patch(self.theme.title))
            .divider("")
            .render(area, buf);

        let hint = format!(" {}  ?:help ", self.title);
        let width = hint.chars().count() as u16;
        let hint_x = area.right().saturating_sub(width);
        buf.set_string(hint_x, area.y, hint, self.theme.muted);
    }
}
