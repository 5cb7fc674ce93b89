//! Species list widget: the scrollable result pane of category and search
//! pages.
//!
//! Each row shows the category glyph, the common name (with the search term
//! highlighted), the local name and a conservation badge. An empty result
//! renders the "No Animals Found" notice instead of rows.

use crate::icons::category_icon;
use crate::text::highlight;
use crate::theme::Theme;
use crate::widgets::{cursor::CursorState, status_badge};
use bdwild_core::Species;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{
        Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};

pub struct SpeciesList<'a> {
    rows: &'a [&'a Species],
    cursor: &'a CursorState,
    title: String,
    term: &'a str,
    focused: bool,
    show_local_names: bool,
    theme: &'a Theme,
}

impl<'a> SpeciesList<'a> {
    pub fn new(
        rows: &'a [&'a Species],
        cursor: &'a CursorState,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            rows,
            cursor,
            title: String::new(),
            term: "",
            focused,
            show_local_names: true,
            theme,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Term to highlight inside names.
    pub fn term(mut self, term: &'a str) -> Self {
        self.term = term;
        self
    }

    pub fn show_local_names(mut self, show: bool) -> Self {
        self.show_local_names = show;
        self
    }

    fn row(&self, species: &'a Species) -> Line<'a> {
        let mut line = highlight(
            &species.name,
            self.term,
            ratatui::style::Style::default(),
            self.theme.search_highlight,
        );
        line.spans.insert(
            0,
            Span::styled(
                format!("{} ", category_icon(species.category)),
                self.theme.category_style(species.category),
            ),
        );
        if self.show_local_names {
            line.spans.push(Span::raw("  "));
            line.spans.push(Span::styled(species.local_name.as_str(), self.theme.local_name));
        }
        line.spans.push(Span::raw("  "));
        line.spans.push(status_badge(species.conservation_status, true, self.theme));
        line
    }
}

impl Widget for SpeciesList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(Span::styled(format!(" {} ", self.title), self.theme.title))
            .border_style(self.theme.border(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.rows.is_empty() {
            let notice = vec![
                Line::raw(""),
                Line::from(Span::styled("No Animals Found", self.theme.heading)).centered(),
                Line::from(Span::styled(
                    "Try adjusting your search or filters.",
                    self.theme.muted,
                ))
                .centered(),
            ];
            Paragraph::new(notice).render(inner, buf);
            return;
        }

        let height = inner.height as usize;
        self.cursor.set_viewport(height);
        let total = self.rows.len();
        let start = self.cursor.window_start(height).min(total.saturating_sub(1));
        let end = (start + height).min(total);

        let lines: Vec<Line> = self.rows[start..end]
            .iter()
            .enumerate()
            .map(|(i, species)| {
                let line = self.row(species);
                if self.focused && start + i == self.cursor.selected {
                    line.patch_style(self.theme.selected)
                } else {
                    line
                }
            })
            .collect();

        // One column on the right is reserved for the scrollbar track
        let text_area = Rect { width: inner.width.saturating_sub(1), ..inner };
        let sb_area = Rect { x: inner.right().saturating_sub(1), width: 1, ..inner };

        Paragraph::new(lines).render(text_area, buf);

        if total > height {
            let mut sb_state = ScrollbarState::new(total)
                .position(start)
                .viewport_content_length(height);
            StatefulWidget::render(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(None)
                    .end_symbol(None),
                sb_area,
                buf,
                &mut sb_state,
            );
        }
    }
}
