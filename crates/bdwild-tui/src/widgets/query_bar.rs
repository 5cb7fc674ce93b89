//! Query bar widget: free-text search input at the bottom of searchable
//! pages, plus the suggestion dropdown drawn above it while typing.
//!
//! # Editing
//!
//! - `Char(c)` inserts at the cursor.
//! - `Backspace` deletes the character before the cursor.
//! - `Nav(Left)` / `Nav(Right)` move the cursor.
//! - `Nav(Up)` / `Nav(Down)` move the highlighted suggestion.
//!
//! Any edit clears the suggestion highlight, since the list itself changes.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use crate::widgets::status_badge;
use bdwild_core::{Category, ConservationStatus, Facet, Species, Suggestion};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

const PLACEHOLDER: &str = "Search by name, Bangla name or description...";

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct QueryBarState {
    /// The search term typed by the user.
    pub query: String,
    /// Byte offset of the cursor within `query`.
    pub cursor: usize,
    /// Highlighted row of the suggestion dropdown, if any.
    pub selected: Option<usize>,
}

impl QueryBarState {
    pub fn clear(&mut self) {
        self.query.clear();
        self.cursor = 0;
        self.selected = None;
    }

    /// Handle a key event while the query bar is focused. `suggestions` is
    /// the number of rows currently in the dropdown.
    pub fn handle(&mut self, event: &AppEvent, suggestions: usize) {
        match event {
            AppEvent::Char(c) => {
                self.query.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                self.selected = None;
                tracing::debug!(query = %self.query, cursor = self.cursor, "query: char inserted");
            }
            AppEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = self.query[..self.cursor]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                    self.query.remove(prev);
                    self.cursor = prev;
                    self.selected = None;
                    tracing::debug!(query = %self.query, cursor = self.cursor, "query: backspace");
                }
            }
            AppEvent::Nav(Direction::Left) => {
                if self.cursor > 0 {
                    self.cursor = self.query[..self.cursor]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                }
            }
            AppEvent::Nav(Direction::Right) => {
                if self.cursor < self.query.len() {
                    self.cursor = self.query[self.cursor..]
                        .char_indices()
                        .nth(1)
                        .map(|(i, _)| self.cursor + i)
                        .unwrap_or(self.query.len());
                }
            }
            AppEvent::Nav(Direction::Down) if suggestions > 0 => {
                self.selected = Some(match self.selected {
                    None => 0,
                    Some(i) => (i + 1).min(suggestions - 1),
                });
                tracing::debug!(selected = ?self.selected, "query: suggestion down");
            }
            AppEvent::Nav(Direction::Up) => {
                self.selected = match self.selected {
                    None | Some(0) => None,
                    Some(i) => Some(i - 1),
                };
                tracing::debug!(selected = ?self.selected, "query: suggestion up");
            }
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Query bar widget
// ---------------------------------------------------------------------------

pub struct QueryBar<'a> {
    state: &'a QueryBarState,
    category: &'a Facet<Category>,
    status: &'a Facet<ConservationStatus>,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> QueryBar<'a> {
    pub fn new(
        state: &'a QueryBarState,
        category: &'a Facet<Category>,
        status: &'a Facet<ConservationStatus>,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self { state, category, status, focused, theme }
    }

    /// Absolute terminal position of the text cursor within this widget's
    /// rendered area. Pass to `frame.set_cursor_position()` after rendering.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        // The block adds 1-cell borders; text starts at (area.x+1, area.y+1).
        let col = self.state.query[..self.state.cursor].chars().count() as u16;
        let x = (area.x + 1 + col).min(area.right().saturating_sub(1));
        (x, area.y + 1)
    }
}

impl Widget for QueryBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title("Search")
            .border_style(self.theme.border(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(LayoutDir::Horizontal)
            .constraints([Constraint::Fill(1), Constraint::Length(44)])
            .split(inner);

        let query_line = if self.state.query.is_empty() && !self.focused {
            Line::from(Span::styled("press / to search", self.theme.muted))
        } else if self.state.query.is_empty() {
            Line::from(Span::styled(PLACEHOLDER, self.theme.muted))
        } else {
            Line::from(self.state.query.as_str())
        };
        Paragraph::new(query_line).render(chunks[0], buf);

        // category:all status:Endangered  (f to filter)
        let filters = Line::from(vec![
            Span::styled("category:", self.theme.muted),
            Span::raw(self.category.to_string()),
            Span::styled(" status:", self.theme.muted),
            Span::raw(self.status.to_string()),
            Span::styled("  f", self.theme.heading),
        ])
        .right_aligned();
        Paragraph::new(filters).render(chunks[1], buf);
    }
}

// ---------------------------------------------------------------------------
// Suggestion dropdown
// ---------------------------------------------------------------------------

/// Floating list of suggestions, drawn directly above the query bar.
pub struct SuggestionDropdown<'a> {
    suggestions: &'a [Suggestion<'a>],
    species: &'a [Species],
    selected: Option<usize>,
    theme: &'a Theme,
}

impl<'a> SuggestionDropdown<'a> {
    /// `species` is only used to look up the badge for each suggestion.
    pub fn new(
        suggestions: &'a [Suggestion<'a>],
        species: &'a [Species],
        selected: Option<usize>,
        theme: &'a Theme,
    ) -> Self {
        Self { suggestions, species, selected, theme }
    }

    /// Height needed to show every suggestion inside a border.
    pub fn height(&self) -> u16 {
        self.suggestions.len() as u16 + 2
    }
}

impl Widget for SuggestionDropdown<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.suggestions.is_empty() {
            return;
        }
        Clear.render(area, buf);
        let block = Block::bordered()
            .title(Span::styled(" Suggestions (↑/↓, Enter opens) ", self.theme.muted))
            .border_style(self.theme.border_focused);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = self
            .suggestions
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let mut spans = vec![
                    Span::raw(s.name),
                    Span::raw("  "),
                    Span::styled(s.local_name, self.theme.local_name),
                ];
                if let Some(found) = bdwild_core::query::find_by_id(self.species, s.id) {
                    spans.push(Span::raw("  "));
                    spans.push(status_badge(found.conservation_status, true, self.theme));
                }
                let line = Line::from(spans);
                if self.selected == Some(i) {
                    line.patch_style(self.theme.selected)
                } else {
                    line
                }
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
