//! Filter popup: radio lists for the category and conservation status
//! facets of the current page.
//!
//! Opened with `f` on searchable pages. Category pages only offer the status
//! list (their category is fixed by the page); the search page offers both.
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑`/`↓` | Move within the active list |
//! | `←`/`→`, `Tab` | Switch between the lists |
//! | `Enter` | Apply the highlighted values and close |
//! | `c` | Clear both facets to "all" and close |
//! | `Esc`, `f` | Close without applying |

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use crate::widgets::centered_rect;
use bdwild_core::{Category, ConservationStatus, Facet};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Category,
    Status,
}

/// What the app shell should do after a key press in the popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    Apply {
        category: Facet<Category>,
        status: Facet<ConservationStatus>,
    },
    Clear,
    Close,
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct FilterPopupState {
    /// Category options; empty when the page has a fixed category.
    pub categories: Vec<Facet<Category>>,
    pub statuses: Vec<Facet<ConservationStatus>>,
    pub field: FilterField,
    pub category_idx: usize,
    pub status_idx: usize,
}

impl FilterPopupState {
    /// Open the popup with the highlight on the currently applied values.
    /// Option lists come from `distinct_categories` / `distinct_statuses`
    /// and always start with `All`.
    pub fn new(
        categories: Vec<Facet<Category>>,
        statuses: Vec<Facet<ConservationStatus>>,
        current_category: &Facet<Category>,
        current_status: &Facet<ConservationStatus>,
    ) -> Self {
        let category_idx = categories.iter().position(|c| c == current_category).unwrap_or(0);
        let status_idx = statuses.iter().position(|s| s == current_status).unwrap_or(0);
        let field = if categories.is_empty() { FilterField::Status } else { FilterField::Category };
        Self { categories, statuses, field, category_idx, status_idx }
    }

    fn selected_category(&self) -> Facet<Category> {
        self.categories.get(self.category_idx).cloned().unwrap_or_default()
    }

    fn selected_status(&self) -> Facet<ConservationStatus> {
        self.statuses.get(self.status_idx).cloned().unwrap_or_default()
    }

    fn switch_field(&mut self) {
        if !self.categories.is_empty() {
            self.field = match self.field {
                FilterField::Category => FilterField::Status,
                FilterField::Status => FilterField::Category,
            };
        }
    }

    pub fn handle(&mut self, event: &AppEvent) -> Option<FilterAction> {
        let (idx, len) = match self.field {
            FilterField::Category => (&mut self.category_idx, self.categories.len()),
            FilterField::Status => (&mut self.status_idx, self.statuses.len()),
        };
        match event {
            AppEvent::Nav(Direction::Up) => {
                *idx = idx.saturating_sub(1);
                None
            }
            AppEvent::Nav(Direction::Down) => {
                if *idx + 1 < len {
                    *idx += 1;
                }
                None
            }
            AppEvent::Nav(Direction::Left | Direction::Right) | AppEvent::FocusNext => {
                self.switch_field();
                None
            }
            AppEvent::Enter => {
                let action = FilterAction::Apply {
                    category: self.selected_category(),
                    status: self.selected_status(),
                };
                tracing::debug!(action = ?action, "filter: apply");
                Some(action)
            }
            AppEvent::Char('c') => {
                tracing::debug!("filter: clear all");
                Some(FilterAction::Clear)
            }
            AppEvent::Escape | AppEvent::ToggleFilter | AppEvent::Quit => Some(FilterAction::Close),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct FilterPopup<'a> {
    state: &'a FilterPopupState,
    theme: &'a Theme,
}

impl<'a> FilterPopup<'a> {
    pub fn new(state: &'a FilterPopupState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    fn radio<T: std::fmt::Display>(
        &self,
        options: &[Facet<T>],
        highlighted: usize,
        active: bool,
    ) -> Vec<Line<'static>> {
        options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let mark = if i == highlighted { "(•) " } else { "( ) " };
                let label = match option {
                    Facet::All => "All".to_string(),
                    other => other.to_string(),
                };
                let line = Line::from(format!("{mark}{label}"));
                if active && i == highlighted {
                    line.patch_style(self.theme.selected)
                } else {
                    line
                }
            })
            .collect()
    }

    fn section(&self, title: &'static str, lines: Vec<Line<'static>>, active: bool, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(Span::styled(title, self.theme.heading))
            .border_style(self.theme.border(active));
        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(lines).render(inner, buf);
    }
}

impl Widget for FilterPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = self.state.categories.len().max(self.state.statuses.len()) as u16;
        let width = if self.state.categories.is_empty() { 36 } else { 64 };
        let popup = centered_rect(width, rows + 6, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(Span::styled(" Filter ", self.theme.title))
            .border_style(self.theme.border_focused);
        let inner = block.inner(popup);
        block.render(popup, buf);

        let vert = Layout::default()
            .direction(LayoutDir::Vertical)
            .constraints([Constraint::Fill(1), Constraint::Length(1)])
            .split(inner);

        let status_active = self.state.field == FilterField::Status;
        let status_lines = self.radio(&self.state.statuses, self.state.status_idx, status_active);

        if self.state.categories.is_empty() {
            self.section(" Conservation Status ", status_lines, true, vert[0], buf);
        } else {
            let cols = Layout::default()
                .direction(LayoutDir::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(vert[0]);
            let category_lines =
                self.radio(&self.state.categories, self.state.category_idx, !status_active);
            self.section(" Category ", category_lines, !status_active, cols[0], buf);
            self.section(" Conservation Status ", status_lines, status_active, cols[1], buf);
        }

        Paragraph::new(Line::from(Span::styled(
            " Enter apply · c clear all · Esc close",
            self.theme.muted,
        )))
        .render(vert[1], buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn search_popup() -> FilterPopupState {
        FilterPopupState::new(
            vec![Facet::All, Facet::Only(Category::Mammal), Facet::Only(Category::Bird)],
            vec![
                Facet::All,
                Facet::Only(ConservationStatus::Endangered),
                Facet::Only(ConservationStatus::LeastConcern),
            ],
            &Facet::All,
            &Facet::All,
        )
    }

    #[test]
    fn opens_on_current_values() {
        let p = FilterPopupState::new(
            Vec::new(),
            vec![Facet::All, Facet::Only(ConservationStatus::Vulnerable)],
            &Facet::All,
            &Facet::Only(ConservationStatus::Vulnerable),
        );
        assert_eq!(p.field, FilterField::Status);
        assert_eq!(p.status_idx, 1);
    }

    #[test]
    fn apply_both_facets() {
        let mut p = search_popup();
        p.handle(&AppEvent::Nav(Direction::Down));
        p.handle(&AppEvent::Nav(Direction::Down));
        p.handle(&AppEvent::FocusNext);
        p.handle(&AppEvent::Nav(Direction::Down));
        assert_eq!(
            p.handle(&AppEvent::Enter),
            Some(FilterAction::Apply {
                category: Facet::Only(Category::Bird),
                status: Facet::Only(ConservationStatus::Endangered),
            })
        );
    }

    #[test]
    fn clear_and_close() {
        let mut p = search_popup();
        assert_eq!(p.handle(&AppEvent::Char('c')), Some(FilterAction::Clear));
        assert_eq!(p.handle(&AppEvent::Escape), Some(FilterAction::Close));
        assert_eq!(p.handle(&AppEvent::ToggleFilter), Some(FilterAction::Close));
    }

    #[test]
    fn status_only_popup_does_not_switch_field() {
        let mut p = FilterPopupState::new(Vec::new(), vec![Facet::All], &Facet::All, &Facet::All);
        p.handle(&AppEvent::FocusNext);
        assert_eq!(p.field, FilterField::Status);
        p.handle(&AppEvent::Nav(Direction::Down));
        assert_eq!(p.status_idx, 0);
    }
}
