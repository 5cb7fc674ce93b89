//! Home page: hero banner, category menu with record counts, and the
//! featured species cards.
//!
//! The selectable rows are the categories (in [`Category::ALL`] order)
//! followed by the featured species; [`home_targets`] gives the page each
//! row opens.

use crate::icons::category_icon;
use crate::router::Route;
use crate::text::{truncate, PREVIEW_CHARS};
use crate::theme::Theme;
use crate::widgets::{cursor::CursorState, status_badge};
use bdwild_core::{Category, Species};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

/// Routes opened by each selectable row of the home page, top to bottom.
pub fn home_targets(featured: &[&Species]) -> Vec<Route> {
    Category::ALL
        .into_iter()
        .map(Route::Category)
        .chain(featured.iter().map(|s| Route::Detail(s.id)))
        .collect()
}

pub struct HomePage<'a> {
    counts: &'a [(Category, usize)],
    featured: &'a [&'a Species],
    cursor: &'a CursorState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> HomePage<'a> {
    pub fn new(
        counts: &'a [(Category, usize)],
        featured: &'a [&'a Species],
        cursor: &'a CursorState,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self { counts, featured, cursor, focused, theme }
    }

    fn is_selected(&self, row: usize) -> bool {
        self.focused && self.cursor.selected == row
    }
}

impl Widget for HomePage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vert = Layout::default()
            .direction(LayoutDir::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(self.counts.len() as u16 + 2),
                Constraint::Fill(1),
            ])
            .split(area);

        let hero = vec![
            Line::raw(""),
            Line::from(Span::styled("Discover the Wildlife of Bangladesh", self.theme.title))
                .centered(),
            Line::from(Span::styled(
                "A comprehensive guide to the mammals, birds, reptiles, and aquatic life of a nation rich in biodiversity.",
                self.theme.muted,
            ))
            .centered(),
        ];
        Paragraph::new(hero).wrap(Wrap { trim: true }).render(vert[0], buf);

        // Category menu
        let block = Block::bordered()
            .title(Span::styled(" Explore by Category ", self.theme.heading))
            .border_style(self.theme.border(self.focused));
        let inner = block.inner(vert[1]);
        block.render(vert[1], buf);
        let menu: Vec<Line> = self
            .counts
            .iter()
            .enumerate()
            .map(|(row, (category, count))| {
                let line = Line::from(vec![
                    Span::styled(
                        format!("{} {:<15}", category_icon(*category), category.plural()),
                        self.theme.category_style(*category),
                    ),
                    Span::styled(format!("{count} species"), self.theme.muted),
                ]);
                if self.is_selected(row) {
                    line.patch_style(self.theme.selected)
                } else {
                    line
                }
            })
            .collect();
        Paragraph::new(menu).render(inner, buf);

        // Featured species
        let block = Block::bordered()
            .title(Span::styled(" Featured Species ", self.theme.heading))
            .border_style(self.theme.border(self.focused));
        let inner = block.inner(vert[2]);
        block.render(vert[2], buf);
        let mut lines = Vec::new();
        for (i, s) in self.featured.iter().enumerate() {
            let row = self.counts.len() + i;
            let title = Line::from(vec![
                Span::styled(s.name.as_str(), self.theme.title),
                Span::raw("  "),
                Span::styled(s.local_name.as_str(), self.theme.local_name),
                Span::raw("  "),
                status_badge(s.conservation_status, false, self.theme),
            ]);
            lines.push(if self.is_selected(row) {
                title.patch_style(self.theme.selected)
            } else {
                title
            });
            lines.push(Line::raw(format!("  {}", truncate(&s.description, PREVIEW_CHARS))));
            lines.push(Line::raw(""));
        }
        Paragraph::new(lines).wrap(Wrap { trim: false }).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bdwild_core::{query, Catalog, SpeciesId};

    #[test]
    fn targets_list_categories_then_featured() {
        let catalog = Catalog::embedded().unwrap();
        let featured = query::featured(catalog.species(), &[SpeciesId(3), SpeciesId(1)]);
        let targets = home_targets(&featured);
        assert_eq!(targets.len(), Category::ALL.len() + 2);
        assert_eq!(targets[0], Route::Category(Category::Mammal));
        assert_eq!(targets[6], Route::Detail(SpeciesId(3)));
        assert_eq!(targets[7], Route::Detail(SpeciesId(1)));
    }
}
