//! Species detail view.
//!
//! Used full-size on the detail page (facts, description and a selectable
//! "Related Species" list) and in compact form as the preview pane next to
//! the result list on category and search pages.

use crate::icons::category_icon;
use crate::theme::Theme;
use crate::widgets::{cursor::CursorState, status_badge};
use bdwild_core::Species;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

pub struct DetailView<'a> {
    species: Option<&'a Species>,
    related: &'a [&'a Species],
    cursor: Option<&'a CursorState>,
    focused: bool,
    show_local_names: bool,
    theme: &'a Theme,
}

impl<'a> DetailView<'a> {
    /// Full detail page. `related` is rendered as a selectable list driven by
    /// `cursor`.
    pub fn page(
        species: Option<&'a Species>,
        related: &'a [&'a Species],
        cursor: &'a CursorState,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            species,
            related,
            cursor: Some(cursor),
            focused,
            show_local_names: true,
            theme,
        }
    }

    /// Compact preview without the related list.
    pub fn preview(species: Option<&'a Species>, theme: &'a Theme) -> Self {
        Self {
            species,
            related: &[],
            cursor: None,
            focused: false,
            show_local_names: true,
            theme,
        }
    }

    pub fn show_local_names(mut self, show: bool) -> Self {
        self.show_local_names = show;
        self
    }

    fn fact(&self, label: &'static str, value: String) -> Line<'a> {
        Line::from(vec![
            Span::styled(format!("{label:<15}"), self.theme.heading),
            Span::raw(value),
        ])
    }

    fn body(&self, s: &'a Species) -> Vec<Line<'a>> {
        let mut lines = Vec::new();

        let mut name = vec![Span::styled(s.name.as_str(), self.theme.title)];
        if self.show_local_names {
            name.push(Span::raw("  "));
            name.push(Span::styled(s.local_name.as_str(), self.theme.local_name));
        }
        lines.push(Line::from(name));
        lines.push(Line::from(Span::styled(
            s.scientific_name.as_str(),
            self.theme.muted.add_modifier(ratatui::style::Modifier::ITALIC),
        )));
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} {}", category_icon(s.category), s.category),
                self.theme.category_style(s.category),
            ),
            Span::raw("  "),
            status_badge(s.conservation_status, false, self.theme),
        ]));
        lines.push(Line::raw(""));

        let facts = [
            ("Diet:", s.diet.clone()),
            ("Avg. Lifespan:", s.average_lifespan.clone()),
            ("Habitat:", s.habitat.clone()),
            ("Distribution:", s.distribution.join(", ")),
        ];
        for (label, value) in facts {
            if !value.is_empty() {
                lines.push(self.fact(label, value));
            }
        }
        if !s.image.is_empty() {
            lines.push(self.fact("Image:", s.image.clone()));
        }
        if let Some(sound) = &s.sound {
            lines.push(self.fact("Sound:", sound.clone()));
        }

        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(format!("About the {}", s.name), self.theme.heading)));
        lines.push(Line::raw(s.description.as_str()));
        lines
    }

    fn not_found(&self) -> Vec<Line<'a>> {
        vec![
            Line::raw(""),
            Line::from(Span::styled(
                "Animal Not Found",
                self.theme.status_critically_endangered,
            ))
            .centered(),
            Line::from(Span::styled(
                "Sorry, we couldn't find the animal you're looking for.",
                self.theme.muted,
            ))
            .centered(),
            Line::from(Span::styled("Press b to go back.", self.theme.muted)).centered(),
        ]
    }

    fn render_related(&self, cursor: &CursorState, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(Span::styled(" Related Species ", self.theme.heading))
            .border_style(self.theme.border(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);
        cursor.set_viewport(inner.height as usize);

        let lines: Vec<Line> = self
            .related
            .iter()
            .enumerate()
            .map(|(i, r)| {
                let line = Line::from(vec![
                    Span::raw(r.name.as_str()),
                    Span::raw("  "),
                    Span::styled(r.local_name.as_str(), self.theme.local_name),
                    Span::raw("  "),
                    status_badge(r.conservation_status, true, self.theme),
                ]);
                if self.focused && i == cursor.selected {
                    line.patch_style(self.theme.selected)
                } else {
                    line
                }
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}

impl Widget for DetailView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match (self.species, self.cursor) {
            (Some(_), None) => " Preview ",
            _ => " Animal ",
        };
        let block = Block::bordered()
            .title(Span::styled(title, self.theme.title))
            .border_style(self.theme.border(self.focused && self.related.is_empty()));
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(species) = self.species else {
            Paragraph::new(self.not_found()).render(inner, buf);
            return;
        };

        let related_height = if self.related.is_empty() { 0 } else { self.related.len() as u16 + 2 };
        let vert = Layout::default()
            .direction(LayoutDir::Vertical)
            .constraints([Constraint::Fill(1), Constraint::Length(related_height)])
            .split(inner);

        Paragraph::new(self.body(species))
            .wrap(Wrap { trim: true })
            .render(vert[0], buf);

        if let Some(cursor) = self.cursor {
            if !self.related.is_empty() {
                self.render_related(cursor, vert[1], buf);
            }
        }
    }
}
