//! About page: static project description.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

const INTRO: &str = "Bangladeshi Animals is a personal project born from a deep appreciation for \
the incredible biodiversity of Bangladesh. The goal is to create a modern, accessible, and \
educational resource for students, researchers, and anyone curious about the nation's wildlife.";

const FOCUS: &str = "This catalog is built with a focus on clean design, accurate information, \
and raising awareness for the many species that face conservation threats.";

const SOURCES: [&str; 4] = [
    "IUCN Bangladesh Red List",
    "Banglapedia (National Encyclopedia of Bangladesh)",
    "Bangladesh Forest Department publications",
    "Peer-reviewed academic journals",
];

pub struct AboutPage<'a> {
    theme: &'a Theme,
}

impl<'a> AboutPage<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for AboutPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(Span::styled(" About This Project ", self.theme.title))
            .border_style(self.theme.border_unfocused);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::raw(INTRO),
            Line::raw(""),
            Line::raw(FOCUS),
            Line::raw(""),
            Line::from(Span::styled("Data Sources", self.theme.heading)),
        ];
        lines.extend(SOURCES.iter().map(|s| Line::raw(format!("  • {s}"))));
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled("Get in Touch", self.theme.heading)));
        lines.push(Line::raw(
            "Have a suggestion, correction, or want to contribute? We'd love to hear from you.",
        ));

        Paragraph::new(lines).wrap(Wrap { trim: true }).render(inner, buf);
    }
}
