//! Help popup: centred floating overlay listing all keybindings.
//!
//! Toggle with `?`; close with `?` or `Escape`.

use crate::theme::Theme;
use crate::widgets::centered_rect;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

const BINDINGS: &[(&str, &str)] = &[
    ("q", "Back / quit on the home page"),
    ("Ctrl+c", "Quit"),
    ("1 2 3 4", "Home / Browse / Blog / About"),
    ("b  /  Backspace", "Previous page"),
    ("Tab", "Cycle focus: list → search"),
    ("/", "Search (opens Browse from other pages)"),
    ("Escape", "Leave search / close popup"),
    ("↑ k  /  ↓ j", "Move selection"),
    ("PageUp  /  Ctrl+u", "Page up"),
    ("PageDown / Ctrl+d", "Page down"),
    ("Enter", "Open selection / suggestion"),
    ("f", "Filter by category or status"),
    (":", "Command line (:help lists commands)"),
    ("?", "Toggle this help popup"),
];

const COMMANDS: &[(&str, &str)] = &[
    (":go <page>", "home, search, blog, about, or a category"),
    (":open <id>", "Open a species by id"),
    (":status <s|all>", "Filter by conservation status"),
    (":category <c|all>", "Filter by category"),
    (":clear", "Clear search and filters"),
    (":theme <name>", "default, gruvbox"),
    (":back  :q  :q!", "Back / back-or-quit / quit"),
];

pub struct HelpPopup<'a> {
    theme: &'a Theme,
}

impl<'a> HelpPopup<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn rows(&self, table: &'static [(&'static str, &'static str)]) -> impl Iterator<Item = Line<'static>> + '_ {
        table.iter().map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("  {key:<22}"), self.theme.heading),
                Span::raw(*desc),
            ])
        })
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = (BINDINGS.len() + COMMANDS.len() + 3) as u16;
        let popup = centered_rect(72, height, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(" bdwild: keybindings (? to close) ")
            .border_style(self.theme.border_focused);
        let inner = block.inner(popup);
        block.render(popup, buf);

        let mut lines: Vec<Line> = self.rows(BINDINGS).collect();
        lines.push(Line::raw(""));
        lines.extend(self.rows(COMMANDS));

        Paragraph::new(lines).render(inner, buf);
    }
}
