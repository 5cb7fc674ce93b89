//! Blog page: the post teasers, newest first as listed in the dataset.

use crate::text::{truncate, PREVIEW_CHARS};
use crate::theme::Theme;
use crate::widgets::cursor::CursorState;
use bdwild_core::BlogPost;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

pub struct BlogPage<'a> {
    posts: &'a [BlogPost],
    cursor: &'a CursorState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> BlogPage<'a> {
    pub fn new(posts: &'a [BlogPost], cursor: &'a CursorState, focused: bool, theme: &'a Theme) -> Self {
        Self { posts, cursor, focused, theme }
    }
}

impl Widget for BlogPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(Span::styled(" Wildlife Blog ", self.theme.title))
            .border_style(self.theme.border(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.posts.is_empty() {
            Paragraph::new(Line::from(Span::styled("No posts yet.", self.theme.muted)))
                .render(inner, buf);
            return;
        }

        let mut lines = Vec::with_capacity(self.posts.len() * 4);
        for (i, post) in self.posts.iter().enumerate() {
            let title = Line::from(Span::styled(post.title.as_str(), self.theme.heading));
            lines.push(if self.focused && i == self.cursor.selected {
                title.patch_style(self.theme.selected)
            } else {
                title
            });
            lines.push(Line::from(Span::styled(post.display_date(), self.theme.muted)));
            lines.push(Line::raw(truncate(&post.excerpt, PREVIEW_CHARS).into_owned()));
            lines.push(Line::raw(""));
        }

        // Four lines per post; keep the selected post on screen
        let scroll = (self.cursor.selected * 4).saturating_sub(inner.height.saturating_sub(4) as usize);
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .scroll((scroll as u16, 0))
            .render(inner, buf);
    }
}
