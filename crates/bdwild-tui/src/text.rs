//! Small text helpers shared by the page widgets.

use ratatui::{
    style::Style,
    text::{Line, Span},
};
use std::borrow::Cow;

/// Length used for card-style previews of descriptions and excerpts.
pub const PREVIEW_CHARS: usize = 100;

/// Cut `text` to at most `max` characters, appending `...` when anything was
/// removed. Counts characters, so multi-byte Bangla text is never split
/// inside a code point.
pub fn truncate(text: &str, max: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max) {
        None => Cow::Borrowed(text),
        Some((cut, _)) => Cow::Owned(format!("{}...", &text[..cut])),
    }
}

/// Render `text` with the first case-insensitive occurrence of `term`
/// highlighted.
///
/// Falls back to a single plain span when the term is empty, absent, or when
/// lowercasing changes the byte length of `text` (offsets would not line up).
pub fn highlight<'a>(text: &'a str, term: &str, base: Style, hl: Style) -> Line<'a> {
    if term.is_empty() {
        return Line::from(Span::styled(text, base));
    }
    let folded = text.to_lowercase();
    if folded.len() != text.len() {
        return Line::from(Span::styled(text, base));
    }
    match folded.find(&term.to_lowercase()) {
        Some(start) => {
            let end = start + term.to_lowercase().len();
            if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
                return Line::from(Span::styled(text, base));
            }
            Line::from(vec![
                Span::styled(&text[..start], base),
                Span::styled(&text[start..end], hl),
                Span::styled(&text[end..], base),
            ])
        }
        None => Line::from(Span::styled(text, base)),
    }
}
