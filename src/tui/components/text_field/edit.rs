//! Pure string-editing helpers for `TextField`.
//!
//! Offsets are byte offsets that always sit on a char boundary.

use unicode_width::UnicodeWidthStr;

/// Find the byte offset of the previous character boundary before `pos` in `text`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Start of the word before `pos`: skips trailing non-word characters first,
/// then the word itself (readline `backward-word`).
pub(super) fn prev_word_boundary(text: &str, pos: usize) -> usize {
    let mut chars = text[..pos].char_indices().rev().peekable();

    while chars.peek().is_some_and(|&(_, c)| !is_word_char(c)) {
        chars.next();
    }
    let mut start = chars.peek().map(|&(i, _)| i).unwrap_or(0);
    while let Some(&(i, c)) = chars.peek() {
        if !is_word_char(c) {
            break;
        }
        start = i;
        chars.next();
    }
    start
}

/// Terminal columns taken by `text`.
pub(super) fn display_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

/// Byte offset to start drawing from so that the cursor at `pos` fits in
/// `width` columns, keeping one column free for the cursor itself.
pub(super) fn scroll_start(text: &str, pos: usize, width: u16) -> usize {
    if width == 0 {
        return pos;
    }
    let mut start = 0;
    while display_width(&text[start..pos]) >= width && start < pos {
        start = next_char_boundary(text, start);
    }
    start
}
