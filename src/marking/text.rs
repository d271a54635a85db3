//! Character-indexed text primitives.
//!
//! All span offsets in the corpus are indices into the sequence of
//! Unicode scalar values of a sentence, not byte offsets. Everything
//! that splices, removes or slices text goes through these helpers so
//! the char↔byte conversion lives in one place.

/// Byte offset of the `char_idx`-th character. Indices at or past the
/// end of the text map to `text.len()`.
pub(crate) fn byte_index(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map(|(byte, _)| byte)
        .unwrap_or(text.len())
}

/// Slice by character offsets, end exclusive. `None` when the range is
/// inverted.
pub(crate) fn slice(text: &str, start: usize, end: usize) -> Option<&str> {
    if start > end {
        return None;
    }
    Some(&text[byte_index(text, start)..byte_index(text, end)])
}

/// Character index of the first occurrence of `c`.
pub(crate) fn find_char(text: &str, c: char) -> Option<usize> {
    text.chars().position(|x| x == c)
}

/// Character index of the first occurrence of `c` at or after `from`.
pub(crate) fn find_char_from(text: &str, c: char, from: usize) -> Option<usize> {
    text.chars()
        .skip(from)
        .position(|x| x == c)
        .map(|pos| pos + from)
}

/// Character index of the last occurrence of `c`.
pub(crate) fn rfind_char(text: &str, c: char) -> Option<usize> {
    let total = text.chars().count();
    text.chars()
        .rev()
        .position(|x| x == c)
        .map(|pos| total - 1 - pos)
}

/// Insert `open` before the character at `open_at` and `close` before
/// the character at `close_at` (`open_at <= close_at`); indices at or
/// past the end append.
pub(crate) fn insert_pair(text: &str, open_at: usize, close_at: usize, open: char, close: char) -> String {
    let mut out = String::with_capacity(text.len() + open.len_utf8() + close.len_utf8());
    let mut chars_seen = 0;
    for (i, c) in text.chars().enumerate() {
        if i == open_at {
            out.push(open);
        }
        if i == close_at {
            out.push(close);
        }
        out.push(c);
        chars_seen = i + 1;
    }
    if open_at >= chars_seen {
        out.push(open);
    }
    if close_at >= chars_seen {
        out.push(close);
    }
    out
}

/// Replace the first occurrence of `from` with `to`.
pub(crate) fn replace_first(text: &str, from: &str, to: &str) -> String {
    text.replacen(from, to, 1)
}
