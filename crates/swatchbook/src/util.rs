//! Text helpers for identifiers and column layout.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of `s` in terminal columns.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Pads `s` with spaces on the right up to `width` columns.
///
/// Strings already at least `width` wide are returned unchanged.
///
/// # Example
///
/// ```rust
/// use swatchbook::pad_right;
///
/// assert_eq!(pad_right("bg", 5), "bg   ");
/// assert_eq!(pad_right("背景", 5), "背景 ");
/// ```
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.width());
    let mut out = String::with_capacity(s.len() + pad);
    out.push_str(s);
    out.extend(std::iter::repeat(' ').take(pad));
    out
}

/// Shortens `s` to at most `max_width` columns, marking the cut with `…`.
///
/// # Example
///
/// ```rust
/// use swatchbook::truncate_to_width;
///
/// assert_eq!(truncate_to_width("neutral", 10), "neutral");
/// assert_eq!(truncate_to_width("hsl(var(--x))", 6), "hsl(v…");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(1);
    let mut used = 0;
    let kept: String = s
        .chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= budget
        })
        .collect();
    format!("{}…", kept)
}

/// Returns true if `name` can be used as a JavaScript binding name.
pub fn is_js_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
