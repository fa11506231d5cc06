//! CSS custom property naming.

use deunicode::deunicode;

/// Turns a semantic name into a CSS custom property name.
///
/// Non-ASCII text is transliterated first, then the result is escaped as a
/// CSS identifier, so the output is always safe to paste into a stylesheet.
///
/// # Example
///
/// ```rust
/// use swatchbook::emit::custom_property;
///
/// assert_eq!(custom_property("bgColour-default"), "--bgColour-default");
/// assert_eq!(custom_property("fond-défaut"), "--fond-defaut");
/// assert_eq!(custom_property("bg default"), "--bg\\ default");
/// ```
pub fn custom_property(name: &str) -> String {
    let ascii = deunicode(name);
    let mut out = String::with_capacity(ascii.len() + 2);
    // Writing into a String cannot fail.
    let _ = cssparser::serialize_identifier(&format!("--{}", ascii), &mut out);
    out
}
