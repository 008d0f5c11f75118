//! Word-boundary truncation for teasers.

use crate::dom::MarkupNode;
use crate::plain::{RenderContext, render_to_string};

use super::normalize::normalize;
use super::quote::Locale;

/// Appended to truncated text.
pub const ELLIPSIS: &str = " …";

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, '.' | ',' | '!' | '?' | '+' | '-' | ';')
}

/// Shorten text to roughly `max_length` characters, cutting at a word
/// boundary.
///
/// The text is normalized first. If it has at most `max_length` characters
/// it is returned whole. Otherwise everything before the last delimiter
/// (whitespace or one of `. , ! ? + - ;`) within the first `max_length + 1`
/// characters is kept and [`ELLIPSIS`] appended. Looking one character past
/// the bound lets a cut land exactly on it.
///
/// When there is no delimiter to cut at, the result is just [`ELLIPSIS`].
///
/// Lengths count `char`s, not bytes.
///
/// # Examples
///
/// ```
/// use glosa::text::shorten;
///
/// assert_eq!(shorten("The quick brown fox", 9), "The quick …");
/// assert_eq!(shorten("short", 100), "short");
/// assert_eq!(shorten("Donaudampfschiff", 4), " …");
/// ```
pub fn shorten(text: &str, max_length: usize) -> String {
    let text = normalize(text);

    if text.chars().nth(max_length).is_none() {
        return text;
    }

    let window_end = text
        .char_indices()
        .nth(max_length.saturating_add(1))
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    let window = &text[..window_end];

    let kept = match window.rfind(is_delimiter) {
        Some(cut) => &window[..cut],
        None => "",
    };

    let mut shortened = String::with_capacity(kept.len() + ELLIPSIS.len());
    shortened.push_str(kept);
    shortened.push_str(ELLIPSIS);
    shortened
}

/// Render each node, join the results with single spaces and shorten.
pub fn shorten_nodes(nodes: &[MarkupNode], max_length: usize, locale: Locale) -> String {
    let ctx = RenderContext::new(locale);
    let joined = nodes
        .iter()
        .map(|node| render_to_string(node, ctx))
        .collect::<Vec<_>>()
        .join(" ");
    shorten(&joined, max_length)
}
