//! Whitespace and unicode normalization.

use unicode_normalization::UnicodeNormalization;

/// Control characters that are treated as word separators: escape, delete
/// and the first C1 control point.
const CONTROL_SEPARATORS: [char; 3] = ['\u{1B}', '\u{7F}', '\u{80}'];

/// Typographic spaces folded to an ordinary space: no-break space, en space,
/// em space and thin space.
const TYPOGRAPHIC_SPACES: [char; 4] = ['\u{A0}', '\u{2002}', '\u{2003}', '\u{2009}'];

/// Normalize text for display.
///
/// Control separators and typographic spaces become ordinary spaces, every
/// run of whitespace collapses to a single space, the ends are trimmed, and
/// the result is put into Unicode canonical composition (NFC).
///
/// The function is idempotent.
///
/// # Examples
///
/// ```
/// use glosa::text::normalize;
///
/// assert_eq!(normalize("  Karl\u{00A0}\u{00A0}Marx\n"), "Karl Marx");
/// assert_eq!(normalize("Mu\u{0308}nchen"), "M\u{00FC}nchen");
/// ```
pub fn normalize(text: &str) -> String {
    let spaced: String = text
        .chars()
        .map(|c| {
            if CONTROL_SEPARATORS.contains(&c) || TYPOGRAPHIC_SPACES.contains(&c) {
                ' '
            } else {
                c
            }
        })
        .collect();

    collapse_whitespace(&spaced).nfc().collect()
}

/// [`normalize`] for optional input; `None` yields the empty string.
pub fn normalize_opt(text: Option<&str>) -> String {
    text.map(normalize).unwrap_or_default()
}

/// Collapses runs of Unicode whitespace to single ASCII spaces and trims
/// both ends.
pub fn collapse_whitespace(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for segment in text.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(segment);
    }
    normalized
}
