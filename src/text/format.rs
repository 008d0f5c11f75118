//! Small formatting helpers used alongside rendered text.

use std::borrow::Cow;

use super::quote::Locale;

/// Turn `"Surname, Forename"` into `"Forename Surname"`.
///
/// Only a name with exactly one comma is reordered; anything else is
/// returned trimmed.
///
/// ```
/// use glosa::text::format_name;
///
/// assert_eq!(format_name("Marx, Karl"), "Karl Marx");
/// assert_eq!(format_name("Karl Marx"), "Karl Marx");
/// ```
pub fn format_name(name: &str) -> String {
    let mut parts = name.split(',');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(surname), Some(forename), None) => {
            let (surname, forename) = (surname.trim(), forename.trim());
            match (forename.is_empty(), surname.is_empty()) {
                (true, _) => surname.to_string(),
                (_, true) => forename.to_string(),
                _ => format!("{forename} {surname}"),
            }
        }
        _ => name.trim().to_string(),
    }
}

/// Join segments with `/`, replacing each whitespace run with `_`.
///
/// ```
/// use glosa::text::join_path;
///
/// assert_eq!(join_path(&["Briefe 1845", "an Engels"]), "Briefe_1845/an_Engels");
/// ```
pub fn join_path<S: AsRef<str>>(segments: &[S]) -> String {
    let joined = segments
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<&str>>()
        .join("/");

    let mut path = String::with_capacity(joined.len());
    let mut in_space = false;
    for c in joined.chars() {
        if c.is_whitespace() {
            if !in_space {
                path.push('_');
                in_space = true;
            }
        } else {
            path.push(c);
            in_space = false;
        }
    }
    path
}

/// The word for "and" in a locale.
pub fn default_conjunction(locale: Locale) -> &'static str {
    match locale {
        Locale::German => "und",
        Locale::English => "and",
        Locale::Neutral => "&",
    }
}

/// Join items as prose: `a, b and c`.
///
/// The final conjunction comes from `conjunction`, so callers can plug in
/// their own translations; [`default_conjunction`] covers the built-in
/// locales.
///
/// ```
/// use glosa::text::{Locale, default_conjunction, join_list};
///
/// let names = ["Marx", "Engels", "Lassalle"];
/// assert_eq!(
///     join_list(&names, Locale::German, default_conjunction),
///     "Marx, Engels und Lassalle"
/// );
/// ```
pub fn join_list<S, F, C>(items: &[S], locale: Locale, conjunction: F) -> String
where
    S: AsRef<str>,
    F: Fn(Locale) -> C,
    C: AsRef<str>,
{
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let head = init
                .iter()
                .map(|s| s.as_ref())
                .collect::<Vec<&str>>()
                .join(", ");
            format!(
                "{head} {} {}",
                conjunction(locale).as_ref(),
                last.as_ref()
            )
        }
    }
}

/// Prepare text for output. Currently a passthrough.
pub fn sanitize(text: &str) -> Cow<'_, str> {
    Cow::Borrowed(text)
}
