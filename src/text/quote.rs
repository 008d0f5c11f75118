//! Locale-aware quotation marks.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Locales with their own quotation-mark conventions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Locale {
    /// `de`: „low-high“ marks.
    German,
    /// `en`: “curly” marks.
    English,
    /// Anything else: straight ASCII marks.
    #[default]
    Neutral,
}

impl Locale {
    /// Resolve a two-letter language code. Unrecognized codes are
    /// [`Locale::Neutral`].
    pub fn from_code(code: &str) -> Self {
        let code = code.trim();
        if code.eq_ignore_ascii_case("de") {
            Locale::German
        } else if code.eq_ignore_ascii_case("en") {
            Locale::English
        } else {
            log::trace!("unrecognized locale {code:?}, using straight quotes");
            Locale::Neutral
        }
    }

    /// The language code, or `""` for [`Locale::Neutral`].
    pub fn code(self) -> &'static str {
        match self {
            Locale::German => "de",
            Locale::English => "en",
            Locale::Neutral => "",
        }
    }
}

impl FromStr for Locale {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Locale::from_code(s))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Double or single quotation marks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum QuoteStyle {
    #[default]
    Double,
    Single,
}

/// Opening and closing marks for a style in a locale.
pub fn quote_marks(style: QuoteStyle, locale: Locale) -> (&'static str, &'static str) {
    match (locale, style) {
        (Locale::German, QuoteStyle::Double) => ("\u{201E}", "\u{201C}"),
        (Locale::German, QuoteStyle::Single) => ("\u{201A}", "\u{2018}"),
        (Locale::English, QuoteStyle::Double) => ("\u{201C}", "\u{201D}"),
        (Locale::English, QuoteStyle::Single) => ("\u{2018}", "\u{2019}"),
        (Locale::Neutral, QuoteStyle::Double) => ("\"", "\""),
        (Locale::Neutral, QuoteStyle::Single) => ("'", "'"),
    }
}

/// Wrap rendered fragments in quotation marks.
///
/// The shape of the result depends on how many fragments come in:
///
/// - none: nothing is emitted, not even the marks;
/// - one: a single fragment with the marks fused onto the text;
/// - several: the marks become fragments of their own, placed before the
///   first and after the last fragment, which are left untouched.
///
/// # Examples
///
/// ```
/// use glosa::text::{Locale, QuoteStyle, enquote};
///
/// assert_eq!(
///     enquote(vec!["x".into()], QuoteStyle::Double, Locale::English),
///     vec!["\u{201C}x\u{201D}"]
/// );
/// assert_eq!(
///     enquote(vec!["a".into(), "b".into()], QuoteStyle::Double, Locale::German),
///     vec!["\u{201E}", "a", "b", "\u{201C}"]
/// );
/// ```
pub fn enquote(fragments: Vec<String>, style: QuoteStyle, locale: Locale) -> Vec<String> {
    let (open, close) = quote_marks(style, locale);

    match fragments.len() {
        0 => fragments,
        1 => {
            let content = &fragments[0];
            let mut fused = String::with_capacity(open.len() + content.len() + close.len());
            fused.push_str(open);
            fused.push_str(content);
            fused.push_str(close);
            vec![fused]
        }
        n => {
            let mut quoted = Vec::with_capacity(n + 2);
            quoted.push(open.to_string());
            quoted.extend(fragments);
            quoted.push(close.to_string());
            quoted
        }
    }
}
