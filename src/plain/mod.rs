//! Plain-text rendering of editorial markup.
//!
//! - [`render`]: tree → ordered text fragments
//! - [`render_to_string`]: the same, joined
//! - [`render_xml`]: parse and render in one step
//! - [`shorten_xml`]: parse, render and cut to a teaser
//!
//! ## Rendering rules
//!
//! Editorial apparatus is resolved while rendering: deletions and notes are
//! dropped, a substitution keeps only its element children (so the
//! replacement survives its deletion), supplied text is bracketed, and an
//! uncertain forename is flagged with `(?)`. Line breaks become newlines and
//! page breaks spaces, unless they fall inside a word. Quotations get the
//! locale's quotation marks; see [`crate::text::enquote`] for how the marks
//! attach to fragments.

mod render;

pub use render::{RenderContext, flatten, render, render_to_string};

use crate::dom::parse_markup;
use crate::error::Result;
use crate::text::{Locale, shorten};

/// Parse an XML document and render it to a string.
///
/// # Examples
///
/// ```
/// use glosa::plain::render_xml;
/// use glosa::text::Locale;
///
/// let text = render_xml("<p>Er sprach: <q>Nein</q></p>", Locale::German).unwrap();
/// assert_eq!(text, "Er sprach: \u{201E}Nein\u{201C}");
/// ```
pub fn render_xml(xml: &str, locale: Locale) -> Result<String> {
    let document = parse_markup(xml)?;
    Ok(render_to_string(&document, RenderContext::new(locale)))
}

/// Parse an XML document, render it and shorten the result.
pub fn shorten_xml(xml: &str, max_length: usize, locale: Locale) -> Result<String> {
    let text = render_xml(xml, locale)?;
    Ok(shorten(&text, max_length))
}
