//! # glosa
//!
//! Renders scholarly editorial markup (TEI-style letters and manuscripts) to
//! plain, readable text.
//!
//! ## Features
//!
//! - Resolves editorial apparatus: deletions and notes are dropped,
//!   substitutions keep their replacement, supplied text is bracketed
//! - Locale-aware quotation marks for German, English and a straight-quote
//!   fallback
//! - Line and page breaks, with in-word breaks joined silently
//! - Unicode-aware whitespace normalization and word-boundary teasers
//!
//! ## Quick Start
//!
//! ```
//! use glosa::{Locale, RenderContext, parse_markup, render_to_string, shorten};
//!
//! let doc = parse_markup(
//!     "<p>Lieber <forename cert=\"low\">Fritz</forename>, \
//!      <subst><del>gestern</del><add>heute</add></subst> kam \
//!      <q>Das Kapital</q> an.</p>",
//! )?;
//!
//! let text = render_to_string(&doc, RenderContext::new(Locale::German));
//! assert_eq!(text, "Lieber Fritz (?), heute kam \u{201E}Das Kapital\u{201C} an.");
//!
//! assert_eq!(shorten(&text, 20), "Lieber Fritz (?), …");
//! # Ok::<(), glosa::Error>(())
//! ```
//!
//! ## Working with Fragments
//!
//! [`render`] returns the rendered text as an ordered list of fragments, one
//! per rendered node or punctuation mark. Joining them with no separator
//! gives the text; keeping them apart lets callers see where quotation marks
//! and breaks were inserted.

pub mod dom;
pub mod error;
pub mod plain;
pub mod text;
pub(crate) mod util;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use dom::{Element, ElementKind, MarkupNode, parse_markup, parse_markup_bytes};
pub use error::{Error, Result};
pub use plain::{RenderContext, flatten, render, render_to_string, render_xml, shorten_xml};
pub use text::{Locale, QuoteStyle, enquote, normalize, shorten, shorten_nodes};
