//! Pure string utilities for rendered text.
//!
//! - [`normalize`]: whitespace folding and canonical composition
//! - [`enquote`]: locale-aware quotation marks around fragments
//! - [`shorten`]: word-boundary truncation with an ellipsis
//! - [`format_name`], [`join_path`], [`join_list`], [`sanitize`]: small
//!   formatting helpers for names, paths and lists
//!
//! Nothing here allocates state or performs I/O.

mod format;
mod normalize;
mod quote;
mod truncate;

pub use format::{default_conjunction, format_name, join_list, join_path, sanitize};
pub use normalize::{collapse_whitespace, normalize, normalize_opt};
pub use quote::{Locale, QuoteStyle, enquote, quote_marks};
pub use truncate::{ELLIPSIS, shorten, shorten_nodes};
