//! Error types for glosa operations.
//!
//! Only reading markup can fail. Rendering, quoting, normalizing and
//! truncating are total over their inputs and return plain values.

use thiserror::Error;

/// Errors that can occur while reading a markup document.
#[derive(Error, Debug)]
pub enum Error {
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Unexpected closing tag: </{0}>")]
    UnbalancedTag(String),

    #[error("Unclosed elements at end of input: {}", .0.join(", "))]
    UnclosedElements(Vec<String>),

    #[error("Document has no content")]
    EmptyDocument,
}

pub type Result<T> = std::result::Result<T, Error>;
