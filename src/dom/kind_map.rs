//! Maps markup element names to the renderer's element kinds.

/// Element kinds with dedicated rendering rules.
///
/// The set is closed: anything not listed is [`ElementKind::Other`] and is
/// rendered by descending into its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Personal forename, optionally flagged as an uncertain reading.
    Forename,
    /// Deleted text.
    Deletion,
    /// Substitution grouping a deletion and its replacement.
    Substitution,
    /// Editorial or authorial note.
    Note,
    /// Line break.
    LineBreak,
    /// Page break.
    PageBreak,
    /// Inline quotation marks.
    Quotation,
    /// Quoted passage.
    BlockQuotation,
    /// Text supplied by the editor.
    Supplied,
    /// Anything else.
    Other,
}

/// Map an element's local name to its kind.
pub fn element_kind(local_name: &str) -> ElementKind {
    match local_name {
        "forename" => ElementKind::Forename,

        // Editorial apparatus
        "del" => ElementKind::Deletion,
        "subst" => ElementKind::Substitution,
        "note" => ElementKind::Note,
        "supplied" => ElementKind::Supplied,

        // Breaks
        "lb" => ElementKind::LineBreak,
        "pb" => ElementKind::PageBreak,

        // Quotations
        "q" => ElementKind::Quotation,
        "quote" => ElementKind::BlockQuotation,

        _ => ElementKind::Other,
    }
}
