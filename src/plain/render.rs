//! Markup tree → plain text fragments.
//!
//! Rendering is a pure walk over the tree. Each node contributes zero or
//! more fragments in document order; joining the fragments with no
//! separator gives the rendered text.

use log::trace;

use crate::dom::{Element, ElementKind, MarkupNode};
use crate::text::{Locale, QuoteStyle, enquote};

/// Marker appended to forenames carrying a `cert` attribute.
const UNCERTAIN_MARKER: &str = " (?)";

/// `type` value of a break that falls inside a word.
const IN_WORD: &str = "inWord";

/// `rend` value selecting double marks on a block quotation.
const DOUBLE_QUOTES: &str = "double-quotes";

/// Settings threaded through a render pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RenderContext {
    /// Locale for quotation marks.
    pub locale: Locale,
}

impl RenderContext {
    /// Create a context for a locale.
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Create a context from a two-letter language code.
    pub fn from_code(code: &str) -> Self {
        Self::new(Locale::from_code(code))
    }
}

/// Render a node and its descendants to text fragments.
///
/// # Examples
///
/// ```
/// use glosa::dom::{Element, MarkupNode};
/// use glosa::plain::{RenderContext, render};
///
/// let subst = Element::new("subst")
///     .with_child(Element::new("del").with_text("old"))
///     .with_child(Element::new("add").with_text("new"));
///
/// let fragments = render(&MarkupNode::from(subst), RenderContext::default());
/// assert_eq!(fragments.concat(), "new");
/// ```
pub fn render(node: &MarkupNode, ctx: RenderContext) -> Vec<String> {
    let mut fragments = Vec::new();
    render_into(node, ctx, &mut fragments);
    fragments
}

/// Render a node and join its fragments.
pub fn render_to_string(node: &MarkupNode, ctx: RenderContext) -> String {
    flatten(&render(node, ctx))
}

/// Join fragments with no separator.
pub fn flatten(fragments: &[String]) -> String {
    fragments.concat()
}

fn render_into(node: &MarkupNode, ctx: RenderContext, out: &mut Vec<String>) {
    match node {
        MarkupNode::Document { children } => render_children(children, ctx, out),
        MarkupNode::Element(element) => render_element(element, ctx, out),
        MarkupNode::Text { content } => out.push(collapse_newlines(content)),
        MarkupNode::ProcessingInstruction { .. } | MarkupNode::Comment { .. } => {}
    }
}

fn render_children(children: &[MarkupNode], ctx: RenderContext, out: &mut Vec<String>) {
    for child in children {
        render_into(child, ctx, out);
    }
}

fn render_element(element: &Element, ctx: RenderContext, out: &mut Vec<String>) {
    match element.kind() {
        ElementKind::Forename => {
            render_children(&element.children, ctx, out);
            if element.has_attr("cert") {
                out.push(UNCERTAIN_MARKER.to_string());
            }
        }

        // Deleted text and notes are editorial apparatus, not reading text.
        ElementKind::Deletion | ElementKind::Note => {}

        // Only element children survive; the deletion among them renders
        // to nothing, leaving the replacement.
        ElementKind::Substitution => {
            for child in &element.children {
                if let MarkupNode::Element(inner) = child {
                    render_element(inner, ctx, out);
                }
            }
        }

        ElementKind::LineBreak => {
            if !is_in_word(element) {
                out.push("\n".to_string());
            }
        }

        ElementKind::PageBreak => {
            if !is_in_word(element) {
                out.push(" ".to_string());
            }
        }

        ElementKind::Quotation => render_quoted(element, QuoteStyle::Double, ctx, out),

        ElementKind::BlockQuotation => {
            let style = if element.attr("rend") == Some(DOUBLE_QUOTES) {
                QuoteStyle::Double
            } else {
                QuoteStyle::Single
            };
            render_quoted(element, style, ctx, out);
        }

        ElementKind::Supplied => {
            out.push("[".to_string());
            render_children(&element.children, ctx, out);
            out.push("]".to_string());
        }

        ElementKind::Other => {
            trace!("descending into <{}>", element.name);
            render_children(&element.children, ctx, out);
        }
    }
}

fn render_quoted(element: &Element, style: QuoteStyle, ctx: RenderContext, out: &mut Vec<String>) {
    let mut inner = Vec::new();
    render_children(&element.children, ctx, &mut inner);
    out.extend(enquote(inner, style, ctx.locale));
}

fn is_in_word(element: &Element) -> bool {
    element.attr("type") == Some(IN_WORD)
}

/// Replace each run of newlines with a single space.
fn collapse_newlines(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_run = false;

    for c in text.chars() {
        if c == '\n' {
            if !in_run {
                result.push(' ');
                in_run = true;
            }
        } else {
            result.push(c);
            in_run = false;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn de() -> RenderContext {
        RenderContext::new(Locale::German)
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_collapse_newlines() {
        assert_eq!(collapse_newlines("a\nb"), "a b");
        assert_eq!(collapse_newlines("a\n\n\nb"), "a b");
        assert_eq!(collapse_newlines("\na  b\n"), " a  b ");
        assert_eq!(collapse_newlines("a\n \nb"), "a   b");
        assert_eq!(collapse_newlines(""), "");
    }

    #[test]
    fn test_text_is_one_fragment() {
        let node = MarkupNode::text("Lieber\nFreund");
        assert_eq!(render(&node, de()), strings(&["Lieber Freund"]));
    }

    #[test]
    fn test_forename_with_cert() {
        let node: MarkupNode = Element::new("forename")
            .with_attr("cert", "low")
            .with_text("Karl")
            .into();
        let fragments = render(&node, de());

        assert_eq!(fragments, strings(&["Karl", " (?)"]));
        assert_eq!(flatten(&fragments), "Karl (?)");
    }

    #[test]
    fn test_forename_without_cert() {
        let node: MarkupNode = Element::new("forename").with_text("Karl").into();
        assert_eq!(render(&node, de()), strings(&["Karl"]));
    }

    #[test]
    fn test_deletion_and_note_render_nothing() {
        let del: MarkupNode = Element::new("del").with_text("old").into();
        let note: MarkupNode = Element::new("note")
            .with_child(Element::new("p").with_text("comment"))
            .into();

        assert!(render(&del, de()).is_empty());
        assert!(render(&note, de()).is_empty());
    }

    #[test]
    fn test_substitution_keeps_insertion() {
        let node: MarkupNode = Element::new("subst")
            .with_child(Element::new("del").with_text("old"))
            .with_child(Element::new("add").with_text("new"))
            .into();

        assert_eq!(render(&node, de()), strings(&["new"]));
    }

    #[test]
    fn test_substitution_skips_direct_text() {
        let node: MarkupNode = Element::new("subst")
            .with_text(" stray ")
            .with_child(Element::new("add").with_text("kept"))
            .into();

        assert_eq!(render(&node, de()), strings(&["kept"]));
    }

    #[test]
    fn test_line_breaks() {
        let plain: MarkupNode = Element::new("lb").into();
        let in_word: MarkupNode = Element::new("lb").with_attr("type", "inWord").into();

        assert_eq!(render(&plain, de()), strings(&["\n"]));
        assert!(render(&in_word, de()).is_empty());
    }

    #[test]
    fn test_in_word_break_joins_word() {
        let node: MarkupNode = Element::new("p")
            .with_text("Ge")
            .with_child(Element::new("lb").with_attr("type", "inWord"))
            .with_text("schichte")
            .with_child(Element::new("lb"))
            .with_text("und")
            .into();

        assert_eq!(render_to_string(&node, de()), "Geschichte\nund");
    }

    #[test]
    fn test_page_breaks() {
        let plain: MarkupNode = Element::new("pb").with_attr("n", "2").into();
        let in_word: MarkupNode = Element::new("pb").with_attr("type", "inWord").into();

        assert_eq!(render(&plain, de()), strings(&[" "]));
        assert!(render(&in_word, de()).is_empty());
    }

    #[test]
    fn test_quotation_single_fragment_fuses_marks() {
        let node: MarkupNode = Element::new("q").with_text("Kapital").into();
        assert_eq!(render(&node, de()), strings(&["\u{201E}Kapital\u{201C}"]));
    }

    #[test]
    fn test_quotation_many_fragments_gets_marker_fragments() {
        let node: MarkupNode = Element::new("q")
            .with_text("erste")
            .with_child(Element::new("lb"))
            .with_text("Zeile")
            .into();

        assert_eq!(
            render(&node, RenderContext::new(Locale::English)),
            strings(&["\u{201C}", "erste", "\n", "Zeile", "\u{201D}"])
        );
    }

    #[test]
    fn test_empty_quotation_renders_nothing() {
        let node: MarkupNode = Element::new("q").into();
        assert!(render(&node, de()).is_empty());
    }

    #[test]
    fn test_block_quotation_styles() {
        let double: MarkupNode = Element::new("quote")
            .with_attr("rend", "double-quotes")
            .with_text("x")
            .into();
        let single: MarkupNode = Element::new("quote").with_text("x").into();
        let other_rend: MarkupNode = Element::new("quote")
            .with_attr("rend", "italic")
            .with_text("x")
            .into();

        assert_eq!(render(&double, de()), strings(&["\u{201E}x\u{201C}"]));
        assert_eq!(render(&single, de()), strings(&["\u{201A}x\u{2018}"]));
        assert_eq!(render(&other_rend, RenderContext::default()), strings(&["'x'"]));
    }

    #[test]
    fn test_nested_quotations() {
        let node: MarkupNode = Element::new("q")
            .with_text("er sagte ")
            .with_child(Element::new("quote").with_text("nein"))
            .into();

        assert_eq!(
            render_to_string(&node, RenderContext::new(Locale::English)),
            "\u{201C}er sagte \u{2018}nein\u{2019}\u{201D}"
        );
    }

    #[test]
    fn test_supplied_text_in_brackets() {
        let node: MarkupNode = Element::new("supplied").with_text("und").into();
        assert_eq!(render(&node, de()), strings(&["[", "und", "]"]));

        let empty: MarkupNode = Element::new("supplied").into();
        assert_eq!(render(&empty, de()), strings(&["[", "]"]));
    }

    #[test]
    fn test_comments_and_instructions_render_nothing() {
        let node = MarkupNode::document(vec![
            MarkupNode::comment("c"),
            MarkupNode::processing_instruction("pi"),
            MarkupNode::text("t"),
        ]);
        assert_eq!(render(&node, de()), strings(&["t"]));
    }

    #[test]
    fn test_unknown_elements_descend() {
        let node = MarkupNode::document(vec![
            Element::new("persName")
                .with_attr("ref", "#marx")
                .with_child(Element::new("forename").with_text("Karl"))
                .with_text(" ")
                .with_child(Element::new("surname").with_text("Marx"))
                .into(),
        ]);

        assert_eq!(render_to_string(&node, de()), "Karl Marx");
    }

    #[test]
    fn test_render_context_from_code() {
        assert_eq!(RenderContext::from_code("de").locale, Locale::German);
        assert_eq!(RenderContext::from_code("xx"), RenderContext::default());
    }
}
