//! Markup parsing (XML text → [`MarkupNode`] tree).

use std::borrow::Cow;

use log::debug;
use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};

use crate::error::{Error, Result};
use crate::util::{decode_text, extract_xml_encoding};

use super::{Element, MarkupNode};

/// Parse raw bytes, decoding them first.
///
/// UTF-8 (with or without BOM) is tried first, then the encoding named in
/// the XML declaration, then Windows-1252.
pub fn parse_markup_bytes(bytes: &[u8]) -> Result<MarkupNode> {
    let text = decode_text(bytes, extract_xml_encoding(bytes));
    parse_markup(&text)
}

/// Parse an XML document into a tree rooted at [`MarkupNode::Document`].
///
/// Whitespace is preserved apart from line endings: `\r\n` and a lone `\r`
/// are read as `\n`, as XML requires. Entity references are resolved into
/// the surrounding text, so `a &amp; b` becomes a single text node, and
/// `&#13;` still yields a carriage return. The XML declaration and any
/// DOCTYPE are dropped.
///
/// # Errors
///
/// Returns [`Error::Xml`] for malformed input, [`Error::UnbalancedTag`] or
/// [`Error::UnclosedElements`] when tags do not nest, and
/// [`Error::EmptyDocument`] when the input holds no nodes at all.
pub fn parse_markup(content: &str) -> Result<MarkupNode> {
    let content = normalize_line_endings(content);
    let mut reader = Reader::from_str(&content);
    let config = reader.config_mut();
    config.trim_text(false);
    // End tags are matched against `stack` below.
    config.check_end_names = false;
    config.allow_unmatched_ends = true;

    // Open elements; the document's own children live in `root`.
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Vec<MarkupNode> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                stack.push(start_element(&e));
            }
            Event::Empty(e) => {
                let element = start_element(&e);
                push_node(&mut stack, &mut root, element.into());
            }
            Event::End(e) => {
                let name = e.name();
                let local = String::from_utf8_lossy(local_name(name.as_ref())).into_owned();
                let element = match stack.pop() {
                    Some(element) if element.name == local => element,
                    _ => return Err(Error::UnbalancedTag(local)),
                };
                push_node(&mut stack, &mut root, element.into());
            }
            Event::Text(e) => {
                push_text(&mut stack, &mut root, &String::from_utf8_lossy(e.as_ref()));
            }
            Event::CData(e) => {
                push_text(&mut stack, &mut root, &String::from_utf8_lossy(e.as_ref()));
            }
            Event::GeneralRef(e) => {
                let entity = String::from_utf8_lossy(e.as_ref());
                match resolve_entity(&entity) {
                    Some(resolved) => push_text(&mut stack, &mut root, &resolved),
                    None => push_text(&mut stack, &mut root, &format!("&{entity};")),
                }
            }
            Event::Comment(e) => {
                let text = String::from_utf8_lossy(e.as_ref()).into_owned();
                push_node(&mut stack, &mut root, MarkupNode::comment(text));
            }
            Event::PI(e) => {
                let text = String::from_utf8_lossy(e.as_ref()).into_owned();
                push_node(&mut stack, &mut root, MarkupNode::processing_instruction(text));
            }
            Event::Eof => break,
            // XML declaration and DOCTYPE
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(Error::UnclosedElements(
            stack.into_iter().map(|e| e.name).collect(),
        ));
    }
    if root.is_empty() {
        return Err(Error::EmptyDocument);
    }

    let document = MarkupNode::document(root);
    debug!("parsed markup document with {} nodes", document.node_count());
    Ok(document)
}

/// Translate `\r\n` and lone `\r` to `\n`.
fn normalize_line_endings(content: &str) -> Cow<'_, str> {
    if !content.contains('\r') {
        return Cow::Borrowed(content);
    }

    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            result.push('\n');
        } else {
            result.push(c);
        }
    }
    Cow::Owned(result)
}

/// Strip a namespace prefix (`tei:lb` → `lb`).
pub fn local_name(name: &[u8]) -> &[u8] {
    name.iter()
        .rposition(|&b| b == b':')
        .map(|i| &name[i + 1..])
        .unwrap_or(name)
}

fn start_element(e: &BytesStart<'_>) -> Element {
    let name = e.name();
    let mut element = Element::new(String::from_utf8_lossy(local_name(name.as_ref())));

    for attr in e.attributes().flatten() {
        let key = attr.key.as_ref();
        // Namespace declarations are not attributes of the text.
        if key == b"xmlns" || key.starts_with(b"xmlns:") {
            continue;
        }
        let key = String::from_utf8_lossy(local_name(key)).into_owned();
        let raw = String::from_utf8_lossy(&attr.value).into_owned();
        let value = match unescape(&raw) {
            Ok(value) => value.into_owned(),
            Err(_) => raw,
        };
        element.attributes.insert(key, value);
    }

    element
}

fn push_node(stack: &mut [Element], root: &mut Vec<MarkupNode>, node: MarkupNode) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => root.push(node),
    }
}

/// Append text, merging with a directly preceding text node.
fn push_text(stack: &mut [Element], root: &mut Vec<MarkupNode>, text: &str) {
    if text.is_empty() {
        return;
    }
    let siblings = match stack.last_mut() {
        Some(parent) => &mut parent.children,
        None => root,
    };
    if let Some(MarkupNode::Text { content }) = siblings.last_mut() {
        content.push_str(text);
    } else {
        siblings.push(MarkupNode::text(text));
    }
}

/// Resolve XML entity references.
fn resolve_entity(entity: &str) -> Option<String> {
    match entity {
        "apos" => return Some("'".to_string()),
        "quot" => return Some("\"".to_string()),
        "lt" => return Some("<".to_string()),
        "gt" => return Some(">".to_string()),
        "amp" => return Some("&".to_string()),
        _ => {}
    }

    if let Some(hex) = entity
        .strip_prefix("#x")
        .or_else(|| entity.strip_prefix("#X"))
    {
        if let Ok(code) = u32::from_str_radix(hex, 16)
            && let Some(c) = char::from_u32(code)
        {
            return Some(c.to_string());
        }
    } else if let Some(dec) = entity.strip_prefix('#')
        && let Ok(code) = dec.parse::<u32>()
        && let Some(c) = char::from_u32(code)
    {
        return Some(c.to_string());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(doc: &MarkupNode) -> &Element {
        doc.children()
            .iter()
            .find_map(MarkupNode::as_element)
            .expect("document element")
    }

    #[test]
    fn test_parse_nested_elements() {
        let doc = parse_markup("<p>Karl <lb/>Marx</p>").unwrap();
        let p = body(&doc);

        assert_eq!(p.name, "p");
        assert_eq!(p.children.len(), 3);
        assert_eq!(p.children[0], MarkupNode::text("Karl "));
        assert_eq!(p.children[1], MarkupNode::from(Element::new("lb")));
        assert_eq!(p.children[2], MarkupNode::text("Marx"));
    }

    #[test]
    fn test_parse_strips_namespace_prefixes() {
        let doc = parse_markup(
            r#"<tei:p xmlns:tei="http://www.tei-c.org/ns/1.0"><tei:lb tei:type="inWord"/></tei:p>"#,
        )
        .unwrap();
        let p = body(&doc);

        assert_eq!(p.name, "p");
        assert!(p.attributes.is_empty());
        let lb = p.children[0].as_element().unwrap();
        assert_eq!(lb.name, "lb");
        assert_eq!(lb.attr("type"), Some("inWord"));
    }

    #[test]
    fn test_entities_merge_into_text() {
        let doc = parse_markup("<p>Marx &amp; Engels &#x2014; &#8211; &nbsp;</p>").unwrap();
        let p = body(&doc);

        assert_eq!(p.children.len(), 1);
        assert_eq!(
            p.children[0],
            MarkupNode::text("Marx & Engels \u{2014} \u{2013} &nbsp;")
        );
    }

    #[test]
    fn test_attribute_values_are_unescaped() {
        let doc = parse_markup(r#"<quote rend="a&amp;b"/>"#).unwrap();
        assert_eq!(body(&doc).attr("rend"), Some("a&b"));
    }

    #[test]
    fn test_comments_and_processing_instructions_are_kept() {
        let doc = parse_markup("<?xml version=\"1.0\"?><p><!-- x --><?oxy y?>t</p>").unwrap();
        let p = body(&doc);

        assert!(matches!(p.children[0], MarkupNode::Comment { .. }));
        assert!(matches!(p.children[1], MarkupNode::ProcessingInstruction { .. }));
        assert_eq!(p.children[2], MarkupNode::text("t"));
    }

    #[test]
    fn test_cdata_is_text() {
        let doc = parse_markup("<p>a<![CDATA[<b>]]>c</p>").unwrap();
        assert_eq!(body(&doc).children, vec![MarkupNode::text("a<b>c")]);
    }

    #[test]
    fn test_mismatched_end_tags() {
        assert!(matches!(
            parse_markup("<p><q>x</p></q>"),
            Err(Error::UnbalancedTag(name)) if name == "p"
        ));
        assert!(matches!(
            parse_markup("</p>"),
            Err(Error::UnbalancedTag(name)) if name == "p"
        ));
        assert!(matches!(
            parse_markup("<p></P>"),
            Err(Error::UnbalancedTag(name)) if name == "P"
        ));
    }

    #[test]
    fn test_unclosed_elements() {
        assert!(matches!(
            parse_markup("<p><q>x"),
            Err(Error::UnclosedElements(names)) if names == ["p", "q"]
        ));
    }

    #[test]
    fn test_line_endings_become_newlines() {
        let doc = parse_markup("<p>Lieber\r\nFreund\ra\r\r\nb</p>").unwrap();
        assert_eq!(
            body(&doc).children,
            vec![MarkupNode::text("Lieber\nFreund\na\n\nb")]
        );

        let doc = parse_markup("<p><![CDATA[x\r\ny]]></p>").unwrap();
        assert_eq!(body(&doc).children, vec![MarkupNode::text("x\ny")]);
    }

    #[test]
    fn test_carriage_return_reference_survives() {
        let doc = parse_markup("<p>a&#13;b</p>").unwrap();
        assert_eq!(body(&doc).children, vec![MarkupNode::text("a\rb")]);
    }

    #[test]
    fn test_normalize_line_endings() {
        assert!(matches!(normalize_line_endings("a\nb"), Cow::Borrowed("a\nb")));
        assert_eq!(normalize_line_endings("a\r\nb\rc\r"), "a\nb\nc\n");
    }

    #[test]
    fn test_empty_input_fails() {
        assert!(matches!(parse_markup(""), Err(Error::EmptyDocument)));
    }

    #[test]
    fn test_parse_bytes_with_declared_encoding() {
        let mut bytes = b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?><p>".to_vec();
        bytes.push(0xFC); // ü
        bytes.extend_from_slice(b"ber</p>");

        let doc = parse_markup_bytes(&bytes).unwrap();
        assert_eq!(body(&doc).children, vec![MarkupNode::text("\u{fc}ber")]);
    }

    #[test]
    fn test_resolve_entity() {
        assert_eq!(resolve_entity("lt"), Some("<".to_string()));
        assert_eq!(resolve_entity("#65"), Some("A".to_string()));
        assert_eq!(resolve_entity("#x41"), Some("A".to_string()));
        assert_eq!(resolve_entity("nbsp"), None);
    }
}
