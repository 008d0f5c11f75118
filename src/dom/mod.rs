//! Editorial markup tree.
//!
//! The tree is a plain owned value: a document root holding elements, text,
//! processing instructions and comments. Renderers only ever borrow it.
//!
//! Trees normally come from [`parse_markup`], but can be assembled by hand:
//!
//! ```
//! use glosa::dom::{Element, MarkupNode};
//!
//! let name = Element::new("forename")
//!     .with_attr("cert", "low")
//!     .with_text("Karl");
//! let doc = MarkupNode::document(vec![name.into()]);
//! assert_eq!(doc.children().len(), 1);
//! ```

mod kind_map;
mod parser;

use std::collections::BTreeMap;

pub use kind_map::{ElementKind, element_kind};
pub use parser::{local_name, parse_markup, parse_markup_bytes};

/// A node of the markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum MarkupNode {
    /// Document root.
    Document { children: Vec<MarkupNode> },
    /// Element with local name, attributes and ordered children.
    Element(Element),
    /// Character data.
    Text { content: String },
    /// Processing instruction (kept so the tree is faithful, never rendered).
    ProcessingInstruction { content: String },
    /// Comment (never rendered).
    Comment { content: String },
}

impl MarkupNode {
    /// Create a document root.
    pub fn document(children: Vec<MarkupNode>) -> Self {
        MarkupNode::Document { children }
    }

    /// Create a text node.
    pub fn text(content: impl Into<String>) -> Self {
        MarkupNode::Text {
            content: content.into(),
        }
    }

    /// Create a comment node.
    pub fn comment(content: impl Into<String>) -> Self {
        MarkupNode::Comment {
            content: content.into(),
        }
    }

    /// Create a processing instruction node.
    pub fn processing_instruction(content: impl Into<String>) -> Self {
        MarkupNode::ProcessingInstruction {
            content: content.into(),
        }
    }

    /// Children of a document or element; empty for leaf nodes.
    pub fn children(&self) -> &[MarkupNode] {
        match self {
            MarkupNode::Document { children } => children,
            MarkupNode::Element(element) => &element.children,
            _ => &[],
        }
    }

    /// The element, if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            MarkupNode::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Count all nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(MarkupNode::node_count).sum::<usize>()
    }
}

impl From<Element> for MarkupNode {
    fn from(element: Element) -> Self {
        MarkupNode::Element(element)
    }
}

/// An element node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    /// Local name, without namespace prefix.
    pub name: String,
    /// Attributes keyed by local name.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "BTreeMap::is_empty")
    )]
    pub attributes: BTreeMap<String, String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub children: Vec<MarkupNode>,
}

impl Element {
    /// Create an element with no attributes or children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add an attribute.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Append a child node.
    pub fn with_child(mut self, child: impl Into<MarkupNode>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a text child.
    pub fn with_text(self, content: impl Into<String>) -> Self {
        self.with_child(MarkupNode::text(content))
    }

    /// Look up an attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Whether the attribute is present, whatever its value.
    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// The element's kind in the closed set the renderer understands.
    pub fn kind(&self) -> ElementKind {
        element_kind(&self.name)
    }
}
