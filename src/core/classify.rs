//! Element classification.
//!
//! Static knowledge about tag names plus the structural predicates the
//! extraction walker decides on.

use super::dom::{Document, NodeId};
use super::store::Suffix;

/// Block-level elements.
///
/// https://developer.mozilla.org/en-US/docs/Web/HTML/Block-level_elements
pub const BLOCK_ELEMENTS: &[&str] = &[
    "address",
    "article",
    "aside",
    "canvas",
    "blockquote",
    "dd",
    "div",
    "dl",
    "dt",
    "fieldset",
    "figcaption",
    "figure",
    "footer",
    "form",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hgroup",
    "hr",
    "li",
    "main",
    "nav",
    "noscript",
    "ol",
    "output",
    "p",
    "pre",
    "section",
    "table",
    "tfoot",
    "ul",
    "video",
];

/// Inline-level elements.
///
/// https://developer.mozilla.org/en-US/docs/Web/HTML/Inline_elements
pub const INLINE_ELEMENTS: &[&str] = &[
    "a", "abbr", "acronym", "b", "bdo", "big", "br", "button", "cite", "code", "dfn", "em", "i",
    "img", "input", "kbd", "label", "map", "object", "q", "samp", "script", "select", "small",
    "span", "strong", "sub", "sup", "textarea", "time", "tt", "var",
];

pub fn is_block_element(tag: &str) -> bool {
    BLOCK_ELEMENTS.contains(&tag.to_ascii_lowercase().as_str())
}

pub fn is_inline_element(tag: &str) -> bool {
    INLINE_ELEMENTS.contains(&tag.to_ascii_lowercase().as_str())
}

/// Kind of a translation unit, resolved once from the tag name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Anchor,
    Image,
    Iframe,
    Generic,
}

impl NodeKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "a" => NodeKind::Anchor,
            "img" => NodeKind::Image,
            "iframe" => NodeKind::Iframe,
            _ => NodeKind::Generic,
        }
    }

    /// Kind of an element node; `None` for any other node.
    pub fn of(document: &Document, id: NodeId) -> Option<Self> {
        document.tag_name(id).map(Self::from_tag)
    }

    /// Suffixes a unit of this kind owns, in migration order.
    pub fn suffixes(self) -> &'static [Suffix] {
        match self {
            NodeKind::Image | NodeKind::Iframe => &[Suffix::Src],
            NodeKind::Anchor => &[Suffix::Href, Suffix::Html],
            NodeKind::Generic => &[Suffix::Html],
        }
    }

    /// The attribute carrying a unit's link or media target, if any.
    pub fn target_attribute(self) -> Option<(&'static str, Suffix)> {
        match self {
            NodeKind::Image | NodeKind::Iframe => Some(("src", Suffix::Src)),
            NodeKind::Anchor => Some(("href", Suffix::Href)),
            NodeKind::Generic => None,
        }
    }

    /// Whether the unit's inner markup is a translatable value.
    pub fn has_content(self) -> bool {
        matches!(self, NodeKind::Anchor | NodeKind::Generic)
    }
}

/// True when the node has no text, or only whitespace.
pub fn is_node_empty(document: &Document, id: NodeId) -> bool {
    document.text_content(id).trim().is_empty()
}

/// True when every element descendant is inline-level.
pub fn is_all_children_inline(document: &Document, id: NodeId) -> bool {
    document
        .descendants(id)
        .filter_map(|child| document.tag_name(child))
        .all(is_inline_element)
}

/// True when the node has no previous and no next sibling of any type.
pub fn is_only_sibling(document: &Document, id: NodeId) -> bool {
    document.previous_sibling(id).is_none() && document.next_sibling(id).is_none()
}

/// Element ancestors from the outermost down to the node itself.
pub fn ancestor_chain(document: &Document, id: NodeId) -> Vec<NodeId> {
    let mut chain = Vec::new();
    let mut current = Some(id);
    while let Some(node) = current {
        if document.element(node).is_none() {
            break;
        }
        chain.push(node);
        current = document.parent(node);
    }
    chain.reverse();
    chain
}

/// The only child of a node, if it has exactly one.
pub fn sole_child(document: &Document, id: NodeId) -> Option<NodeId> {
    match document.children(id) {
        [child] => Some(*child),
        _ => None,
    }
}

/// What the block pass does with a block-level element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockDisposition {
    /// No text content; skipped.
    Empty,
    /// The sole child is an anchor, image or iframe already claimed as a unit.
    DelegatedToChild,
    /// Becomes a unit holding its inner markup.
    Unit,
    /// Contains block-level descendants. Nested blocks are visited on their
    /// own; loose inline content at this level is not captured.
    MixedContainer,
}

pub fn classify_block(
    document: &Document,
    id: NodeId,
    is_claimed: impl Fn(NodeId) -> bool,
) -> BlockDisposition {
    if is_node_empty(document, id) {
        return BlockDisposition::Empty;
    }
    if !is_all_children_inline(document, id) {
        return BlockDisposition::MixedContainer;
    }

    let delegated = sole_child(document, id).is_some_and(|child| {
        NodeKind::of(document, child).is_some_and(|kind| kind != NodeKind::Generic)
            && is_claimed(child)
    });
    if delegated {
        BlockDisposition::DelegatedToChild
    } else {
        BlockDisposition::Unit
    }
}
