//! HTML fragment serialization (innerHTML).
//!
//! Follows the HTML fragment serialization algorithm closely enough that
//! parse → serialize is stable for the markup this crate produces.

use super::{Document, NodeData, NodeId};

/// Void elements (no end tag, no children)
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "basefont", "bgsound", "br", "col", "embed", "frame", "hr", "img", "input",
    "keygen", "link", "meta", "param", "source", "track", "wbr",
];

/// Elements whose text children are written without escaping
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "style",
    "script",
    "xmp",
    "iframe",
    "noembed",
    "noframes",
    "plaintext",
];

/// Elements whose leading newline is dropped by the parser
const NEWLINE_ELEMENTS: &[&str] = &["pre", "textarea", "listing"];

pub(super) fn inner_html(document: &Document, id: NodeId) -> String {
    let mut output = String::new();
    serialize_children(document, id, &mut output);
    output
}

fn serialize_children(document: &Document, parent: NodeId, output: &mut String) {
    let raw = document
        .tag_name(parent)
        .is_some_and(|tag| RAW_TEXT_ELEMENTS.contains(&tag));

    for &child in document.children(parent) {
        serialize_node(document, child, raw, output);
    }
}

fn serialize_node(document: &Document, id: NodeId, raw_text: bool, output: &mut String) {
    let Some(node) = document.get(id) else {
        return;
    };

    match &node.data {
        NodeData::Document => serialize_children(document, id, output),
        NodeData::Element(element) => {
            let tag = element.name.as_str();

            output.push('<');
            output.push_str(tag);
            for attr in &element.attrs {
                output.push(' ');
                output.push_str(&attr.name);
                output.push_str("=\"");
                escape_attribute(&attr.value, output);
                output.push('"');
            }
            output.push('>');

            if VOID_ELEMENTS.contains(&tag) {
                return;
            }

            if NEWLINE_ELEMENTS.contains(&tag)
                && let Some(&first) = node.children.first()
                && document
                    .get(first)
                    .and_then(|child| child.as_text())
                    .is_some_and(|text| text.starts_with('\n'))
            {
                output.push('\n');
            }

            serialize_children(document, id, output);

            output.push_str("</");
            output.push_str(tag);
            output.push('>');
        }
        NodeData::Text(text) => {
            if raw_text {
                output.push_str(text);
            } else {
                escape_text(text, output);
            }
        }
        NodeData::Comment(text) => {
            output.push_str("<!--");
            output.push_str(text);
            output.push_str("-->");
        }
        NodeData::Doctype { name } => {
            output.push_str("<!DOCTYPE ");
            output.push_str(name);
            output.push('>');
        }
        NodeData::ProcessingInstruction { target, data } => {
            output.push_str("<?");
            output.push_str(target);
            output.push(' ');
            output.push_str(data);
            output.push('>');
        }
    }
}

fn escape_text(text: &str, output: &mut String) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '\u{a0}' => output.push_str("&nbsp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(c),
        }
    }
}

fn escape_attribute(text: &str, output: &mut String) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '\u{a0}' => output.push_str("&nbsp;"),
            '"' => output.push_str("&quot;"),
            _ => output.push(c),
        }
    }
}
