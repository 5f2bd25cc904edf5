//! html5ever front end.
//!
//! Parses with html5ever's `RcDom` sink and converts the result into the
//! arena. Scripting is disabled so `<noscript>` content is parsed as markup.

use std::io;

use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::{ParseOpts, QualName, parse_document};
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

use super::{Attribute, Document, ElementData, NodeData, NodeId};

/// Failure to turn markup text into a [`Document`].
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read markup: {0}")]
    Read(#[from] io::Error),

    #[error("parsed markup has no <body> element")]
    MissingBody,
}

pub(super) fn parse_body(markup: &str) -> Result<Document, ParseError> {
    let wrapped = format!("<body>{}</body>", markup);
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            scripting_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };

    let dom = parse_document(RcDom::default(), opts)
        .from_utf8()
        .read_from(&mut wrapped.as_bytes())?;

    let mut document = Document::empty();
    convert_node(&dom.document, &mut document, NodeId::ROOT);
    document.body = find_body(&document).ok_or(ParseError::MissingBody)?;

    tracing::trace!(nodes = document.len(), "parsed markup fragment");
    Ok(document)
}

fn convert_node(handle: &Handle, document: &mut Document, parent: NodeId) {
    match &handle.data {
        RcNodeData::Document => {
            for child in handle.children.borrow().iter() {
                convert_node(child, document, parent);
            }
        }
        RcNodeData::Doctype { name, .. } => {
            document.append(
                parent,
                NodeData::Doctype {
                    name: name.to_string(),
                },
            );
        }
        RcNodeData::Text { contents } => {
            document.append(parent, NodeData::Text(contents.borrow().to_string()));
        }
        RcNodeData::Comment { contents } => {
            document.append(parent, NodeData::Comment(contents.to_string()));
        }
        RcNodeData::Element {
            name,
            attrs,
            template_contents,
            ..
        } => {
            let mut element = ElementData::new(name.local.to_string());
            for attr in attrs.borrow().iter() {
                element.attrs.push(Attribute {
                    name: attribute_name(&attr.name),
                    value: attr.value.to_string(),
                });
            }

            let id = document.append(parent, NodeData::Element(element));
            for child in handle.children.borrow().iter() {
                convert_node(child, document, id);
            }
            // <template> keeps its content in a separate fragment
            if let Some(contents) = template_contents.borrow().as_ref() {
                for child in contents.children.borrow().iter() {
                    convert_node(child, document, id);
                }
            }
        }
        RcNodeData::ProcessingInstruction { target, contents } => {
            document.append(
                parent,
                NodeData::ProcessingInstruction {
                    target: target.to_string(),
                    data: contents.to_string(),
                },
            );
        }
    }
}

fn attribute_name(name: &QualName) -> String {
    match &name.prefix {
        Some(prefix) => format!("{}:{}", prefix, name.local),
        None => name.local.to_string(),
    }
}

fn find_body(document: &Document) -> Option<NodeId> {
    let html = document
        .children(NodeId::ROOT)
        .iter()
        .copied()
        .find(|&id| document.tag_name(id) == Some("html"))?;

    document
        .children(html)
        .iter()
        .copied()
        .find(|&id| document.tag_name(id) == Some("body"))
}
