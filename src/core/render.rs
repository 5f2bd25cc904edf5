//! Re-injects values into an annotated document.
//!
//! Every annotated element is handled in two steps: the kind's target
//! attribute (`src` for media, `href` for anchors) is set when the store has
//! a value for it, then the inner markup of anchors and generic blocks is
//! replaced by the `_html` value, or emptied when there is none.

use super::I18N_ATTRIBUTE;
use super::classify::NodeKind;
use super::dom::{Document, NodeId, ParseError};
use super::store::{KeyStore, Suffix};

/// Render `keys` into every annotated element of `document`.
///
/// Elements are collected before any change is made. An element detached
/// by the replacement of an ancestor's content is skipped.
pub fn render_document(document: &mut Document, keys: &KeyStore) -> Result<(), ParseError> {
    let annotated: Vec<(NodeId, String)> = document
        .elements()
        .filter_map(|id| {
            document
                .attr(id, I18N_ATTRIBUTE)
                .map(|unit| (id, unit.to_string()))
        })
        .collect();

    let mut rendered = 0;
    for (id, unit) in annotated {
        if !document.is_attached(id) {
            tracing::debug!(%unit, "skipping unit replaced by an ancestor");
            continue;
        }
        let Some(kind) = NodeKind::of(document, id) else {
            continue;
        };

        if let Some((attribute, suffix)) = kind.target_attribute()
            && let Some(value) = keys.get_entry(&unit, suffix)
        {
            document.set_attr(id, attribute, value);
        }

        if kind.has_content() {
            let html = keys.get_entry(&unit, Suffix::Html).unwrap_or_default();
            document.set_inner_html(id, html)?;
        }
        rendered += 1;
    }

    tracing::debug!(units = rendered, "rendered document");
    Ok(())
}
