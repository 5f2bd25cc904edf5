//! Extraction walker.
//!
//! Decides which nodes of a document are translation units, annotates them
//! with the identifier attribute and collects their payload into a
//! [`KeyStore`]. Passes run in a fixed order:
//!
//! 1. anchors with an `href` that are the only child of their parent
//! 2. images with a `src` that are the only child of their parent
//! 3. iframes with a `src`, wherever they are
//! 4. block-level elements, see [`classify_block`]
//!
//! A node claimed by an earlier pass is never claimed again.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::I18N_ATTRIBUTE;
use super::classify::{BlockDisposition, NodeKind, classify_block, is_block_element, is_only_sibling};
use super::dom::{Document, NodeId};
use super::options::ExtractOptions;
use super::store::{KeyStore, Suffix};
use super::strategy::KeyStrategy;


static ABSOLUTE_URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://").unwrap());

/// True for `http://` and `https://` URLs, in any letter case.
pub fn is_absolute_url(url: &str) -> bool {
    ABSOLUTE_URL_REGEX.is_match(url)
}

/// Extract every translation unit of `document` in place.
///
/// Units that already carry an identifier keep it; the others get a name
/// from `strategy`. Returns the collected values keyed by composite key.
pub fn extract_document<S>(
    document: &mut Document,
    strategy: &mut S,
    options: &ExtractOptions,
) -> KeyStore
where
    S: KeyStrategy + ?Sized,
{
    let mut walker = Walker {
        document,
        strategy,
        keys: KeyStore::new(),
        claimed: HashSet::new(),
    };

    walker.anchors();
    if options.parse.images {
        walker.images();
    }
    walker.iframes();
    walker.blocks();

    tracing::debug!(
        units = walker.claimed.len(),
        keys = walker.keys.len(),
        "extracted document"
    );
    walker.keys
}

struct Walker<'a, S: ?Sized> {
    document: &'a mut Document,
    strategy: &'a mut S,
    keys: KeyStore,
    claimed: HashSet<NodeId>,
}

impl<S: KeyStrategy + ?Sized> Walker<'_, S> {
    fn anchors(&mut self) {
        for id in self.elements_of(NodeKind::Anchor, "href") {
            if !is_only_sibling(self.document, id) {
                continue;
            }

            let unit = self.claim(id);
            let html = self.document.inner_html(id);
            self.record(&unit, Suffix::Html, html);

            if let Some(href) = self.document.attr(id, "href")
                && is_absolute_url(href)
            {
                let href = href.to_string();
                self.record(&unit, Suffix::Href, href);
            }
        }
    }

    fn images(&mut self) {
        for id in self.elements_of(NodeKind::Image, "src") {
            if !is_only_sibling(self.document, id) {
                continue;
            }
            self.media(id);
        }
    }

    fn iframes(&mut self) {
        for id in self.elements_of(NodeKind::Iframe, "src") {
            self.media(id);
        }
    }

    fn blocks(&mut self) {
        let blocks: Vec<NodeId> = self
            .document
            .elements()
            .filter(|&id| self.document.tag_name(id).is_some_and(is_block_element))
            .collect();

        for id in blocks {
            let disposition = classify_block(self.document, id, |child| {
                self.claimed.contains(&child)
            });
            tracing::trace!(node = ?id, ?disposition, "classified block");

            if disposition == BlockDisposition::Unit {
                let unit = self.claim(id);
                let html = self.document.inner_html(id);
                self.record(&unit, Suffix::Html, html);
            }
        }
    }

    fn media(&mut self, id: NodeId) {
        let unit = self.claim(id);
        let src = self.document.attr(id, "src").unwrap_or_default().to_string();
        self.record(&unit, Suffix::Src, src);
    }

    /// Elements of one kind carrying `attribute`, in document order.
    fn elements_of(&self, kind: NodeKind, attribute: &str) -> Vec<NodeId> {
        self.document
            .elements()
            .filter(|&id| {
                NodeKind::of(self.document, id) == Some(kind)
                    && self.document.has_attr(id, attribute)
            })
            .collect()
    }

    /// Reuse the node's identifier, or name it with the strategy.
    fn claim(&mut self, id: NodeId) -> String {
        self.claimed.insert(id);

        if let Some(existing) = self.document.attr(id, I18N_ATTRIBUTE) {
            return existing.to_string();
        }

        let unit = self.strategy.key_name(self.document, id);
        self.document.set_attr(id, I18N_ATTRIBUTE, unit.as_str());
        tracing::trace!(node = ?id, %unit, "assigned identifier");
        unit
    }

    fn record(&mut self, unit: &str, suffix: Suffix, value: String) {
        let key = suffix.key(unit);
        if self.keys.insert(key.as_str(), value).is_some() {
            tracing::warn!(%key, "duplicate key, earlier value overwritten");
        }
    }
}
