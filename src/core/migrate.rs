//! Identifier migration.
//!
//! - [`rename_document_keys`]: rewrite identifiers through an explicit map
//! - [`convert_document_strategy`]: re-derive every identifier with another
//!   strategy and move the stored values along

use std::collections::HashMap;

use super::I18N_ATTRIBUTE;
use super::classify::NodeKind;
use super::dom::{Document, NodeId};
use super::options::ExtractOptions;
use super::store::{KeyStore, Suffix};
use super::strategy::KeyStrategy;

/// Identifier change made by a conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    pub old: String,
    pub new: String,
}

/// Replace every identifier found in `renames`. Empty targets are ignored.
///
/// Returns the number of identifiers rewritten.
pub fn rename_document_keys(document: &mut Document, renames: &HashMap<String, String>) -> usize {
    let targets: Vec<(NodeId, String)> = document
        .elements()
        .filter_map(|id| {
            let current = document.attr(id, I18N_ATTRIBUTE)?;
            renames
                .get(current)
                .filter(|new| !new.is_empty())
                .map(|new| (id, new.clone()))
        })
        .collect();

    for (id, new) in &targets {
        document.set_attr(*id, I18N_ATTRIBUTE, new.as_str());
    }

    tracing::debug!(renamed = targets.len(), "renamed identifiers");
    targets.len()
}

/// Re-derive every identifier of `document` with `strategy`.
///
/// Identifiers are visited in document order. With
/// [`ExtractOptions::prefix_sequence`] each new name is prefixed with a
/// running number, zero-padded to the digit count of the number of units,
/// starting at [`ExtractOptions::prefix_sequence_start`].
///
/// Values present under the old name move to the new one; the entry count
/// and the values themselves are preserved.
pub fn convert_document_strategy<S>(
    document: &mut Document,
    keys: &mut KeyStore,
    strategy: &mut S,
    options: &ExtractOptions,
) -> Vec<Rename>
where
    S: KeyStrategy + ?Sized,
{
    let units: Vec<(NodeId, String)> = document
        .elements()
        .filter_map(|id| {
            document
                .attr(id, I18N_ATTRIBUTE)
                .map(|unit| (id, unit.to_string()))
        })
        .collect();

    let width = units.len().to_string().len();
    let mut sequence = options.prefix_sequence_start;

    let mut renames = Vec::with_capacity(units.len());
    let mut staged: Vec<(String, Suffix, String)> = Vec::new();

    for (id, old) in units {
        let mut new = strategy.key_name(document, id);
        if options.prefix_sequence {
            new = format!("{:0width$}-{}", sequence, new, width = width);
        }
        document.set_attr(id, I18N_ATTRIBUTE, new.as_str());

        let suffixes = NodeKind::of(document, id)
            .map(NodeKind::suffixes)
            .unwrap_or_default();
        for &suffix in suffixes {
            if let Some(value) = keys.remove_entry(&old, suffix) {
                staged.push((new.clone(), suffix, value));
            }
        }

        renames.push(Rename { old, new });
        sequence += 1;
    }

    for (unit, suffix, value) in staged {
        if keys.insert_entry(&unit, suffix, value).is_some() {
            tracing::warn!(key = %suffix.key(&unit), "duplicate key after conversion");
        }
    }

    tracing::debug!(units = renames.len(), "converted identifiers");
    renames
}
