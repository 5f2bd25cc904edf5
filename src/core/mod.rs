//! Extraction engine.
//!
//! - `dom`: arena document tree, html5ever parsing and serialization
//! - `classify`: block/inline knowledge and structural predicates
//! - `strategy`: key naming strategies
//! - `extract`: the extraction walker
//! - `render`: re-injection of values into annotated documents
//! - `migrate`: identifier renaming and strategy conversion
//! - `template`: markup-in, markup-out wrappers around the above

pub mod classify;
pub mod dom;
pub mod extract;
pub mod migrate;
pub mod options;
pub mod render;
pub mod store;
pub mod strategy;
pub mod template;

/// Attribute marking an element as an extracted unit; its value is the unit name.
pub const I18N_ATTRIBUTE: &str = "data-i18n";

pub use classify::{BlockDisposition, NodeKind};
pub use dom::{Document, NodeId, ParseError};
pub use extract::extract_document;
pub use migrate::{Rename, convert_document_strategy, rename_document_keys};
pub use options::{ExtractOptions, ParseOptions};
pub use render::render_document;
pub use store::{KeyStore, Suffix};
pub use strategy::{
    BuiltinStrategy, FnStrategy, KeyStrategy, PositionalStrategy, RandomStrategy, StrategyKind,
    UniqueStrategy,
};
pub use template::{Conversion, Extraction};
