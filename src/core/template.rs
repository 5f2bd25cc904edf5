//! Markup-in, markup-out entry points.
//!
//! Each function parses its input as a body fragment, runs one document
//! operation and serializes the body back. Extraction and conversion results
//! are trimmed; render and rename results are returned as serialized.

use std::collections::HashMap;

use super::dom::{Document, ParseError};
use super::extract::extract_document;
use super::migrate::{Rename, convert_document_strategy, rename_document_keys};
use super::options::ExtractOptions;
use super::render::render_document;
use super::store::KeyStore;
use super::strategy::KeyStrategy;

/// Annotated markup together with its extracted values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub keys: KeyStore,
    pub template: String,
}

/// Result of [`convert_strategy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub keys: KeyStore,
    pub template: String,
    pub renames: Vec<Rename>,
}

pub fn extract<S>(
    markup: &str,
    strategy: &mut S,
    options: &ExtractOptions,
) -> Result<Extraction, ParseError>
where
    S: KeyStrategy + ?Sized,
{
    let mut document = Document::parse(markup)?;
    let keys = extract_document(&mut document, strategy, options);

    Ok(Extraction {
        keys,
        template: document.to_html().trim().to_string(),
    })
}

pub fn render(template: &str, keys: &KeyStore) -> Result<String, ParseError> {
    let mut document = Document::parse(template)?;
    render_document(&mut document, keys)?;
    Ok(document.to_html())
}

pub fn rename_keys(template: &str, renames: &HashMap<String, String>) -> Result<String, ParseError> {
    let mut document = Document::parse(template)?;
    rename_document_keys(&mut document, renames);
    Ok(document.to_html())
}

pub fn convert_strategy<S>(
    mut keys: KeyStore,
    template: &str,
    strategy: &mut S,
    options: &ExtractOptions,
) -> Result<Conversion, ParseError>
where
    S: KeyStrategy + ?Sized,
{
    let mut document = Document::parse(template)?;
    let renames = convert_document_strategy(&mut document, &mut keys, strategy, options);

    Ok(Conversion {
        keys,
        template: document.to_html().trim().to_string(),
        renames,
    })
}
