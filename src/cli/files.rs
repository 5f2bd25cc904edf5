//! On-disk formats: markup files, key files and rename maps.
//!
//! Key files and rename maps are flat JSON objects of strings, written with
//! 2-space indentation and a trailing newline.

use std::{
    collections::HashMap,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::file_scanner::TEMPLATE_SUFFIX;
use crate::core::KeyStore;

const KEYS_SUFFIX: &str = ".keys.json";

/// Suffix of files written before being moved over their target.
const STAGED_SUFFIX: &str = ".htmlkeys-tmp";

/// Where `extract` writes the results for one input file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OutputPaths {
    pub template: PathBuf,
    pub keys: PathBuf,
}

impl OutputPaths {
    /// `page.html` maps to `page.template.html` and `page.keys.json`.
    /// A `page.template.html` input is its own template.
    pub fn for_input(input: &Path) -> Self {
        let file_name = input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = file_name
            .strip_suffix(TEMPLATE_SUFFIX)
            .or_else(|| file_name.strip_suffix(".html"))
            .or_else(|| file_name.strip_suffix(".htm"))
            .unwrap_or(&file_name);

        Self {
            template: input.with_file_name(format!("{}{}", stem, TEMPLATE_SUFFIX)),
            keys: input.with_file_name(format!("{}{}", stem, KEYS_SUFFIX)),
        }
    }
}

pub fn read_markup(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

pub fn read_keys(path: &Path) -> Result<KeyStore> {
    let content = read_markup(path)?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse key file: {}", path.display()))
}

pub fn read_rename_map(path: &Path) -> Result<HashMap<String, String>> {
    let content = read_markup(path)?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse rename map: {}", path.display()))
}

/// Write markup to `path`, or to stdout when no path is given.
pub fn write_markup(path: Option<&Path>, markup: &str) -> Result<()> {
    let content = markup_content(markup);

    match path {
        Some(path) => write_file(path, &content),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .context("Failed to write to stdout")?;
            stdout.flush().context("Failed to write to stdout")
        }
    }
}

/// Write a template and its key file as a pair.
///
/// Both contents are staged next to their targets and only moved into place
/// once both were written, so a failed write leaves the previous pair intact.
pub fn write_template_and_keys(
    template: &Path,
    markup: &str,
    keys_path: &Path,
    keys: &KeyStore,
) -> Result<()> {
    let staged_keys = stage_file(keys_path, &keys_content(keys)?)?;
    let staged_template = match stage_file(template, &markup_content(markup)) {
        Ok(staged) => staged,
        Err(err) => {
            let _ = fs::remove_file(&staged_keys);
            return Err(err);
        }
    };

    commit_file(&staged_keys, keys_path)?;
    commit_file(&staged_template, template)
}

fn keys_content(keys: &KeyStore) -> Result<String> {
    let content = serde_json::to_string_pretty(keys).context("Failed to serialize JSON")?;
    Ok(format!("{}\n", content))
}

fn markup_content(markup: &str) -> String {
    let mut content = markup.to_string();
    if !content.ends_with('\n') {
        content.push('\n');
    }
    content
}

fn staged_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(STAGED_SUFFIX);
    path.with_file_name(name)
}

fn stage_file(path: &Path, content: &str) -> Result<PathBuf> {
    let staged = staged_path(path);
    write_file(&staged, content)?;
    Ok(staged)
}

fn commit_file(staged: &Path, path: &Path) -> Result<()> {
    fs::rename(staged, path).with_context(|| format!("Failed to write file: {}", path.display()))
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
}
