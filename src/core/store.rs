//! Flat key/value store of extracted values.
//!
//! Composite keys have the shape `<unit>_<suffix>`; see [`Suffix`].

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Which payload of a unit a key holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suffix {
    /// Inner markup.
    Html,
    /// Media source (`img`, `iframe`).
    Src,
    /// Absolute link target (`a`).
    Href,
}

impl Suffix {
    pub fn as_str(&self) -> &'static str {
        match self {
            Suffix::Html => "html",
            Suffix::Src => "src",
            Suffix::Href => "href",
        }
    }

    /// Composite key for a unit, e.g. `p0_html`.
    pub fn key(self, unit: &str) -> String {
        format!("{}_{}", unit, self.as_str())
    }
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map from composite key to extracted value, ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyStore(BTreeMap<String, String>);

impl KeyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Insert a raw composite key, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    pub fn get_entry(&self, unit: &str, suffix: Suffix) -> Option<&str> {
        self.get(&suffix.key(unit))
    }

    pub fn insert_entry(
        &mut self,
        unit: &str,
        suffix: Suffix,
        value: impl Into<String>,
    ) -> Option<String> {
        self.insert(suffix.key(unit), value)
    }

    pub fn remove_entry(&mut self, unit: &str, suffix: Suffix) -> Option<String> {
        self.remove(&suffix.key(unit))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.0.values().map(String::as_str)
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }
}

impl From<BTreeMap<String, String>> for KeyStore {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for KeyStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
