//! Key naming strategies.
//!
//! A strategy maps a node to the key name of its translation unit. The walker
//! and the migrator only see the [`KeyStrategy`] trait.
//!
//! - [`PositionalStrategy`]: deterministic, derived from the node's position
//! - [`RandomStrategy`]: 10 random alphanumeric characters
//! - [`UniqueStrategy`]: wraps another strategy with an issued-name set
//! - [`FnStrategy`]: adapts a closure

use std::collections::HashSet;

use clap::ValueEnum;
use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};

use super::I18N_ATTRIBUTE;
use super::classify::ancestor_chain;
use super::dom::{Document, NodeId};

/// Length of names produced by [`RandomStrategy`].
pub const RANDOM_KEY_LENGTH: usize = 10;

/// Number of synthetic ancestors (`html`, `body`) wrapping every fragment.
const WRAPPER_DEPTH: usize = 2;

#[enum_dispatch]
pub trait KeyStrategy {
    /// Name for the unit rooted at `node`.
    fn key_name(&mut self, document: &Document, node: NodeId) -> String;
}

impl<S: KeyStrategy + ?Sized> KeyStrategy for &mut S {
    fn key_name(&mut self, document: &Document, node: NodeId) -> String {
        (**self).key_name(document, node)
    }
}

impl<S: KeyStrategy + ?Sized> KeyStrategy for Box<S> {
    fn key_name(&mut self, document: &Document, node: NodeId) -> String {
        (**self).key_name(document, node)
    }
}

/// Names a node after its ancestry: `<tag><index>` per ancestor below the
/// fragment wrapper, joined with `_` (e.g. `dl0_dd3`).
///
/// The index counts all child nodes of the parent, text included, so the
/// same structure always yields the same name.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalStrategy;

impl KeyStrategy for PositionalStrategy {
    fn key_name(&mut self, document: &Document, node: NodeId) -> String {
        ancestor_chain(document, node)
            .into_iter()
            .skip(WRAPPER_DEPTH)
            .map(|ancestor| {
                let tag = document.tag_name(ancestor).unwrap_or_default();
                let index = document
                    .index_in_parent(ancestor)
                    .map_or_else(|| "-1".to_string(), |index| index.to_string());
                format!("{}{}", tag, index)
            })
            .collect::<Vec<_>>()
            .join("_")
            .to_lowercase()
    }
}

/// Opaque names of [`RANDOM_KEY_LENGTH`] alphanumeric characters.
///
/// Names are not checked for uniqueness; wrap in [`UniqueStrategy`] when
/// collisions matter.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: fastrand::Rng,
}

impl RandomStrategy {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Reproducible sequence of names.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyStrategy for RandomStrategy {
    fn key_name(&mut self, _document: &Document, _node: NodeId) -> String {
        std::iter::repeat_with(|| self.rng.alphanumeric())
            .take(RANDOM_KEY_LENGTH)
            .collect()
    }
}

/// Adapts a closure into a strategy.
pub struct FnStrategy<F>(pub F);

impl<F> KeyStrategy for FnStrategy<F>
where
    F: FnMut(&Document, NodeId) -> String,
{
    fn key_name(&mut self, document: &Document, node: NodeId) -> String {
        (self.0)(document, node)
    }
}

/// Guarantees unique names by tracking every name it has issued.
///
/// A colliding name is retried with the inner strategy up to
/// `max_attempts` times, then disambiguated with a `-<n>` suffix.
#[derive(Debug, Clone)]
pub struct UniqueStrategy<S> {
    inner: S,
    issued: HashSet<String>,
    max_attempts: usize,
}

impl<S: KeyStrategy> UniqueStrategy<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            issued: HashSet::new(),
            max_attempts: 8,
        }
    }

    /// Treat every identifier already present in `document` as issued.
    pub fn seeded_from(inner: S, document: &Document) -> Self {
        let mut strategy = Self::new(inner);
        strategy.issued.extend(
            document
                .elements()
                .filter_map(|id| document.attr(id, I18N_ATTRIBUTE))
                .map(str::to_string),
        );
        strategy
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Mark a name as taken.
    pub fn reserve(&mut self, name: impl Into<String>) -> bool {
        self.issued.insert(name.into())
    }

    pub fn issued(&self) -> &HashSet<String> {
        &self.issued
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: KeyStrategy> KeyStrategy for UniqueStrategy<S> {
    fn key_name(&mut self, document: &Document, node: NodeId) -> String {
        let mut candidate = self.inner.key_name(document, node);
        for _ in 0..self.max_attempts {
            if !self.issued.contains(&candidate) {
                break;
            }
            candidate = self.inner.key_name(document, node);
        }

        let mut name = candidate.clone();
        let mut counter = 1;
        while self.issued.contains(&name) {
            name = format!("{}-{}", candidate, counter);
            counter += 1;
        }

        if name != candidate {
            tracing::debug!(%candidate, %name, "disambiguated colliding key name");
        }
        self.issued.insert(name.clone());
        name
    }
}

/// Strategies selectable by name.
#[enum_dispatch(KeyStrategy)]
#[derive(Debug, Clone)]
pub enum BuiltinStrategy {
    Positional(PositionalStrategy),
    Random(RandomStrategy),
}

/// Name of a built-in strategy, as used in config files and on the command line.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Positional,
    #[default]
    Random,
}

impl StrategyKind {
    pub fn build(self) -> BuiltinStrategy {
        match self {
            StrategyKind::Positional => PositionalStrategy.into(),
            StrategyKind::Random => RandomStrategy::new().into(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Positional => "positional",
            StrategyKind::Random => "random",
        }
    }
}
