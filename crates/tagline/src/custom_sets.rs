//! Derived tag sets computed from record properties.
//!
//! Custom sets are evaluated in declaration order against each record. A set
//! may name another custom set as a source, which works whenever that set was
//! declared earlier; there is no dependency graph.

use hashbrown::HashMap;
use serde_json::Value;

use crate::limit::positive;
use crate::matcher::TagFilter;
use crate::settings::CustomSetSpec;
use crate::words::{Splitting, WordCollection, is_truthy};

/// Tag lists produced by the custom sets for one record, keyed by set name.
pub type ResolvedSets = HashMap<String, Vec<String>>;

/// A custom set compiled from its [`CustomSetSpec`].
#[derive(Debug, Clone)]
pub struct CustomSet {
    name: String,
    sources: Vec<String>,
    filter: TagFilter,
    limit: Option<usize>,
    splitting: Splitting,
}

impl CustomSet {
    /// Compile a set definition, applying its split overrides on top of `global`.
    #[must_use]
    pub fn compile(name: &str, spec: &CustomSetSpec, global: &Splitting) -> Self {
        let splitting = global.with_override(spec.split, spec.splitter.as_deref());
        let only = spec.only.to_words(&splitting);
        let ignore = spec.ignore.to_words(&splitting);
        if !only.is_empty() && !ignore.is_empty() {
            log::debug!("custom set `{name}` declares both only and ignore; only takes precedence");
        }
        Self {
            name: name.to_string(),
            sources: spec.sources.to_words(&splitting),
            filter: TagFilter::exclusive(&only, &ignore),
            limit: positive(spec.tags_limit),
            splitting,
        }
    }

    /// Name the set is stored and selected under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source names in the order they are read.
    #[must_use]
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Compute the set's tags for one record.
    ///
    /// Each source reads the record first; a missing or falsy record value
    /// falls back to an already resolved custom set of the same name.
    #[must_use]
    pub fn evaluate(&self, record: &Value, resolved: &ResolvedSets) -> Vec<String> {
        let tags = self
            .sources
            .iter()
            .flat_map(|source| self.source_tags(record, resolved, source))
            .filter(|tag| self.filter.allows(tag));
        match self.limit {
            Some(limit) => tags.take(limit).collect(),
            None => tags.collect(),
        }
    }

    fn source_tags(&self, record: &Value, resolved: &ResolvedSets, source: &str) -> Vec<String> {
        if let Some(collection) = record
            .get(source)
            .filter(|value| is_truthy(value))
            .and_then(WordCollection::from_value)
        {
            return collection.to_words(&self.splitting);
        }
        resolved
            .get(source)
            .map(|tags| WordCollection::List(tags.clone()).to_words(&self.splitting))
            .unwrap_or_default()
    }
}

/// Evaluate every custom set for one record, in declaration order.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use tagline::{CustomSet, CustomSetSpec, Splitting, resolve_custom_sets};
///
/// let global = Splitting::default();
/// let sets = [
///     CustomSet::compile("first", &CustomSetSpec::new("tags").with_tags_limit(2), &global),
///     CustomSet::compile("tail", &CustomSetSpec::new("first").with_ignore("a"), &global),
/// ];
/// let resolved = resolve_custom_sets(&json!({"tags": "a b c"}), &sets);
/// assert_eq!(resolved["first"], ["a", "b"]);
/// assert_eq!(resolved["tail"], ["b"]);
/// ```
#[must_use]
pub fn resolve_custom_sets(record: &Value, sets: &[CustomSet]) -> ResolvedSets {
    let mut resolved = ResolvedSets::with_capacity(sets.len());
    for set in sets {
        let tags = set.evaluate(record, &resolved);
        resolved.insert(set.name.clone(), tags);
    }
    resolved
}
