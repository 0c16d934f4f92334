//! Word collection normalization.
//!
//! Tag sources arrive either as one delimited string (`"1girl red_hair"`), as a
//! list of tags, or as a list mixing both. Everything downstream works on a
//! flat list of non-empty words, so every consumer funnels its input through
//! [`normalize`] with the splitting rules that apply to it.

use serde::Deserialize;
use serde_json::Value;

/// Default delimiter used for both splitting and joining.
pub const DEFAULT_SEPARATOR: &str = " ";

/// Splitting rules applied while normalizing a [`WordCollection`].
///
/// # Examples
///
/// ```
/// use tagline::Splitting;
///
/// let global = Splitting::default();
/// let local = global.with_override(Some(false), None);
/// assert!(global.enabled);
/// assert!(!local.enabled);
/// assert_eq!(local.delimiter, " ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splitting {
    /// Whether string values are broken into several words.
    pub enabled: bool,
    /// Delimiter used when splitting is enabled.
    pub delimiter: String,
}

impl Default for Splitting {
    fn default() -> Self {
        Self {
            enabled: true,
            delimiter: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl Splitting {
    /// Create splitting rules; an empty delimiter falls back to a space.
    #[must_use]
    pub fn new(enabled: bool, delimiter: &str) -> Self {
        Self {
            enabled,
            delimiter: non_empty_or_default(delimiter),
        }
    }

    /// Derive the rules for one consumer, taking its overrides where given.
    #[must_use]
    pub fn with_override(&self, enabled: Option<bool>, delimiter: Option<&str>) -> Self {
        Self {
            enabled: enabled.unwrap_or(self.enabled),
            delimiter: delimiter.map_or_else(|| self.delimiter.clone(), non_empty_or_default),
        }
    }
}

fn non_empty_or_default(delimiter: &str) -> String {
    if delimiter.is_empty() {
        DEFAULT_SEPARATOR.to_string()
    } else {
        delimiter.to_string()
    }
}

/// Any accepted shape of a word source.
///
/// A `Line` is a single delimited string. A `List` holds words or delimited
/// strings; with splitting enabled both shapes flatten to the same words.
///
/// # Examples
///
/// ```
/// use tagline::{Splitting, WordCollection};
///
/// let mixed = WordCollection::from(vec!["a", "b c"]);
/// assert_eq!(mixed.to_words(&Splitting::default()), ["a", "b", "c"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum WordCollection {
    /// One delimited string of words.
    Line(String),
    /// A list of words and/or delimited strings.
    List(Vec<String>),
}

impl Default for WordCollection {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl WordCollection {
    /// Read a word collection out of an arbitrary JSON value.
    ///
    /// Strings and arrays map directly. Scalars are stringified so numeric
    /// fields such as an `id` can serve as tags; falsy values and objects
    /// yield `None`. Array elements that are neither strings nor scalars are
    /// dropped.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        if !is_truthy(value) {
            return None;
        }
        match value {
            Value::String(line) => Some(Self::Line(line.clone())),
            Value::Array(items) => Some(Self::List(items.iter().filter_map(scalar_text).collect())),
            Value::Number(number) => Some(Self::Line(number.to_string())),
            Value::Bool(true) => Some(Self::Line("true".to_string())),
            Value::Bool(false) | Value::Null | Value::Object(_) => None,
        }
    }

    /// Normalize into a flat list of non-empty words.
    #[must_use]
    pub fn to_words(&self, splitting: &Splitting) -> Vec<String> {
        match self {
            Self::Line(line) => split_all(std::iter::once(line.as_str()), splitting),
            Self::List(items) => split_all(items.iter().map(String::as_str), splitting),
        }
    }

    /// Whether the collection holds no text at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Line(line) => line.is_empty(),
            Self::List(items) => items.is_empty(),
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn split_all<'a>(items: impl Iterator<Item = &'a str>, splitting: &Splitting) -> Vec<String> {
    if splitting.enabled {
        items
            .flat_map(|item| item.split(splitting.delimiter.as_str()))
            .filter(|word| !word.is_empty())
            .map(str::to_string)
            .collect()
    } else {
        items
            .filter(|word| !word.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl From<&str> for WordCollection {
    fn from(line: &str) -> Self {
        Self::Line(line.to_string())
    }
}

impl From<String> for WordCollection {
    fn from(line: String) -> Self {
        Self::Line(line)
    }
}

impl From<Vec<String>> for WordCollection {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl From<Vec<&str>> for WordCollection {
    fn from(items: Vec<&str>) -> Self {
        Self::List(items.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for WordCollection {
    fn from(items: [&str; N]) -> Self {
        Self::List(items.iter().map(|item| (*item).to_string()).collect())
    }
}

/// Normalize an optional JSON value into words.
///
/// Absent and falsy values produce an empty list; see
/// [`WordCollection::from_value`] for the accepted shapes.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use tagline::{normalize, Splitting};
///
/// let words = normalize(Some(&json!("  a  b ")), &Splitting::default());
/// assert_eq!(words, ["a", "b"]);
/// assert!(normalize(None, &Splitting::default()).is_empty());
/// ```
#[must_use]
pub fn normalize(value: Option<&Value>, splitting: &Splitting) -> Vec<String> {
    value
        .and_then(WordCollection::from_value)
        .map(|collection| collection.to_words(splitting))
        .unwrap_or_default()
}

/// Whether a value counts as set: `null`, `false`, `0` and the empty string
/// do not.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
