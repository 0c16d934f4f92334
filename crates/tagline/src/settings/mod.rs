//! Generator configuration.
//!
//! [`Settings`] is the canonical, typed configuration. It can be assembled
//! with the `with_*` builders or read from an open JSON options bag with
//! [`Settings::from_value`], which resolves the accepted key spellings once,
//! before any generator is built.

mod parse;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::errors::SettingsError;
use crate::limit::{DEFAULT_CHARS_LIMIT, LengthMode};
use crate::words::{DEFAULT_SEPARATOR, WordCollection};

/// Rules deriving one custom tag set from record properties or earlier sets.
///
/// # Examples
///
/// ```
/// use tagline::CustomSetSpec;
///
/// let spec = CustomSetSpec::new("tags")
///     .with_ignore("Animated")
///     .with_tags_limit(3);
/// assert_eq!(spec.tags_limit, 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomSetSpec {
    /// Record keys or earlier custom set names to pull tags from, in order.
    pub sources: WordCollection,
    /// Allow-list patterns; takes precedence over `ignore`.
    pub only: WordCollection,
    /// Deny-list patterns.
    pub ignore: WordCollection,
    /// Overrides the global split flag for this set.
    pub split: Option<bool>,
    /// Overrides the global splitter for this set.
    pub splitter: Option<String>,
    /// Keeps at most this many tags when positive.
    pub tags_limit: i64,
}

impl CustomSetSpec {
    /// Create a definition pulling from the given sources.
    #[must_use]
    pub fn new(sources: impl Into<WordCollection>) -> Self {
        Self {
            sources: sources.into(),
            ..Self::default()
        }
    }

    /// Keep only tags matching these patterns.
    #[must_use]
    pub fn with_only(mut self, only: impl Into<WordCollection>) -> Self {
        self.only = only.into();
        self
    }

    /// Drop tags matching these patterns.
    #[must_use]
    pub fn with_ignore(mut self, ignore: impl Into<WordCollection>) -> Self {
        self.ignore = ignore.into();
        self
    }

    /// Cap the number of tags the set keeps.
    #[must_use]
    pub fn with_tags_limit(mut self, limit: i64) -> Self {
        self.tags_limit = limit;
        self
    }

    /// Override whether string sources are split.
    #[must_use]
    pub fn with_split(mut self, split: bool) -> Self {
        self.split = Some(split);
        self
    }

    /// Override the splitter used for this set's sources and filters.
    #[must_use]
    pub fn with_splitter(mut self, splitter: impl Into<String>) -> Self {
        self.splitter = Some(splitter.into());
        self
    }
}

/// Configuration of a [`TagLineGenerator`](crate::TagLineGenerator).
///
/// Every field has a default, so `Settings::default()` is a valid (if empty)
/// configuration: it selects no sets and always yields an empty line.
///
/// # Examples
///
/// ```
/// use tagline::{Settings, TagLineGenerator};
/// use serde_json::json;
///
/// let settings = Settings::default()
///     .with_selected_sets("tags")
///     .with_chars_limit(5);
/// let generator = TagLineGenerator::new(&settings);
/// assert_eq!(generator.generate_line(&json!({"tags": "3d hd english"})), "3d hd");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Names of record keys or custom sets, in output order.
    pub selected_sets: WordCollection,
    /// Custom set definitions in declaration order.
    pub custom_sets: Vec<(String, CustomSetSpec)>,
    /// Global allow-list patterns; takes precedence over `ignore`.
    pub only: WordCollection,
    /// Global deny-list patterns.
    pub ignore: WordCollection,
    /// Literal tag substitutions applied after filtering.
    pub replace: Vec<(String, String)>,
    /// Groups of mutually exclusive tags, most preferred first.
    pub only_one: Vec<Vec<String>>,
    /// Separator placed between tags in the output.
    pub joiner: String,
    /// Separator used to split string values into tags.
    pub splitter: String,
    /// Whether string values are split into tags.
    pub split: bool,
    /// Whether repeated tags are dropped.
    pub deduplicate: bool,
    /// Reserved; matching is always case-sensitive.
    pub case_sensitive: bool,
    /// Character budget; zero selects the default and negative disables it.
    pub chars_limit: i64,
    /// Byte budget; positive values take precedence over `chars_limit`.
    pub bytes_limit: i64,
    /// Maximum number of tags; zero or negative means unlimited.
    pub tags_limit: i64,
    /// Explicit length-measurement mode.
    pub length_mode: Option<LengthMode>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            selected_sets: WordCollection::default(),
            custom_sets: Vec::new(),
            only: WordCollection::default(),
            ignore: WordCollection::default(),
            replace: Vec::new(),
            only_one: Vec::new(),
            joiner: DEFAULT_SEPARATOR.to_string(),
            splitter: DEFAULT_SEPARATOR.to_string(),
            split: true,
            deduplicate: true,
            case_sensitive: true,
            chars_limit: i64::try_from(DEFAULT_CHARS_LIMIT).unwrap_or(i64::MAX),
            bytes_limit: 0,
            tags_limit: 0,
            length_mode: None,
        }
    }
}

impl Settings {
    /// Read settings from a JSON options bag.
    ///
    /// Unknown keys are ignored and malformed values fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::UnknownLengthMode`] when `limitType` names a
    /// mode the engine does not support.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use tagline::Settings;
    ///
    /// let settings = Settings::from_value(&json!({
    ///     "selected-sets": "tags",
    ///     "tagsLimit": 3,
    /// }))
    /// .expect("settings should parse");
    /// assert_eq!(settings.tags_limit, 3);
    /// ```
    pub fn from_value(value: &Value) -> Result<Self, SettingsError> {
        parse::settings_from_value(value)
    }

    /// Parse settings from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Json`] for malformed JSON and
    /// [`SettingsError::UnknownLengthMode`] for an unsupported mode.
    pub fn from_json_str(text: &str) -> Result<Self, SettingsError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }

    /// Select the sets that make up the line, in output order.
    #[must_use]
    pub fn with_selected_sets(mut self, sets: impl Into<WordCollection>) -> Self {
        self.selected_sets = sets.into();
        self
    }

    /// Append a custom set definition.
    #[must_use]
    pub fn with_custom_set(mut self, name: impl Into<String>, spec: CustomSetSpec) -> Self {
        self.custom_sets.push((name.into(), spec));
        self
    }

    /// Keep only tags matching these patterns.
    #[must_use]
    pub fn with_only(mut self, only: impl Into<WordCollection>) -> Self {
        self.only = only.into();
        self
    }

    /// Drop tags matching these patterns.
    #[must_use]
    pub fn with_ignore(mut self, ignore: impl Into<WordCollection>) -> Self {
        self.ignore = ignore.into();
        self
    }

    /// Replace `from` with `to` in the output.
    #[must_use]
    pub fn with_replacement(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.replace.push((from.into(), to.into()));
        self
    }

    /// Add a group of mutually exclusive tags, most preferred first.
    #[must_use]
    pub fn with_only_one<I, S>(mut self, group: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.only_one.push(group.into_iter().map(Into::into).collect());
        self
    }

    /// Set the output separator.
    #[must_use]
    pub fn with_joiner(mut self, joiner: impl Into<String>) -> Self {
        self.joiner = joiner.into();
        self
    }

    /// Set the input separator.
    #[must_use]
    pub fn with_splitter(mut self, splitter: impl Into<String>) -> Self {
        self.splitter = splitter.into();
        self
    }

    /// Enable or disable splitting of string values.
    #[must_use]
    pub fn with_split(mut self, split: bool) -> Self {
        self.split = split;
        self
    }

    /// Enable or disable deduplication.
    #[must_use]
    pub fn with_deduplicate(mut self, deduplicate: bool) -> Self {
        self.deduplicate = deduplicate;
        self
    }

    /// Set the character budget.
    #[must_use]
    pub fn with_chars_limit(mut self, limit: i64) -> Self {
        self.chars_limit = limit;
        self
    }

    /// Set the byte budget.
    #[must_use]
    pub fn with_bytes_limit(mut self, limit: i64) -> Self {
        self.bytes_limit = limit;
        self
    }

    /// Set the tag-count budget.
    #[must_use]
    pub fn with_tags_limit(mut self, limit: i64) -> Self {
        self.tags_limit = limit;
        self
    }

    /// Set the length-measurement mode explicitly.
    #[must_use]
    pub fn with_length_mode(mut self, mode: LengthMode) -> Self {
        self.length_mode = Some(mode);
        self
    }
}

impl<'de> Deserialize<'de> for Settings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_match_documented_values() {
        let settings = Settings::default();
        assert_eq!(settings.joiner, " ");
        assert_eq!(settings.splitter, " ");
        assert!(settings.split);
        assert!(settings.deduplicate);
        assert!(settings.case_sensitive);
        assert_eq!(settings.chars_limit, 120);
        assert_eq!(settings.bytes_limit, 0);
        assert_eq!(settings.tags_limit, 0);
        assert!(settings.length_mode.is_none());
    }

    #[test]
    fn builders_accumulate() {
        let settings = Settings::default()
            .with_custom_set("a", CustomSetSpec::new("tags"))
            .with_custom_set("b", CustomSetSpec::new("a"))
            .with_replacement("megane", "glasses")
            .with_only_one(["mp4", "Animated"]);
        let names: Vec<_> = settings.custom_sets.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(settings.replace, [("megane".to_string(), "glasses".to_string())]);
        assert_eq!(settings.only_one, [vec!["mp4".to_string(), "Animated".to_string()]]);
    }

    #[derive(Deserialize)]
    struct Embedded {
        tagline: Settings,
    }

    #[test]
    fn deserializes_inside_a_larger_config() {
        let parsed: Embedded = match serde_json::from_value(json!({
            "tagline": {"selectedSets": "tags", "joiner": "_"}
        })) {
            Ok(parsed) => parsed,
            Err(err) => panic!("embedded settings should parse: {err}"),
        };
        assert_eq!(parsed.tagline.joiner, "_");
        assert_eq!(parsed.tagline.selected_sets, WordCollection::from("tags"));
    }

    #[test]
    fn deserialization_surfaces_unknown_length_mode() {
        let result = serde_json::from_value::<Embedded>(json!({
            "tagline": {"limitType": "words"}
        }));
        let Err(err) = result else {
            panic!("unknown length mode should fail");
        };
        assert!(err.to_string().contains("unknown length mode"));
    }
}
