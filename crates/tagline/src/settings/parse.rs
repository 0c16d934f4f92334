//! Alias-aware reading of the JSON options bag.
//!
//! Each option is accepted under several spellings collected over the
//! lifetime of the configuration format. Keys are tried in priority order:
//! numbers and strings take the first truthy value (so `0` and `""` fall
//! through to the next spelling and then to the default), booleans take the
//! first present non-null value.

use log::warn;
use serde_json::{Map, Value};

use super::{CustomSetSpec, Settings};
use crate::errors::SettingsError;
use crate::limit::LengthMode;
use crate::words::{Splitting, WordCollection, is_truthy};

const SELECTED_SETS: &[&str] = &["selectedSets", "selected-sets", "props"];
const CUSTOM_SETS: &[&str] = &["customSets", "custom-sets", "customProps", "custom-props"];
const CHARS_LIMIT: &[&str] = &[
    "charsLimit",
    "chars-limit",
    "lengthLimit",
    "length-limit",
    "lenLimit",
    "len-limit",
];
const BYTES_LIMIT: &[&str] = &["bytesLimit", "bytes-limit"];
const TAGS_LIMIT: &[&str] = &["tagsLimit", "tags-limit", "tagLimit", "tag-limit"];
const LENGTH_MODE: &[&str] = &["limitType", "limit-type"];
const SPLIT: &[&str] = &["splitString", "split-string", "split"];
const DEDUPLICATE: &[&str] = &["deduplicate", "dedup"];
const CASE_SENSITIVE: &[&str] = &["caseSensitive", "case-sensitive", "caseSens", "case-sens"];
const ONLY_ONE: &[&str] = &["onlyOne", "only-one"];
const SOURCES: &[&str] = &["source", "sources", "props"];

/// Read-only view over one JSON object level of the options bag.
struct Options<'a>(&'a Map<String, Value>);

impl<'a> Options<'a> {
    fn first_truthy(&self, keys: &[&str]) -> Option<&'a Value> {
        keys.iter()
            .filter_map(|key| self.0.get(*key))
            .find(|value| is_truthy(value))
    }

    fn first_present(&self, keys: &[&str]) -> Option<&'a Value> {
        keys.iter()
            .filter_map(|key| self.0.get(*key))
            .find(|value| !value.is_null())
    }

    fn int(&self, keys: &[&str]) -> Option<i64> {
        self.first_truthy(keys).and_then(as_int)
    }

    fn flag(&self, keys: &[&str]) -> Option<bool> {
        self.first_present(keys).map(|value| match value {
            Value::Bool(flag) => *flag,
            other => is_truthy(other),
        })
    }

    fn text(&self, key: &str) -> Option<String> {
        self.first_truthy(&[key]).and_then(|value| match value {
            Value::String(text) => Some(text.clone()),
            Value::Number(number) => Some(number.to_string()),
            _ => None,
        })
    }

    fn words(&self, keys: &[&str]) -> WordCollection {
        self.first_truthy(keys)
            .and_then(WordCollection::from_value)
            .unwrap_or_default()
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "fractional limits are truncated toward zero on purpose"
)]
fn as_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|float| float as i64)),
        Value::String(text) => {
            let text = text.trim();
            text.parse::<i64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().map(|float| float as i64))
        }
        _ => None,
    }
}

pub(super) fn settings_from_value(value: &Value) -> Result<Settings, SettingsError> {
    let mut settings = Settings::default();
    let Some(map) = value.as_object() else {
        if !value.is_null() {
            warn!("tag line settings are not a JSON object; using defaults");
        }
        return Ok(settings);
    };
    let options = Options(map);

    if let Some(joiner) = options.text("joiner") {
        settings.joiner = joiner;
    }
    if let Some(splitter) = options.text("splitter") {
        settings.splitter = splitter;
    }
    if let Some(split) = options.flag(SPLIT) {
        settings.split = split;
    }
    if let Some(deduplicate) = options.flag(DEDUPLICATE) {
        settings.deduplicate = deduplicate;
    }
    if let Some(case_sensitive) = options.flag(CASE_SENSITIVE) {
        settings.case_sensitive = case_sensitive;
    }
    if let Some(limit) = options.int(CHARS_LIMIT) {
        settings.chars_limit = limit;
    }
    if let Some(limit) = options.int(BYTES_LIMIT) {
        settings.bytes_limit = limit;
    }
    if let Some(limit) = options.int(TAGS_LIMIT) {
        settings.tags_limit = limit;
    }
    settings.length_mode = options.first_truthy(LENGTH_MODE).map(parse_mode).transpose()?;

    settings.selected_sets = options.words(SELECTED_SETS);
    settings.only = options.words(&["only"]);
    settings.ignore = options.words(&["ignore"]);
    settings.replace = options.first_truthy(&["replace"]).map(parse_replace).unwrap_or_default();

    let splitting = Splitting::new(settings.split, &settings.splitter);
    settings.only_one = options
        .first_truthy(ONLY_ONE)
        .map(|groups| parse_only_one(groups, &splitting))
        .unwrap_or_default();
    settings.custom_sets = options
        .first_truthy(CUSTOM_SETS)
        .map(parse_custom_sets)
        .unwrap_or_default();

    Ok(settings)
}

fn parse_mode(value: &Value) -> Result<LengthMode, SettingsError> {
    match value {
        Value::String(mode) => mode.parse(),
        other => Err(SettingsError::UnknownLengthMode(other.to_string())),
    }
}

fn parse_replace(value: &Value) -> Vec<(String, String)> {
    let Some(entries) = value.as_array() else {
        warn!("`replace` must be a list of [from, to] pairs; ignoring {value}");
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(|entry| {
            let pair = entry.as_array().and_then(|pair| match pair.as_slice() {
                [Value::String(from), Value::String(to), ..] => Some((from.clone(), to.clone())),
                _ => None,
            });
            if pair.is_none() {
                warn!("skipping malformed replacement entry {entry}");
            }
            pair
        })
        .collect()
}

fn parse_only_one(value: &Value, splitting: &Splitting) -> Vec<Vec<String>> {
    let Some(groups) = value.as_array() else {
        warn!("`onlyOne` must be a list of tag groups; ignoring {value}");
        return Vec::new();
    };
    groups
        .iter()
        .map(|group| match group {
            Value::Array(tags) => tags
                .iter()
                .filter_map(Value::as_str)
                .filter(|tag| !tag.is_empty())
                .map(str::to_string)
                .collect(),
            Value::String(line) => WordCollection::from(line.as_str()).to_words(splitting),
            _ => {
                warn!("skipping malformed only-one group {group}");
                Vec::new()
            }
        })
        .collect()
}

fn parse_custom_sets(value: &Value) -> Vec<(String, CustomSetSpec)> {
    let Some(sets) = value.as_object() else {
        warn!("custom sets must be an object keyed by set name; ignoring {value}");
        return Vec::new();
    };
    sets.iter()
        .filter_map(|(name, spec)| {
            let Some(map) = spec.as_object() else {
                warn!("skipping custom set `{name}`: its definition is not an object");
                return None;
            };
            Some((name.clone(), parse_custom_set(&Options(map))))
        })
        .collect()
}

fn parse_custom_set(options: &Options<'_>) -> CustomSetSpec {
    CustomSetSpec {
        sources: options.words(SOURCES),
        only: options.words(&["only"]),
        ignore: options.words(&["ignore"]),
        split: options.flag(SPLIT),
        splitter: options.text("splitter"),
        tags_limit: options.int(TAGS_LIMIT).unwrap_or(0),
    }
}
