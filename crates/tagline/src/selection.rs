//! Concatenation of the selected sets into one candidate list.

use serde_json::Value;

use crate::custom_sets::ResolvedSets;
use crate::words::{Splitting, normalize};

/// Concatenate the tags of every selected set, in selection order.
///
/// A name present in the record reads the record value, even when that value
/// normalizes to nothing. Otherwise the custom set of that name is used, and
/// unknown names contribute no tags.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use tagline::{ResolvedSets, Splitting, merge_selected};
///
/// let mut custom = ResolvedSets::new();
/// custom.insert("derived".to_string(), vec!["x".to_string()]);
/// let selected = ["tags".to_string(), "derived".to_string(), "missing".to_string()];
/// let tags = merge_selected(&json!({"tags": "a b"}), &custom, &selected, &Splitting::default());
/// assert_eq!(tags, ["a", "b", "x"]);
/// ```
#[must_use]
pub fn merge_selected(
    record: &Value,
    custom: &ResolvedSets,
    selected: &[String],
    splitting: &Splitting,
) -> Vec<String> {
    let mut tags = Vec::new();
    for name in selected {
        match record.get(name) {
            Some(value) => tags.extend(normalize(Some(value), splitting)),
            None => {
                if let Some(set) = custom.get(name) {
                    tags.extend(set.iter().cloned());
                }
            }
        }
    }
    tags
}
