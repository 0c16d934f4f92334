//! The "only-one" rule: at most one member of each group survives.

use hashbrown::HashSet;

/// Drop all but the most preferred present member of each group.
///
/// Groups list mutually substitutable tags, most preferred first. For every
/// group the first member found in `tags` is kept and each later member is
/// removed. Survivors keep their relative order. With groups configured the
/// result is also free of repeated tags; with no groups at all the input is
/// returned untouched.
///
/// # Examples
///
/// ```
/// use tagline::resolve_conflicts;
///
/// let tags = ["blue", "third-party_edit", "white", "edit", "red"]
///     .map(String::from)
///     .to_vec();
/// let groups = vec![
///     vec!["third-party_edit".to_string(), "edit".to_string(), "edited".to_string()],
///     vec!["sound_edit".to_string(), "edit".to_string(), "edited".to_string()],
/// ];
/// assert_eq!(
///     resolve_conflicts(tags, &groups),
///     ["blue", "third-party_edit", "white", "red"]
/// );
/// ```
#[must_use]
pub fn resolve_conflicts(tags: Vec<String>, groups: &[Vec<String>]) -> Vec<String> {
    if groups.is_empty() {
        return tags;
    }
    let mut present: HashSet<String> = HashSet::with_capacity(tags.len());
    let ordered: Vec<String> = tags
        .into_iter()
        .filter(|tag| present.insert(tag.clone()))
        .collect();
    for group in groups {
        let mut members = group.iter();
        let Some(kept) = members
            .by_ref()
            .find(|member| present.contains(member.as_str()))
        else {
            continue;
        };
        for member in members.filter(|member| *member != kept) {
            present.remove(member.as_str());
        }
    }
    ordered
        .into_iter()
        .filter(|tag| present.contains(tag.as_str()))
        .collect()
}
