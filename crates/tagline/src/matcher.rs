//! Literal and wildcard tag matching for only/ignore filters.

use hashbrown::HashSet;

/// A compiled wildcard pattern.
///
/// Patterns are recognised purely by a leading and/or trailing `*`; there is
/// no escaping, so a literal tag cannot start or end with an asterisk.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Wildcard {
    /// `prefix*`: the tag starts with the text.
    Prefix(String),
    /// `*suffix`: the tag ends with the text.
    Suffix(String),
    /// `*substring*`: the tag contains the text. A bare `*` compiles to an
    /// empty substring and therefore matches every tag.
    Contains(String),
}

impl Wildcard {
    /// Compile a pattern, returning `None` for literal tags.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagline::Wildcard;
    ///
    /// assert_eq!(Wildcard::parse("*_hair"), Some(Wildcard::Suffix("_hair".into())));
    /// assert_eq!(Wildcard::parse("blue*"), Some(Wildcard::Prefix("blue".into())));
    /// assert_eq!(Wildcard::parse("*edit*"), Some(Wildcard::Contains("edit".into())));
    /// assert_eq!(Wildcard::parse("*"), Some(Wildcard::Contains(String::new())));
    /// assert_eq!(Wildcard::parse("black_eyes"), None);
    /// ```
    #[must_use]
    pub fn parse(pattern: &str) -> Option<Self> {
        match (pattern.strip_prefix('*'), pattern.strip_suffix('*')) {
            (Some(rest), Some(_)) => Some(Self::Contains(
                rest.strip_suffix('*').unwrap_or_default().to_string(),
            )),
            (Some(suffix), None) => Some(Self::Suffix(suffix.to_string())),
            (None, Some(prefix)) => Some(Self::Prefix(prefix.to_string())),
            (None, None) => None,
        }
    }

    /// Test a tag against the pattern.
    #[must_use]
    pub fn matches(&self, tag: &str) -> bool {
        match self {
            Self::Prefix(prefix) => tag.starts_with(prefix.as_str()),
            Self::Suffix(suffix) => tag.ends_with(suffix.as_str()),
            Self::Contains(needle) => tag.contains(needle.as_str()),
        }
    }
}

/// Checks whether a tag matches any of a fixed set of tags and wildcards.
///
/// # Examples
///
/// ```
/// use tagline::WildcardTagMatcher;
///
/// let matcher = WildcardTagMatcher::new(["*_hair", "black_eyes"]);
/// assert!(matcher.matches("white_hair"));
/// assert!(matcher.matches("black_eyes"));
/// assert!(!matcher.matches("blue_eyes"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct WildcardTagMatcher {
    literals: HashSet<String>,
    wildcards: Vec<Wildcard>,
}

impl WildcardTagMatcher {
    /// Partition patterns into literal tags and compiled wildcards.
    ///
    /// Duplicate wildcards are compiled once, keeping their first position.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut literals = HashSet::new();
        let mut wildcards: Vec<Wildcard> = Vec::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            match Wildcard::parse(pattern) {
                Some(wildcard) => {
                    if !wildcards.contains(&wildcard) {
                        wildcards.push(wildcard);
                    }
                }
                None => {
                    literals.insert(pattern.to_string());
                }
            }
        }
        Self {
            literals,
            wildcards,
        }
    }

    /// Return `true` when the tag is a listed literal or matches a wildcard.
    #[must_use]
    pub fn matches(&self, tag: &str) -> bool {
        self.literals.contains(tag) || self.wildcards.iter().any(|w| w.matches(tag))
    }

    /// Whether the matcher was built from no patterns at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty() && self.wildcards.is_empty()
    }
}

/// An allow-list and/or deny-list filter.
///
/// A tag passes when it matches the allow-list (if any) and does not match
/// the deny-list (if any). Empty pattern lists count as absent.
#[derive(Debug, Clone, Default)]
pub struct TagFilter {
    only: Option<WildcardTagMatcher>,
    ignore: Option<WildcardTagMatcher>,
}

impl TagFilter {
    /// Build a filter where `only` excludes `ignore`.
    ///
    /// Used for custom sets: when both lists are given, `only` takes
    /// precedence and `ignore` is never consulted.
    #[must_use]
    pub fn exclusive(only: &[String], ignore: &[String]) -> Self {
        if only.is_empty() {
            Self::layered(only, ignore)
        } else {
            Self::layered(only, &[])
        }
    }

    /// Build a filter applying `only` first and then `ignore`.
    ///
    /// Used for the line-level filters, where a tag must survive both lists.
    #[must_use]
    pub fn layered(only: &[String], ignore: &[String]) -> Self {
        Self {
            only: compile(only),
            ignore: compile(ignore),
        }
    }

    /// Return `true` when the tag passes the filter.
    #[must_use]
    pub fn allows(&self, tag: &str) -> bool {
        if self.only.as_ref().is_some_and(|only| !only.matches(tag)) {
            return false;
        }
        !self.ignore.as_ref().is_some_and(|ignore| ignore.matches(tag))
    }

    /// Whether neither list is configured.
    #[must_use]
    pub fn is_pass_through(&self) -> bool {
        self.only.is_none() && self.ignore.is_none()
    }
}

fn compile(patterns: &[String]) -> Option<WildcardTagMatcher> {
    if patterns.is_empty() {
        None
    } else {
        Some(WildcardTagMatcher::new(patterns))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("white_hair", true)]
    #[case("black_hair", true)]
    #[case("black_eyes", true)]
    #[case("blue_eyes", false)]
    #[case("pink_dress", false)]
    fn matches_literals_and_suffix_wildcards(#[case] tag: &str, #[case] expected: bool) {
        let matcher = WildcardTagMatcher::new(["*_hair", "black_eyes"]);
        assert_eq!(matcher.matches(tag), expected);
    }

    #[rstest]
    #[case("*filesize", "extremely_large_filesize", true)]
    #[case("*filesize", "filesize_large", false)]
    #[case("high*", "high_resolution", true)]
    #[case("high*", "very_high_resolution", false)]
    #[case("*resolution*", "very_high_resolution", true)]
    #[case("*resolution*", "res", false)]
    #[case("*", "anything", true)]
    #[case("**", "anything", true)]
    fn wildcard_forms(#[case] pattern: &str, #[case] tag: &str, #[case] expected: bool) {
        assert_eq!(WildcardTagMatcher::new([pattern]).matches(tag), expected);
    }

    #[test]
    fn literal_matching_is_case_sensitive() {
        let matcher = WildcardTagMatcher::new(["Animated"]);
        assert!(matcher.matches("Animated"));
        assert!(!matcher.matches("animated"));
    }

    #[test]
    fn duplicate_wildcards_compile_once() {
        let matcher = WildcardTagMatcher::new(["*filesize", "*filesize", "hd"]);
        assert_eq!(matcher.wildcards.len(), 1);
        assert!(!matcher.is_empty());
    }

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| (*item).to_string()).collect()
    }

    #[test]
    fn exclusive_filter_prefers_only() {
        let filter = TagFilter::exclusive(&words(&["a", "b"]), &words(&["a"]));
        assert!(filter.allows("a"));
        assert!(filter.allows("b"));
        assert!(!filter.allows("c"));
    }

    #[test]
    fn layered_filter_applies_both_lists() {
        let filter = TagFilter::layered(&words(&["a", "b"]), &words(&["a"]));
        assert!(!filter.allows("a"));
        assert!(filter.allows("b"));
        assert!(!filter.allows("c"));
    }

    #[test]
    fn ignore_drops_matches() {
        let filter = TagFilter::exclusive(&[], &words(&["mp4", "*gif"]));
        assert!(!filter.allows("mp4"));
        assert!(!filter.allows("animated_gif"));
        assert!(filter.allows("3d"));
    }

    #[test]
    fn no_patterns_pass_everything() {
        let filter = TagFilter::layered(&[], &[]);
        assert!(filter.is_pass_through());
        assert!(filter.allows("anything"));
    }
}
