//! Greedy packing of candidate tags into a bounded line.

use hashbrown::{HashMap, HashSet};

use crate::limit::{LengthBudget, positive};
use crate::matcher::TagFilter;
use crate::only_one::resolve_conflicts;
use crate::settings::Settings;
use crate::words::Splitting;

/// Turns an ordered candidate list into the final tag line.
///
/// Candidates are deduplicated, reduced by the only-one groups, filtered,
/// replaced and then accepted greedily: a tag that would overflow the length
/// budget is skipped, and later shorter tags may still fit.
///
/// # Examples
///
/// ```
/// use tagline::{LinePacker, Settings};
///
/// let packer = LinePacker::new(&Settings::default().with_chars_limit(8).with_joiner(", "));
/// let tags = ["long_tag_x", "a", "b", "a"].map(String::from).to_vec();
/// assert_eq!(packer.pack(tags), "a, b");
/// ```
#[derive(Debug, Clone, Default)]
pub struct LinePacker {
    filter: TagFilter,
    replace: HashMap<String, String>,
    only_one: Vec<Vec<String>>,
    budget: LengthBudget,
    tags_limit: Option<usize>,
    joiner: String,
    deduplicate: bool,
}

impl LinePacker {
    /// Compile the line-level options of `settings`.
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        let splitting = Splitting::new(settings.split, &settings.splitter);
        let only = settings.only.to_words(&splitting);
        let ignore = settings.ignore.to_words(&splitting);
        let replace = settings
            .replace
            .iter()
            .filter(|(_, to)| !to.is_empty())
            .map(|(from, to)| (from.clone(), to.clone()))
            .collect();
        Self {
            filter: TagFilter::layered(&only, &ignore),
            replace,
            only_one: settings.only_one.clone(),
            budget: LengthBudget::resolve(
                settings.chars_limit,
                settings.bytes_limit,
                settings.length_mode,
            ),
            tags_limit: positive(settings.tags_limit),
            joiner: settings.joiner.clone(),
            deduplicate: settings.deduplicate,
        }
    }

    /// The resolved length budget.
    #[must_use]
    pub const fn budget(&self) -> LengthBudget {
        self.budget
    }

    /// The tag-count cap, if any.
    #[must_use]
    pub const fn tags_limit(&self) -> Option<usize> {
        self.tags_limit
    }

    /// Pack candidates into one line.
    #[must_use]
    pub fn pack(&self, tags: Vec<String>) -> String {
        let tags = if self.deduplicate {
            dedup(tags)
        } else {
            tags
        };
        let tags = resolve_conflicts(tags, &self.only_one);

        let limit = self.budget.limit();
        let joiner_len = self.budget.measure(&self.joiner);
        let mut running = 0usize;
        let mut accepted: Vec<&str> = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();
        for tag in &tags {
            if !self.filter.allows(tag) {
                continue;
            }
            let tag = self.replace.get(tag.as_str()).unwrap_or(tag).as_str();
            if self.deduplicate && seen.contains(tag) {
                continue;
            }
            let tag_len = self.budget.measure(tag);
            let projected = running
                .saturating_add(tag_len)
                .saturating_add(joiner_len.saturating_mul(accepted.len()));
            if projected > limit {
                continue;
            }
            running = running.saturating_add(tag_len);
            accepted.push(tag);
            seen.insert(tag);
            if self.tags_limit == Some(accepted.len()) {
                break;
            }
        }
        accepted.join(&self.joiner)
    }
}

fn dedup(tags: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(tags.len());
    tags.into_iter()
        .filter(|tag| seen.insert(tag.clone()))
        .collect()
}
