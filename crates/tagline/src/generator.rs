//! The compiled tag-line engine.

use serde_json::Value;

use crate::custom_sets::{CustomSet, resolve_custom_sets};
use crate::errors::SettingsError;
use crate::limit::LengthBudget;
use crate::packer::LinePacker;
use crate::selection::merge_selected;
use crate::settings::Settings;
use crate::words::Splitting;

/// Generates bounded tag lines from metadata records.
///
/// Construction compiles the settings once; generation is infallible, keeps
/// no state between calls, and can run from many threads at once.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use tagline::TagLineGenerator;
///
/// let generator = TagLineGenerator::from_value(&json!({
///     "selectedSets": "tags",
///     "replace": [["megane", "glasses"]],
/// }))
/// .expect("settings should compile");
/// assert_eq!(generator.generate_line(&json!({"tags": "megane smile"})), "glasses smile");
/// ```
#[derive(Debug, Clone)]
pub struct TagLineGenerator {
    selected: Vec<String>,
    custom_sets: Vec<CustomSet>,
    splitting: Splitting,
    packer: LinePacker,
}

impl TagLineGenerator {
    /// Compile typed settings.
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        let splitting = Splitting::new(settings.split, &settings.splitter);
        let selected = settings.selected_sets.to_words(&splitting);
        let custom_sets: Vec<CustomSet> = settings
            .custom_sets
            .iter()
            .map(|(name, spec)| CustomSet::compile(name, spec, &splitting))
            .collect();
        let packer = LinePacker::new(settings);
        if !settings.case_sensitive {
            log::warn!("case-insensitive matching is not supported; tags are matched exactly");
        }
        log::debug!(
            "compiled tag line generator: {} selected sets, {} custom sets, budget {:?}, tag cap {:?}",
            selected.len(),
            custom_sets.len(),
            packer.budget(),
            packer.tags_limit(),
        );
        Self {
            selected,
            custom_sets,
            splitting,
            packer,
        }
    }

    /// Compile a JSON options bag.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::UnknownLengthMode`] for an unsupported
    /// `limitType`.
    pub fn from_value(options: &Value) -> Result<Self, SettingsError> {
        Settings::from_value(options).map(|settings| Self::new(&settings))
    }

    /// Compile a JSON options bag given as text.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Json`] when the text is not JSON and
    /// [`SettingsError::UnknownLengthMode`] for an unsupported `limitType`.
    pub fn from_json_str(text: &str) -> Result<Self, SettingsError> {
        Settings::from_json_str(text).map(|settings| Self::new(&settings))
    }

    /// Names of the sets that make up a line, in output order.
    #[must_use]
    pub fn selected_sets(&self) -> &[String] {
        &self.selected
    }

    /// The compiled custom sets, in evaluation order.
    #[must_use]
    pub fn custom_sets(&self) -> &[CustomSet] {
        &self.custom_sets
    }

    /// The resolved length budget.
    #[must_use]
    pub const fn budget(&self) -> LengthBudget {
        self.packer.budget()
    }

    /// Build the tag line for one record.
    ///
    /// Records are usually JSON objects; anything else yields an empty line.
    #[must_use]
    pub fn generate_line(&self, record: &Value) -> String {
        let custom = resolve_custom_sets(record, &self.custom_sets);
        let candidates = merge_selected(record, &custom, &self.selected, &self.splitting);
        let candidate_count = candidates.len();
        let line = self.packer.pack(candidates);
        log::trace!("packed {candidate_count} candidate tags into `{line}`");
        line
    }
}
