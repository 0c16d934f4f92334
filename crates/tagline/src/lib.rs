//! Bounded tag-line generation for booru-style metadata.
//!
//! A [`TagLineGenerator`] turns one metadata record (a JSON object of tag
//! lists, artist names, file extensions and the like) into a single string of
//! tags suitable for a filename or caption. The pipeline derives custom tag
//! sets from the record, concatenates the selected sets, deduplicates,
//! resolves only-one conflicts, applies global filters and replacements, and
//! greedily packs the result under a character or byte budget.
//!
//! ```
//! use serde_json::json;
//! use tagline::TagLineGenerator;
//!
//! let generator = TagLineGenerator::from_value(&json!({
//!     "selectedSets": "artist tags",
//!     "ignore": "*filesize",
//!     "charsLimit": 24,
//! }))
//! .expect("settings should compile");
//! let record = json!({
//!     "artist": "hagiwara_studio",
//!     "tags": "absurdres extremely_large_filesize bangs",
//! });
//! assert_eq!(generator.generate_line(&record), "hagiwara_studio bangs");
//! ```

mod custom_sets;
mod errors;
mod generator;
mod limit;
mod matcher;
mod only_one;
mod packer;
mod selection;
mod settings;
mod words;

pub use custom_sets::{CustomSet, ResolvedSets, resolve_custom_sets};
pub use errors::SettingsError;
pub use generator::TagLineGenerator;
pub use limit::{DEFAULT_CHARS_LIMIT, LengthBudget, LengthMode};
pub use matcher::{TagFilter, Wildcard, WildcardTagMatcher};
pub use only_one::resolve_conflicts;
pub use packer::LinePacker;
pub use selection::merge_selected;
pub use settings::{CustomSetSpec, Settings};
pub use words::{DEFAULT_SEPARATOR, Splitting, WordCollection, normalize};
