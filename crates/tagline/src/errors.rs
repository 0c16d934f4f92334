//! Error types surfaced while building a tag line generator.

use thiserror::Error;

/// Errors raised while turning settings into a [`TagLineGenerator`].
///
/// Generation itself never fails: missing record keys, mismatched value types
/// and empty results all degrade to empty word lists. Only a contract
/// violation in the configuration is reported here.
///
/// [`TagLineGenerator`]: crate::TagLineGenerator
///
/// # Examples
/// ```
/// use tagline::SettingsError;
/// let err = SettingsError::UnknownLengthMode("words".into());
/// assert_eq!(
///     err.to_string(),
///     "unknown length mode `words`, expected one of: char, byte, unlimited"
/// );
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SettingsError {
    /// The length-measurement mode is not one the engine knows how to apply.
    #[error("unknown length mode `{0}`, expected one of: char, byte, unlimited")]
    UnknownLengthMode(String),
    /// The settings text is not valid JSON.
    #[error("settings are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
