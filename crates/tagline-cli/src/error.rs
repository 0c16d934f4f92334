//! Error types for the command line front-end.

use thiserror::Error;

/// Failures the front-end reports with a dedicated exit status.
///
/// Everything else (unreadable files, malformed record JSON) is surfaced as an
/// [`eyre::Report`] with context attached where it happened.
#[derive(Debug, Error)]
pub enum CliError {
    /// An invalid configuration value was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The generator settings could not be compiled.
    #[error("invalid settings: {0}")]
    Settings(#[from] tagline::SettingsError),
}
