//! Run configuration for the `tagline` binary.
//!
//! The only tunable outside the settings file is log verbosity. It is read
//! from `TAGLINE_LOG_LEVEL` and replaced by `--log-level` when given. Generated
//! lines go to stdout, so verbosity never changes the output itself.

use std::env;
use std::fmt;
use std::str::FromStr;

use crate::error::CliError;

/// Environment variable holding the log level.
pub const LOG_LEVEL_VAR: &str = "TAGLINE_LOG_LEVEL";

/// How much the binary reports on stderr.
///
/// `Warn` is the default, which surfaces settings entries the generator had to
/// skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// One message per generated line with its candidate count.
    Trace,
    /// Compiled generator summary and record counts per input.
    Debug,
    /// Start-up banner.
    Info,
    /// Skipped or unsupported settings entries.
    #[default]
    Warn,
    /// Failures only.
    Error,
}

const LEVEL_NAMES: [(&str, LogLevel); 6] = [
    ("trace", LogLevel::Trace),
    ("debug", LogLevel::Debug),
    ("info", LogLevel::Info),
    ("warn", LogLevel::Warn),
    ("warning", LogLevel::Warn),
    ("error", LogLevel::Error),
];

impl LogLevel {
    /// Return the level as an `EnvFilter` directive.
    #[must_use]
    pub const fn directive(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.directive())
    }
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        LEVEL_NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(wanted))
            .map(|(_, level)| *level)
            .ok_or_else(|| {
                CliError::InvalidConfig(format!(
                    "unknown log level '{s}', expected one of: trace, debug, info, warn, error"
                ))
            })
    }
}

/// Resolved run configuration.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Verbosity of stderr logging.
    pub log_level: LogLevel,
}

impl CliConfig {
    /// Read [`LOG_LEVEL_VAR`] from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` when the variable names no level.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read the configuration through `lookup`, so tests need not touch the
    /// process environment.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` for an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(val) => val.parse()?,
            None => LogLevel::default(),
        };
        Ok(Self { log_level })
    }

    /// Let `--log-level` replace the environment value.
    #[must_use]
    pub fn apply_overrides(mut self, log_level: Option<LogLevel>) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }
        self
    }

    /// Replace the log level.
    #[must_use]
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("trace", LogLevel::Trace)]
    #[case("Debug", LogLevel::Debug)]
    #[case("INFO", LogLevel::Info)]
    #[case("warn", LogLevel::Warn)]
    #[case("warning", LogLevel::Warn)]
    #[case(" error ", LogLevel::Error)]
    #[case("error", LogLevel::Error)]
    fn log_level_parses_valid_values(#[case] input: &str, #[case] expected: LogLevel) {
        assert_eq!(input.parse::<LogLevel>().ok(), Some(expected));
    }

    #[test]
    fn log_level_rejects_invalid_values() {
        let Err(err) = "loud".parse::<LogLevel>() else {
            panic!("unknown level should fail");
        };
        assert!(err.to_string().contains("unknown log level"));
    }

    #[test]
    fn log_levels_display_as_directives() {
        assert_eq!(LogLevel::Trace.directive(), "trace");
        assert_eq!(LogLevel::Warn.to_string(), "warn");
        assert_eq!("warning".parse::<LogLevel>().ok().map(LogLevel::directive), Some("warn"));
    }

    #[test]
    fn lookup_reads_log_level() {
        let config = match CliConfig::from_lookup(|key| {
            (key == LOG_LEVEL_VAR).then(|| "debug".to_string())
        }) {
            Ok(config) => config,
            Err(err) => panic!("valid level should load: {err}"),
        };
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn missing_variables_use_defaults() {
        let Ok(config) = CliConfig::from_lookup(|_| None) else {
            panic!("defaults should load");
        };
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn invalid_variables_are_rejected() {
        let result = CliConfig::from_lookup(|_| Some("chatty".to_string()));
        assert!(matches!(result, Err(CliError::InvalidConfig(_))));
    }

    #[test]
    fn overrides_take_precedence() {
        let config = CliConfig::default()
            .with_log_level(LogLevel::Info)
            .apply_overrides(Some(LogLevel::Error));
        assert_eq!(config.log_level, LogLevel::Error);
        let untouched = CliConfig::default().apply_overrides(None);
        assert_eq!(untouched.log_level, LogLevel::Warn);
    }
}
