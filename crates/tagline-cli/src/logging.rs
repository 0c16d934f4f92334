//! Stderr logging for the `tagline` binary.
//!
//! Generated lines own stdout so they can be piped into a renamer. The library
//! reports skipped settings through the `log` facade; installing the
//! subscriber also bridges those records so they reach stderr here.

use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

fn filter_from_config(config: &CliConfig) -> EnvFilter {
    EnvFilter::new(config.log_level.directive())
}

/// Install the stderr subscriber at `config.log_level`.
///
/// `--log-level` beats `TAGLINE_LOG_LEVEL`, which beats the `warn` default;
/// [`CliConfig`] has already applied that order. A second call keeps the
/// first subscriber.
pub fn init_logging(config: &CliConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_from_config(config))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}
