//! `tagline` binary: prints a tag line for each JSON metadata record.

use std::io;

use clap::Parser;
use tracing::info;

use tagline_cli::cli::{Cli, run};
use tagline_cli::config::CliConfig;
use tagline_cli::error::CliError;
use tagline_cli::logging::init_logging;

fn main() {
    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            init_logging(&CliConfig::default());
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(2);
        }
    };
    init_logging(&config);

    info!(version = env!("CARGO_PKG_VERSION"), "starting tagline");

    let stdout = io::stdout();
    if let Err(e) = run(&cli, &mut stdout.lock()) {
        let chain = format!("{e:#}");
        tracing::error!(error = %chain, "tag line generation failed");
        std::process::exit(1);
    }
}

fn build_config(cli: &Cli) -> Result<CliConfig, CliError> {
    let config = CliConfig::from_env()?;
    Ok(config.apply_overrides(cli.log_level))
}
