//! stp CLI binary.

use anyhow::Result;
use stp::cli::Cli;
use stp::config::StpConfig;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    let config = StpConfig::discover(cli.config.as_deref())?;

    // RUST_LOG wins over the configured filter.
    // Example: RUST_LOG=steinlib=trace stp check instance.stp
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting stp CLI");

    cli.execute(&config)?;

    tracing::debug!("stp CLI completed successfully");
    Ok(())
}
