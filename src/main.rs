//! Raito CLI
//!
//! Command-line interface for Raito access providers

use anyhow::Context as _;
use clap::Parser;
use raito_sdk::cli::{Cli, Runner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let runner = Runner::new(cli);

    let config = runner
        .load_config()
        .context("failed to load SDK configuration")?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(runner.log_level(&config).into()),
        )
        .init();

    runner.run(&config).await?;
    Ok(())
}
