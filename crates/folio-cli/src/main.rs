//! Folio CLI
//!
//! Command-line interface for the Folio portfolio site.

#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use folio_cli::Cli;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_FILTER: &str = "info,folio=debug";

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    // stdout is reserved for command output.
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    folio_cli::run(cli).await?;
    Ok(())
}
