//! # folio-cli
//!
//! The `folio` binary:
//!
//! - `folio serve [--offline]` runs the portfolio site
//! - `folio projects [--query Q] [--category C] [--sort KEY] [--json]`
//!   prints the derived project list
//! - `folio categories` prints the distinct categories
//! - `folio config path|get|set|init|export` manages the TOML file

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod error;

pub use cli::{Cli, Command, ConfigAction};
pub use config::FolioConfig;
pub use error::{Error, Result};

use folio_core::ConfigManager;

/// Execute a parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    match cli.command {
        Command::Config { action } => {
            config_handlers::handle_config_command(config_path, action)?;
        }
        Command::Serve { host, port } => {
            let mut config = FolioConfig::load(config_path)?;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            commands::serve(&config, cli.offline).await?;
        }
        Command::Projects {
            query,
            category,
            sort,
            json,
        } => {
            let config = FolioConfig::load(config_path)?;
            let args = commands::ProjectsArgs {
                query,
                category,
                sort,
                json,
            };
            commands::projects(&config, cli.offline, &args).await?;
        }
        Command::Categories => {
            let config = FolioConfig::load(config_path)?;
            commands::categories(&config, cli.offline).await?;
        }
    }
    Ok(())
}
