//! Command-line arguments.

use clap::{ArgAction, Parser, Subcommand};
use folio_content::SortKey;

/// Folio - portfolio site backed by a headless CMS
#[derive(Parser, Debug)]
#[command(name = "folio", author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Serve and list the bundled dataset instead of querying the CMS
    #[arg(long, global = true)]
    pub offline: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Start the web server
    Serve {
        /// Override `server.host`
        #[arg(long)]
        host: Option<String>,
        /// Override `server.port`
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the project list as the projects page would derive it
    Projects {
        /// Search text
        #[arg(short, long)]
        query: Option<String>,
        /// Category label (`all` for every category)
        #[arg(short = 'C', long)]
        category: Option<String>,
        /// Sort order
        #[arg(short, long, value_parser = parse_sort, default_value = "dateDesc")]
        sort: SortKey,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the distinct project categories
    Categories,

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `folio config` subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Print a value by dotted key, e.g. `server.port`
    Get {
        /// Dotted key
        key: String,
    },
    /// Set a value by dotted key in the config file
    Set {
        /// Dotted key
        key: String,
        /// New value (bool, integer, float, or string)
        value: String,
    },
    /// Write a default config file
    Init {
        /// Where to write it (defaults to the platform config directory)
        #[arg(short, long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
    /// Print the effective configuration as environment variables
    Export {
        /// Format as `--env KEY=VALUE` for `docker run`
        #[arg(long)]
        docker_env: bool,
    },
}

fn parse_sort(raw: &str) -> Result<SortKey, String> {
    SortKey::ALL
        .into_iter()
        .find(|key| key.as_str().eq_ignore_ascii_case(raw))
        .ok_or_else(|| {
            let known: Vec<&str> = SortKey::ALL.iter().map(SortKey::as_str).collect();
            format!("unknown sort key '{raw}' (expected one of {})", known.join(", "))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("folio").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_serve_offline() {
        let cli = parse(&["serve", "--offline", "--port", "9000"]);
        assert!(cli.offline);
        assert_eq!(
            cli.command,
            Command::Serve {
                host: None,
                port: Some(9000)
            }
        );
    }

    #[test]
    fn test_projects_defaults() {
        let cli = parse(&["projects"]);
        assert_eq!(
            cli.command,
            Command::Projects {
                query: None,
                category: None,
                sort: SortKey::DateDesc,
                json: false
            }
        );
    }

    #[test]
    fn test_projects_sort_is_case_insensitive() {
        let cli = parse(&["projects", "--sort", "NAMEASC", "-C", "Web", "--json"]);
        assert!(matches!(
            cli.command,
            Command::Projects {
                sort: SortKey::NameAsc,
                json: true,
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_sort_rejected() {
        let err = Cli::try_parse_from(["folio", "projects", "--sort", "sideways"]).unwrap_err();
        assert!(err.to_string().contains("dateDesc, dateAsc, nameAsc, nameDesc"));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["config", "get", "server.port", "-c", "/tmp/folio.toml", "-vv"]);
        assert_eq!(cli.config.as_deref(), Some("/tmp/folio.toml"));
        assert_eq!(cli.verbose, 2);
        assert_eq!(
            cli.command,
            Command::Config {
                action: ConfigAction::Get {
                    key: "server.port".into()
                }
            }
        );
    }

    #[test]
    fn test_config_export_docker() {
        let cli = parse(&["config", "export", "--docker-env"]);
        assert_eq!(
            cli.command,
            Command::Config {
                action: ConfigAction::Export { docker_env: true }
            }
        );
    }
}
