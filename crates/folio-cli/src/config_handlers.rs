//! Handler functions for `folio config` subcommands.
//!
//! The `cmd_config_*` functions are generic over any
//! [`ConfigManager`]; [`handle_config_command`] dispatches them for
//! [`FolioConfig`].

use std::path::PathBuf;

use folio_core::ConfigManager;
use folio_core::config::{format_toml_value, get_nested_value, parse_value, set_nested_value};
use folio_core::{Error, Result};

use crate::cli::ConfigAction;
use crate::config::FolioConfig;

// ============================================================================
// Command dispatch
// ============================================================================

/// Handle a config subcommand using [`FolioConfig`].
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path::<FolioConfig>(config_path),
        ConfigAction::Get { key } => {
            println!("{}", cmd_config_get::<FolioConfig>(config_path, &key)?);
            Ok(())
        }
        ConfigAction::Set { key, value } => {
            let path = cmd_config_set::<FolioConfig>(config_path, &key, &value)?;
            println!("Set {key} = {value} in {}", path.display());
            Ok(())
        }
        ConfigAction::Init { file, force } => {
            let path = cmd_config_init::<FolioConfig>(file.as_deref(), force)?;
            println!("Config file created at {}", path.display());
            Ok(())
        }
        ConfigAction::Export { docker_env } => {
            let config = FolioConfig::load(config_path)?;
            for line in cmd_config_export(&config, docker_env)? {
                println!("{line}");
            }
            Ok(())
        }
    }
}

// ============================================================================
// Generic command handlers
// ============================================================================

/// Show the resolved config file path.
pub fn cmd_config_path<C: ConfigManager>(config_path: Option<&str>) -> Result<()> {
    let path = C::resolve_config_path(config_path)
        .ok_or_else(|| Error::config("Could not determine config directory for this platform"))?;
    println!("{}", path.display());
    if !path.exists() {
        eprintln!(
            "(file does not exist; run `{} config init` to create it)",
            C::project_name()
        );
    }
    Ok(())
}

/// Look up a configuration value by dotted key.
pub fn cmd_config_get<C: ConfigManager>(config_path: Option<&str>, key: &str) -> Result<String> {
    let config = C::load(config_path)?;
    let value = toml::Value::try_from(&config).map_err(|e| Error::config(e.to_string()))?;
    get_nested_value(&value, key)
        .map(format_toml_value)
        .ok_or_else(|| Error::config(format!("Key '{key}' not found in configuration")))
}

/// Set a value by dotted key in an existing config file. Returns the path
/// written.
pub fn cmd_config_set<C: ConfigManager>(
    config_path: Option<&str>,
    key: &str,
    value: &str,
) -> Result<PathBuf> {
    let path = C::resolve_config_path(config_path)
        .ok_or_else(|| Error::config("Could not determine config directory"))?;

    if !path.exists() {
        return Err(Error::config(format!(
            "Config file does not exist at {}. Run `{} config init` first.",
            path.display(),
            C::project_name()
        )));
    }
    let content = std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
    let mut doc: toml::Value = toml::from_str(&content)
        .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;

    set_nested_value(&mut doc, key, parse_value(value))?;

    // Refuse writes that would leave the file unloadable.
    doc.clone()
        .try_into::<C>()
        .map_err(|e| Error::config(format!("Invalid value for '{key}': {e}")))?;

    let toml_str = toml::to_string_pretty(&doc).map_err(|e| Error::config(e.to_string()))?;
    std::fs::write(&path, toml_str).map_err(|e| Error::io_with_path(e, &path))?;
    Ok(path)
}

/// Create a default configuration file. Returns the path written.
pub fn cmd_config_init<C: ConfigManager>(file: Option<&str>, force: bool) -> Result<PathBuf> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => C::default_config_path()
            .ok_or_else(|| Error::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }

    let toml_str = C::default().to_toml_string()?;
    std::fs::write(&path, &toml_str).map_err(|e| Error::io_with_path(e, &path))?;
    Ok(path)
}

/// Configuration as `KEY=value` lines (or `--env KEY=value` for Docker).
pub fn cmd_config_export<C: ConfigManager>(config: &C, docker_env: bool) -> Result<Vec<String>> {
    let vars = config.to_env_vars()?;
    Ok(vars
        .into_iter()
        .map(|(key, value)| {
            if docker_env {
                format!("--env {key}={value}")
            } else {
                format!("{key}={value}")
            }
        })
        .collect())
}

// ============================================================================
// Tests
// ============================================================================
