//! Configuration management.
//!
//! [`ConfigManager`] is implemented by each binary's top-level config
//! struct. It resolves where the TOML file lives, layers the file and
//! environment overrides through `confyg`, and serializes the result back
//! for the `config` CLI subcommands.
//!
//! Environment overrides follow `<PREFIX>_<SECTION>_<KEY>`: with prefix
//! `FOLIO`, `FOLIO_SERVER_PORT=9000` sets `server.port` and
//! `FOLIO_CMS_API_VERSION=2024-01-01` sets `cms.api_version`. Every
//! top-level table of the config struct is registered as a section.

use std::path::PathBuf;

use confyg::{Confygery, env};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{Error, Result};

// ============================================================================
// ConfigManager
// ============================================================================

/// Behaviour shared by every Folio configuration root.
pub trait ConfigManager: Default + Serialize + DeserializeOwned {
    /// Project name, used for the config directory and env prefix.
    fn project_name() -> &'static str;

    /// Prefix for environment overrides (`folio` → `FOLIO`).
    fn env_prefix() -> String {
        Self::project_name().to_uppercase().replace(['-', ' '], "_")
    }

    /// Platform default path: `<config_dir>/<project>/config.toml`.
    fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(Self::project_name()).join("config.toml"))
    }

    /// Resolve the config file path.
    ///
    /// Priority: explicit path → `<PREFIX>_CONFIG` env var → platform default.
    fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }
        if let Ok(path) = std::env::var(format!("{}_CONFIG", Self::env_prefix())) {
            return Some(PathBuf::from(path));
        }
        Self::default_config_path()
    }

    /// Load configuration from the resolved path with process environment
    /// overrides applied. A missing file yields the defaults.
    fn load(config_path: Option<&str>) -> Result<Self> {
        Self::load_from(Self::resolve_config_path(config_path))
    }

    /// Load configuration from `path` (if it exists), layering
    /// `<PREFIX>_<SECTION>_<KEY>` environment variables on top.
    fn load_from(path: Option<PathBuf>) -> Result<Self> {
        let content = match path.as_ref().filter(|p| p.exists()) {
            Some(path) => {
                log::debug!("Loading configuration from {}", path.display());
                let content =
                    std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
                toml::from_str::<toml::Value>(&content).map_err(|e| {
                    Error::config(format!("Failed to parse {}: {e}", path.display()))
                })?;
                content
            }
            None => String::new(),
        };

        let mut opts = env::Options::with_top_level(&Self::env_prefix().to_lowercase());
        for section in Self::sections()? {
            opts.add_section(&section);
        }

        Confygery::new()
            .and_then(|mut c| {
                c.add_str(&content)?.add_env(opts)?;
                c.build::<Self>()
            })
            .map_err(|e| Error::config(format!("Invalid configuration: {e}")))
    }

    /// Names of the top-level tables in the default configuration; each
    /// one accepts environment overrides.
    fn sections() -> Result<Vec<String>> {
        let value =
            toml::Value::try_from(Self::default()).map_err(|e| Error::config(e.to_string()))?;
        Ok(value
            .as_table()
            .map(|table| {
                table
                    .iter()
                    .filter(|(_, v)| v.is_table())
                    .map(|(k, _)| k.clone())
                    .collect()
            })
            .unwrap_or_default())
    }

    /// Serialize to pretty TOML.
    fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Flatten to `<PREFIX>_<SECTION>_<KEY>=value` pairs, sorted by key.
    fn to_env_vars(&self) -> Result<Vec<(String, String)>> {
        let value = toml::Value::try_from(self).map_err(|e| Error::config(e.to_string()))?;
        let mut vars = Vec::new();
        flatten_env(&value, &Self::env_prefix(), &mut vars);
        vars.sort();
        Ok(vars)
    }
}

fn flatten_env(value: &toml::Value, prefix: &str, out: &mut Vec<(String, String)>) {
    match value {
        toml::Value::Table(table) => {
            for (key, child) in table {
                let name = format!("{prefix}_{}", key.to_uppercase());
                flatten_env(child, &name, out);
            }
        }
        other => out.push((prefix.to_string(), format_toml_value(other))),
    }
}

// ============================================================================
// TOML dotted-key helpers
// ============================================================================

/// Navigate a dotted key path in a TOML value tree.
pub fn get_nested_value<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    let mut current = value;
    for part in key.split('.') {
        current = current.as_table()?.get(part)?;
    }
    Some(current)
}

/// Set a value at a dotted key path, creating intermediate tables as needed.
pub fn set_nested_value(root: &mut toml::Value, key: &str, value: toml::Value) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();
    let Some((last, parents)) = parts.split_last() else {
        return Err(Error::config("Empty key path"));
    };
    if last.is_empty() {
        return Err(Error::config("Empty key path"));
    }

    let mut current = root;
    for part in parents {
        let table = current
            .as_table_mut()
            .ok_or_else(|| Error::config("Cannot navigate into a non-table value"))?;
        current = table
            .entry(part.to_string())
            .or_insert_with(|| toml::Value::Table(toml::map::Map::new()));
    }

    let table = current
        .as_table_mut()
        .ok_or_else(|| Error::config("Cannot set key on a non-table value"))?;
    table.insert(last.to_string(), value);
    Ok(())
}

/// Parse a string value into a TOML value, auto-detecting the type.
///
/// Priority: bool → integer → float → string.
pub fn parse_value(s: &str) -> toml::Value {
    match s {
        "true" => return toml::Value::Boolean(true),
        "false" => return toml::Value::Boolean(false),
        _ => {}
    }
    if let Ok(i) = s.parse::<i64>() {
        return toml::Value::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return toml::Value::Float(f);
    }
    toml::Value::String(s.to_string())
}

/// Format a TOML value for display on stdout.
pub fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Datetime(dt) => dt.to_string(),
        toml::Value::Array(_) | toml::Value::Table(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| format!("{value:?}"))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
