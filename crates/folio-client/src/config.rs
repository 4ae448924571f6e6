//! CMS connection settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// What a failed fetch is replaced with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackPolicy {
    /// Serve the bundled dataset.
    #[default]
    Bundled,
    /// Serve an empty list.
    Empty,
}

/// The `[cms]` configuration section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CmsConfig {
    /// Base URL of the CMS API, e.g. `https://abc123.api.sanity.io`.
    pub base_url: String,
    /// Dataset name.
    pub dataset: String,
    /// API version date, without the leading `v`.
    pub api_version: String,
    /// Optional read token, sent as a bearer token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// What to serve when a fetch fails.
    pub fallback: FallbackPolicy,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://cms.example.com".to_string(),
            dataset: "production".to_string(),
            api_version: "2024-01-01".to_string(),
            token: None,
            timeout_secs: 10,
            fallback: FallbackPolicy::Bundled,
        }
    }
}

impl CmsConfig {
    /// Full query endpoint URL.
    pub fn query_url(&self) -> String {
        format!(
            "{}/v{}/data/query/{}",
            self.base_url.trim_end_matches('/'),
            self.api_version.trim_start_matches('v'),
            self.dataset
        )
    }

    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_url() {
        let config = CmsConfig {
            base_url: "https://abc.api.example.io/".into(),
            ..CmsConfig::default()
        };
        assert_eq!(
            config.query_url(),
            "https://abc.api.example.io/v2024-01-01/data/query/production"
        );
    }

    #[test]
    fn test_query_url_tolerates_prefixed_version() {
        let config = CmsConfig {
            api_version: "v2023-05-03".into(),
            ..CmsConfig::default()
        };
        assert!(config.query_url().ends_with("/v2023-05-03/data/query/production"));
    }

    #[test]
    fn test_partial_section_uses_defaults() {
        let config: CmsConfig =
            serde_json::from_str(r#"{"dataset":"staging","fallback":"empty"}"#).unwrap();
        assert_eq!(config.dataset, "staging");
        assert_eq!(config.fallback, FallbackPolicy::Empty);
        assert_eq!(config.timeout_secs, 10);
    }
}
