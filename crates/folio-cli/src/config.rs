//! Top-level `folio` configuration.
//!
//! ```toml
//! [site]
//! owner = "Alex Doe"
//! featured_limit = 3
//!
//! [server]
//! port = 8080
//!
//! [cms]
//! base_url = "https://cms.example.com"
//! dataset = "production"
//! fallback = "bundled"
//! ```

use std::sync::Arc;

use folio_client::{CmsClient, CmsConfig, ContentSource, Loader, StaticSource};
use folio_core::ConfigManager;
use folio_web::{AppState, ServerConfig, SiteConfig};
use serde::{Deserialize, Serialize};

use crate::Result;

/// `[site]`, `[server]`, and `[cms]` sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Owner and presentation settings.
    pub site: SiteConfig,
    /// Listener settings.
    pub server: ServerConfig,
    /// Content source settings.
    pub cms: CmsConfig,
}

impl ConfigManager for FolioConfig {
    fn project_name() -> &'static str {
        "folio"
    }
}

impl FolioConfig {
    /// The content source: the CMS, or the bundled dataset when `offline`.
    pub fn source(&self, offline: bool) -> Result<Arc<dyn ContentSource>> {
        if offline {
            tracing::info!("Offline mode: serving the bundled dataset");
            return Ok(Arc::new(StaticSource::bundled()));
        }
        let client = CmsClient::new(&self.cms)?;
        tracing::debug!(endpoint = client.endpoint(), "Using CMS");
        Ok(Arc::new(client))
    }

    /// A loader over [`source`](Self::source) with the configured fallback.
    pub fn loader(&self, offline: bool) -> Result<Loader> {
        Ok(Loader::from_arc(self.source(offline)?, self.cms.fallback))
    }

    /// Web server state.
    pub fn app_state(&self, offline: bool) -> Result<AppState> {
        Ok(AppState::new(
            self.source(offline)?,
            self.cms.fallback,
            self.site.clone(),
        ))
    }
}
