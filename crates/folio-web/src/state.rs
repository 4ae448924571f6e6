//! Shared handler state.

use std::sync::Arc;

use folio_client::{ContentSource, FallbackPolicy, Loader};

use crate::config::SiteConfig;

/// State cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    /// Content loader; every page load fetches afresh.
    pub loader: Loader,
    /// Owner and presentation settings.
    pub site: Arc<SiteConfig>,
}

impl AppState {
    /// Build state over any content source.
    pub fn new(source: Arc<dyn ContentSource>, policy: FallbackPolicy, site: SiteConfig) -> Self {
        Self {
            loader: Loader::from_arc(source, policy),
            site: Arc::new(site),
        }
    }
}
