//! Common test utilities for folio-client integration tests.

use folio_client::{CmsClient, CmsConfig, FallbackPolicy};
use serde_json::{Value, json};
use wiremock::MockServer;

/// API version and dataset used by every test client.
pub const API_VERSION: &str = "2024-01-01";
pub const DATASET: &str = "test";

/// Path the client should request.
pub fn query_path() -> String {
    format!("/v{API_VERSION}/data/query/{DATASET}")
}

/// Test harness wrapping a mock CMS.
pub struct TestHarness {
    /// The mock CMS server
    pub server: MockServer,
}

impl TestHarness {
    /// Start a fresh mock CMS.
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// CMS configuration pointing at the mock server.
    pub fn config(&self) -> CmsConfig {
        CmsConfig {
            base_url: self.server.uri(),
            dataset: DATASET.to_string(),
            api_version: API_VERSION.to_string(),
            token: None,
            timeout_secs: 2,
            fallback: FallbackPolicy::Bundled,
        }
    }

    /// A client for the mock server.
    pub fn client(&self) -> CmsClient {
        CmsClient::new(&self.config()).expect("client builds")
    }
}

/// A query response envelope.
pub fn envelope(records: Value) -> Value {
    json!({ "query": "...", "ms": 3, "result": records })
}

/// Two CMS-shaped project documents.
pub fn project_docs() -> Value {
    json!([
        {
            "id": "p-1",
            "title": "Alpha",
            "category": "Web",
            "date": "2025-1-19",
            "description": "First",
            "images": null,
            "technologies": ["Rust"],
            "challenges": "One big one",
            "featured": true
        },
        {
            "id": 2,
            "title": "Beta",
            "category": "Data",
            "date": "2024-06-01",
            "description": "Second",
            "outcomes": ["a", "b"],
            "pdf": null
        }
    ])
}
