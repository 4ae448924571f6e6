//! Health check endpoint.

use axum::Json;
use axum::extract::State;
use folio_client::FallbackPolicy;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Server status ("healthy").
    pub status: String,
    /// Server name.
    pub server_name: String,
    /// Server version.
    pub version: String,
    /// Name of the content source (`cms` or `static`).
    pub source: String,
    /// What is served when the source fails.
    pub fallback: FallbackPolicy,
}

impl HealthResponse {
    /// Report for the given state. The content source is not contacted.
    pub fn for_state(state: &AppState) -> Self {
        Self {
            status: "healthy".to_string(),
            server_name: "folio".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            source: state.loader.source().name().to_string(),
            fallback: state.loader.policy(),
        }
    }
}

/// `GET /healthz`
pub async fn healthz(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::for_state(&state))
}
