//! Shared helpers for folio-web integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use folio_client::{ContentSource, FallbackPolicy, StaticSource};
use folio_core::Project;
use folio_web::{AppState, SiteConfig, router};
use http::{HeaderMap, Request, StatusCode};
use tower::ServiceExt;

/// Upper bound on response bodies read in tests.
const BODY_LIMIT: usize = 1 << 20;

/// A response reduced to what assertions need.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("response body is JSON")
    }
}

/// Router over an arbitrary source.
pub fn app_with(source: impl ContentSource + 'static, policy: FallbackPolicy) -> Router {
    router(AppState::new(Arc::new(source), policy, SiteConfig::default()))
}

/// Router over the bundled dataset.
pub fn app() -> Router {
    app_with(StaticSource::bundled(), FallbackPolicy::Bundled)
}

/// Router over a small, predictable project list.
pub fn small_app() -> Router {
    app_with(
        StaticSource::with_projects(vec![
            Project::new("1", "Alpha", "Web", "2024-01-01", "first"),
            Project::new("2", "Beta", "Data", "2024-06-01", "second")
                .with_images(["/a.png", "/b.png"]),
            Project::new("3", "Gamma", "Web", "2025-01-01", "third"),
        ]),
        FallbackPolicy::Empty,
    )
}

/// Issue a GET through the router without a listener.
pub async fn get(app: Router, uri: &str) -> TestResponse {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("valid request");
    let response = app.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), BODY_LIMIT)
        .await
        .expect("readable body");
    TestResponse {
        status,
        headers,
        body: String::from_utf8_lossy(&bytes).into_owned(),
    }
}

/// Record ids in card order.
pub fn card_ids(html: &str) -> Vec<String> {
    html.split(r#"data-record-id=""#)
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .map(str::to_string)
        .collect()
}
