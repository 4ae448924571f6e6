//! Integration tests for the CMS client and loader against a mock CMS.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::{TestHarness, envelope, project_docs, query_path};
use folio_client::{
    CmsClient, CmsConfig, ContentSource, Dataset, Error, FallbackPolicy, Loader, RecordKind,
    queries,
};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

// ----------------------------------------------------------------------------
// Successful queries
// ----------------------------------------------------------------------------

#[tokio::test]
async fn test_fetch_projects_decodes_envelope() {
    let harness = TestHarness::start().await;
    Mock::given(method("GET"))
        .and(path(query_path()))
        .and(query_param("query", queries::PROJECTS))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(project_docs())))
        .expect(1)
        .mount(&harness.server)
        .await;

    let projects = harness.client().fetch_projects().await.unwrap();
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].id.as_str(), "p-1");
    assert_eq!(projects[1].id.as_str(), "2");
    assert!(projects[0].featured);
    assert!(projects[0].images.is_empty());
}

#[tokio::test]
async fn test_each_kind_sends_its_query() {
    let harness = TestHarness::start().await;
    Mock::given(method("GET"))
        .and(path(query_path()))
        .and(query_param("query", queries::SKILLS))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            {"name": "Rust", "category": "Languages", "level": 90}
        ]))))
        .mount(&harness.server)
        .await;
    Mock::given(method("GET"))
        .and(path(query_path()))
        .and(query_param("query", queries::AWARDS))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            {"_id": "a1", "title": "Prize", "issuer": null}
        ]))))
        .mount(&harness.server)
        .await;

    let client = harness.client();
    let skills = client.fetch_skills().await.unwrap();
    assert_eq!(skills[0].name, "Rust");
    let awards = client.fetch_awards().await.unwrap();
    assert_eq!(awards[0].title, "Prize");
    assert!(awards[0].issuer.is_none());
}

#[tokio::test]
async fn test_bearer_token_is_sent() {
    let harness = TestHarness::start().await;
    Mock::given(method("GET"))
        .and(path(query_path()))
        .and(header("authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(project_docs())))
        .expect(1)
        .mount(&harness.server)
        .await;

    let config = CmsConfig {
        token: Some("secret-token".into()),
        ..harness.config()
    };
    let client = CmsClient::new(&config).unwrap();
    assert_eq!(client.fetch_projects().await.unwrap().len(), 2);
}

// ----------------------------------------------------------------------------
// Failures
// ----------------------------------------------------------------------------

#[tokio::test]
async fn test_server_error_is_status_error() {
    let harness = TestHarness::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&harness.server)
        .await;

    let err = harness.client().fetch_projects().await.unwrap_err();
    assert!(matches!(
        err,
        Error::Status {
            kind: RecordKind::Projects,
            status: 503,
            ..
        }
    ));
    assert_eq!(
        err.to_string(),
        "CMS returned HTTP 503 for projects: maintenance"
    );
}

#[tokio::test]
async fn test_empty_result_is_error() {
    let harness = TestHarness::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([]))))
        .mount(&harness.server)
        .await;

    let err = harness.client().fetch_education().await.unwrap_err();
    assert!(matches!(
        err,
        Error::EmptyResult {
            kind: RecordKind::Education
        }
    ));
}

#[tokio::test]
async fn test_null_result_is_empty_error() {
    let harness = TestHarness::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": null})))
        .mount(&harness.server)
        .await;

    let err = harness.client().fetch_experience().await.unwrap_err();
    assert!(matches!(err, Error::EmptyResult { .. }));
}

#[tokio::test]
async fn test_malformed_record_is_decode_error() {
    let harness = TestHarness::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(json!([{"id": "x", "title": "No category"}]))),
        )
        .mount(&harness.server)
        .await;

    let err = harness.client().fetch_projects().await.unwrap_err();
    assert!(matches!(
        err,
        Error::Decode {
            kind: RecordKind::Projects,
            ..
        }
    ));
}

#[tokio::test]
async fn test_bad_record_is_skipped_and_null_images_are_dropped() {
    let harness = TestHarness::start().await;
    let records = json!([
        {
            "_id": "p-1",
            "title": "Alpha",
            "category": "Web",
            "date": "2024-01-01",
            "description": "Has an image without an asset",
            "images": ["https://cdn.example/a.png", null]
        },
        {"_id": "p-2", "title": "No category"},
        {
            "_id": "p-3",
            "title": "Gamma",
            "category": "Data",
            "date": "2025-01-01",
            "description": "Plain"
        }
    ]);
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(records)))
        .mount(&harness.server)
        .await;

    let projects = harness.client().fetch_projects().await.unwrap();
    let ids: Vec<&str> = projects.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p-1", "p-3"]);
    assert_eq!(projects[0].images, vec!["https://cdn.example/a.png"]);
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    let config = CmsConfig {
        base_url: "http://127.0.0.1:9".into(),
        timeout_secs: 1,
        ..CmsConfig::default()
    };
    let err = CmsClient::new(&config)
        .unwrap()
        .fetch_projects()
        .await
        .unwrap_err();
    assert!(err.is_transport());
}

// ----------------------------------------------------------------------------
// Loader over the real client
// ----------------------------------------------------------------------------

#[tokio::test]
async fn test_loader_masks_cms_failure_with_bundled_data() {
    let harness = TestHarness::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&harness.server)
        .await;

    let loader = Loader::new(harness.client(), FallbackPolicy::Bundled);
    assert_eq!(loader.projects().await, Dataset::bundled().projects);

    let loader = Loader::new(harness.client(), FallbackPolicy::Empty);
    assert!(loader.projects().await.is_empty());
}

#[tokio::test]
async fn test_loader_issues_one_request_per_call() {
    let harness = TestHarness::start().await;
    Mock::given(method("GET"))
        .and(query_param("query", queries::PROJECTS))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(project_docs())))
        .expect(2)
        .mount(&harness.server)
        .await;

    let loader = Loader::new(harness.client(), FallbackPolicy::Empty);
    assert_eq!(loader.projects().await.len(), 2);
    assert_eq!(loader.projects().await.len(), 2);
}
