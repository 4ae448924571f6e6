//! Router and page handlers.
//!
//! Every handler fetches afresh through the [`Loader`](folio_client::Loader),
//! so content edits in the CMS show up on the next page load. Fetch failures
//! never surface as error pages; the loader has already logged them and
//! substituted the fallback.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Json, Router};
use folio_content::ListState;
use folio_core::{Project, RecordId};
use http::{StatusCode, Uri};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::health::healthz;
use crate::query::{ListQuery, PROJECTS_PATH};
use crate::state::AppState;
use crate::views::{self, Page, layout};

/// Build the site router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route(PROJECTS_PATH, get(projects))
        .route("/projects/{id}", get(project))
        .route("/about", get(about))
        .route("/contact", get(contact))
        .route("/api/projects", get(api_projects))
        .route("/healthz", get(healthz))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn html(state: &AppState, page: &Page) -> Html<String> {
    Html(layout::render(&state.site, page))
}

/// Malformed query strings degrade to the default view.
fn list_query(query: Result<Query<ListQuery>, QueryRejection>) -> ListQuery {
    match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Ignoring malformed query string");
            ListQuery::default()
        }
    }
}

// ============================================================================
// Pages
// ============================================================================

async fn home(State(state): State<AppState>) -> Html<String> {
    let projects = state.loader.projects().await;
    html(&state, &views::home::render(&state.site, &projects))
}

async fn projects(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Html<String> {
    let query = list_query(query);
    let list = query.list_state(state.loader.projects().await);
    html(&state, &views::projects::render(&list, &query))
}

/// Deep links to a single project open the modal over the full list.
async fn project(Path(id): Path<String>) -> Redirect {
    let target = ListQuery::default().with_selected(&RecordId::new(id)).href();
    Redirect::to(&target)
}

async fn about(State(state): State<AppState>) -> Html<String> {
    let profile = state.loader.profile().await;
    html(&state, &views::about::render(&state.site, &profile))
}

async fn contact(State(state): State<AppState>) -> Html<String> {
    html(&state, &views::contact::render(&state.site))
}

async fn not_found(State(state): State<AppState>, uri: Uri) -> Response {
    let page = views::not_found::render(uri.path());
    (StatusCode::NOT_FOUND, html(&state, &page)).into_response()
}

// ============================================================================
// JSON
// ============================================================================

/// The derived project list as served by `/api/projects`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsResponse<'a> {
    /// Records fetched before filtering.
    pub total: usize,
    /// Records in the derived view.
    pub count: usize,
    /// Canonical query string of the view, without `?`.
    pub query: String,
    /// Every category of the fetched records, alphabetical.
    pub categories: Vec<&'a str>,
    /// The derived view, in display order.
    pub projects: Vec<&'a Project>,
}

impl<'a> ProjectsResponse<'a> {
    /// Summarize `list` as restored from `query`.
    pub fn new(list: &'a ListState, query: &ListQuery) -> Self {
        let projects = list.view();
        Self {
            total: list.records().len(),
            count: projects.len(),
            query: query.to_query_string(),
            categories: list.categories(),
            projects,
        }
    }
}

async fn api_projects(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Response {
    let query = list_query(query);
    let list = query.list_state(state.loader.projects().await);
    Json(ProjectsResponse::new(&list, &query)).into_response()
}
