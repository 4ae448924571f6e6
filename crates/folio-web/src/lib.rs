//! # folio-web
//!
//! Server-rendered portfolio site.
//!
//! - `/` hero plus featured projects
//! - `/projects` searchable, filterable, sortable grid with a detail modal
//! - `/about` skills, experience, education, and awards
//! - `/contact` email and profile links
//! - `/api/projects` the derived project list as JSON
//! - `/healthz` liveness
//!
//! All interactive state is carried in the URL (see [`query`]), so every
//! view can be bookmarked and restored on reload.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use folio_client::{FallbackPolicy, StaticSource};
//! use folio_web::{AppState, ServerConfig, SiteConfig};
//!
//! # async fn example() -> folio_web::Result<()> {
//! let state = AppState::new(
//!     Arc::new(StaticSource::bundled()),
//!     FallbackPolicy::Bundled,
//!     SiteConfig::default(),
//! );
//! folio_web::serve(state, &ServerConfig::default()).await?;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod config;
pub mod error;
pub mod health;
pub mod query;
pub mod routes;
pub mod server;
pub mod state;
pub mod views;

pub use config::{ServerConfig, SiteConfig, SiteLink};
pub use error::{Error, Result};
pub use health::HealthResponse;
pub use query::ListQuery;
pub use routes::router;
pub use server::{run, serve};
pub use state::AppState;
