//! Folio Client — the data-fetch adapter.
//!
//! Pages never talk to the CMS directly. They ask a [`Loader`] for records,
//! and the loader asks a [`ContentSource`]:
//!
//! - [`CmsClient`]: HTTP client for the headless CMS query endpoint
//! - [`StaticSource`]: in-memory records (tests and offline serving)
//!
//! A fetch that fails is logged and masked according to the configured
//! [`FallbackPolicy`]: either the bundled [`Dataset`] or an empty list.
//!
//! # Example
//!
//! ```rust,no_run
//! use folio_client::{CmsClient, CmsConfig, Loader};
//!
//! # async fn example() -> folio_client::Result<()> {
//! let config = CmsConfig::default();
//! let client = CmsClient::new(&config)?;
//! let loader = Loader::new(client, config.fallback);
//!
//! let projects = loader.projects().await;
//! println!("{} projects", projects.len());
//! # Ok(())
//! # }
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod client;
pub mod config;
pub mod error;
pub mod fallback;
pub mod loader;
pub mod queries;
pub mod source;

pub use client::CmsClient;
pub use config::{CmsConfig, FallbackPolicy};
pub use error::{Error, Result};
pub use fallback::Dataset;
pub use loader::Loader;
pub use queries::RecordKind;
pub use source::{ContentSource, StaticSource};
