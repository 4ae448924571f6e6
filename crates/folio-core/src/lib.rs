//! Folio Core — shared record types, errors, and configuration helpers.
//!
//! This crate provides the foundational types used across all Folio crates.
//! It has no internal Folio dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`types`]: CMS record types (projects, skills, education, ...)
//! - [`dates`]: Lenient date parsing for CMS date strings
//! - [`config`]: `ConfigManager` trait and TOML helpers

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod config;
pub mod dates;
pub mod error;
pub mod types;

// Re-export key types at crate root for convenience
pub use config::ConfigManager;
pub use dates::parse_lenient;
pub use error::{Error, Result};
pub use types::{Award, Education, Experience, Narrative, Project, RecordId, Skill};
