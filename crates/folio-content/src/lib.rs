//! Project discovery and presentation models.
//!
//! Everything in this crate is pure: it takes records that were already
//! fetched and derives what a page should show. Rendering to HTML lives in
//! `folio-web`; fetching lives in `folio-client`.
//!
//! # Modules
//!
//! - [`listing`]: search/category/sort state and the derived view
//! - [`card`]: per-record card model for the grid
//! - [`detail`]: gallery, detail sections, modal state, focus trap
//! - [`richtext`]: trusted rich-text rendering and HTML escaping
//! - [`keys`]: keyboard input shared by cards, modal, and focus trap
//!
//! # Example
//!
//! ```rust
//! use folio_content::listing::{ListState, SortKey};
//! use folio_core::Project;
//!
//! let state = ListState::new(vec![
//!     Project::new("1", "Alpha", "Web", "2024-01-01", "first"),
//!     Project::new("2", "Gamma", "Web", "2025-01-01", "third"),
//! ])
//! .with_sort(SortKey::DateDesc);
//!
//! let titles: Vec<&str> = state.view().iter().map(|p| p.title.as_str()).collect();
//! assert_eq!(titles, ["Gamma", "Alpha"]);
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod card;
pub mod detail;
pub mod keys;
pub mod listing;
pub mod richtext;

pub use card::Card;
pub use detail::{DetailView, FocusTrap, Gallery, ModalState};
pub use keys::Key;
pub use listing::{CategoryFilter, ListState, SortKey};
pub use richtext::{escape_html, render_trusted};
