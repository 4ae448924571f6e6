//! Detail modal models.
//!
//! - [`Gallery`]: deduplicated images with wrap-around navigation
//! - [`DetailView`]: which sections the modal shows for a record
//! - [`ModalState`]: closed/open state machine
//! - [`FocusTrap`]: Tab / Shift+Tab cycling inside the open modal

mod gallery;
mod modal;
mod view;

pub use gallery::{Gallery, Indicator};
pub use modal::{FocusTrap, ModalState};
pub use view::{Actions, Body, DetailView, NarrativeView};
