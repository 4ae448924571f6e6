//! Modal lifecycle and keyboard focus handling.
//!
//! ```text
//!            open(record)                 close / backdrop / Escape
//!  Closed ───────────────▶ Open{id, gallery@0} ─────────────────────▶ Closed
//!                            │   ▲
//!                            └───┘ open(other record): gallery back to 0
//! ```

use folio_core::{Project, RecordId};

use super::gallery::Gallery;
use crate::keys::Key;

// ============================================================================
// ModalState
// ============================================================================

/// Open/closed state of the detail modal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    /// No record selected; page scrolls normally.
    #[default]
    Closed,
    /// Showing one record.
    Open {
        /// Selected record.
        record_id: RecordId,
        /// Gallery for that record.
        gallery: Gallery,
    },
}

impl ModalState {
    /// Open for `project`. The gallery always restarts at the first image.
    pub fn open(&mut self, project: &Project) {
        log::debug!("Opening detail modal for {}", project.id);
        *self = ModalState::Open {
            record_id: project.id.clone(),
            gallery: Gallery::for_project(project),
        };
    }

    /// Close (close button, backdrop click, or Escape).
    pub fn close(&mut self) {
        *self = ModalState::Closed;
    }

    /// A click landed on the backdrop outside the modal content.
    pub fn backdrop_click(&mut self) {
        self.close();
    }

    /// Whether the modal is open.
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open { .. })
    }

    /// Page scroll is suppressed exactly while the modal is open.
    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }

    /// The selected record, if open.
    pub fn selected(&self) -> Option<&RecordId> {
        match self {
            ModalState::Open { record_id, .. } => Some(record_id),
            ModalState::Closed => None,
        }
    }

    /// The gallery, if open.
    pub fn gallery(&self) -> Option<&Gallery> {
        match self {
            ModalState::Open { gallery, .. } => Some(gallery),
            ModalState::Closed => None,
        }
    }

    /// Show image `index` in the open gallery. Returns `false` when closed
    /// or out of range.
    pub fn show_image(&mut self, index: usize) -> bool {
        match self {
            ModalState::Open { gallery, .. } => gallery.go_to(index),
            ModalState::Closed => false,
        }
    }

    /// Handle a key press while the modal may be open. Returns `true` when
    /// the key was consumed.
    ///
    /// Escape closes; left/right arrows page through the gallery.
    pub fn handle_key(&mut self, key: Key) -> bool {
        let ModalState::Open { gallery, .. } = self else {
            return false;
        };
        match key {
            Key::Escape => {}
            Key::ArrowLeft if gallery.has_navigation() => {
                gallery.previous();
                return true;
            }
            Key::ArrowRight if gallery.has_navigation() => {
                gallery.next();
                return true;
            }
            _ => return false,
        }
        self.close();
        true
    }
}

// ============================================================================
// FocusTrap
// ============================================================================

/// Keeps keyboard focus cycling through the modal's focusable elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusTrap {
    count: usize,
    current: Option<usize>,
}

impl FocusTrap {
    /// Trap over `count` focusable elements, nothing focused yet.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            current: None,
        }
    }

    /// Trap with element `index` already focused (clamped to the range).
    pub fn with_focus(mut self, index: usize) -> Self {
        self.current = (self.count > 0).then(|| index.min(self.count - 1));
        self
    }

    /// Number of focusable elements.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Focus the first element (done when the modal opens).
    pub fn focus_first(&mut self) -> Option<usize> {
        self.current = (self.count > 0).then_some(0);
        self.current
    }

    /// Currently focused element.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Move focus for Tab / Shift+Tab, wrapping at both ends. Returns the
    /// newly focused index, or `None` when the key is not a Tab key or
    /// there is nothing focusable.
    pub fn handle(&mut self, key: Key) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        let last = self.count - 1;
        let next = match (key, self.current) {
            (Key::Tab, None) => 0,
            (Key::Tab, Some(i)) if i >= last => 0,
            (Key::Tab, Some(i)) => i + 1,
            (Key::ShiftTab, None) => last,
            (Key::ShiftTab, Some(0)) => last,
            (Key::ShiftTab, Some(i)) => (i - 1).min(last),
            _ => return None,
        };
        self.current = Some(next);
        self.current
    }
}
