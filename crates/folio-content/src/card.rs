//! Card model for the project grid.
//!
//! A card shows the image (only when there is one), category, title, a
//! truncated description, and at most three technology tags. Extra tags
//! are dropped without a "+N" marker.

use folio_core::{Project, RecordId};

use crate::keys::Key;

/// Maximum technology tags shown on a card.
pub const MAX_CARD_TECHNOLOGIES: usize = 3;

/// Maximum excerpt length in characters, before the ellipsis.
pub const EXCERPT_CHARS: usize = 140;

/// Everything needed to render one card.
#[derive(Debug, Clone, PartialEq)]
pub struct Card<'a> {
    /// Record the card selects.
    pub id: &'a RecordId,
    /// Primary image; `None` means no image block at all.
    pub image: Option<&'a str>,
    /// Category label.
    pub category: &'a str,
    /// Title.
    pub title: &'a str,
    /// Description, truncated at a word boundary.
    pub excerpt: String,
    /// Leading technology tags.
    pub technologies: &'a [String],
}

impl<'a> Card<'a> {
    /// Build the card for a project.
    pub fn from_project(project: &'a Project) -> Self {
        let shown = project.technologies.len().min(MAX_CARD_TECHNOLOGIES);
        Self {
            id: &project.id,
            image: project.primary_image(),
            category: &project.category,
            title: &project.title,
            excerpt: truncate_words(&project.description, EXCERPT_CHARS),
            technologies: &project.technologies[..shown],
        }
    }

    /// Whether a key press on a focused card selects it.
    pub fn activates_on(key: Key) -> bool {
        matches!(key, Key::Enter | Key::Space)
    }
}

/// Truncate `text` to at most `max` characters, cutting back to the last
/// word boundary and appending an ellipsis when anything was removed.
pub fn truncate_words(text: &str, max: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max {
        return text.to_string();
    }

    let cut: String = text.chars().take(max).collect();
    let trimmed = match cut.rfind(char::is_whitespace) {
        Some(pos) if pos > 0 => &cut[..pos],
        _ => cut.as_str(),
    };
    format!("{}…", trimmed.trim_end_matches(|c: char| c.is_whitespace() || c == ',' || c == '.'))
}
