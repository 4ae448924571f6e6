//! URL state for the projects page.
//!
//! Every piece of interactive state lives in the query string so filtered
//! views and open records are shareable and survive a reload:
//!
//! | Param      | Meaning                    | Default (omitted from URLs) |
//! |------------|----------------------------|-----------------------------|
//! | `q`        | search text                | empty                       |
//! | `category` | category label or `all`    | `all`                       |
//! | `sort`     | `dateDesc`, `dateAsc`, ... | `dateDesc`                  |
//! | `selected` | open record id             | none (modal closed)         |
//! | `image`    | gallery index              | `0`                         |

use folio_content::{CategoryFilter, ListState, SortKey};
use folio_core::{Project, RecordId};
use serde::{Deserialize, Serialize};

/// Path of the projects page.
pub const PROJECTS_PATH: &str = "/projects";

/// Query parameters accepted by `/projects` and `/api/projects`.
///
/// Values are kept as raw strings so malformed input degrades to defaults
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// Search text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    /// Category label, or `all`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Sort key URL form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Id of the record shown in the modal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<String>,
    /// Gallery index within the selected record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ListQuery {
    /// Search text, empty when absent.
    pub fn query_text(&self) -> &str {
        self.q.as_deref().unwrap_or_default()
    }

    /// Category filter; missing or `all` means no filtering.
    pub fn category_filter(&self) -> CategoryFilter {
        CategoryFilter::from_param(self.category.as_deref())
    }

    /// Sort key; unknown values fall back to newest first.
    pub fn sort_key(&self) -> SortKey {
        SortKey::from_param(self.sort.as_deref())
    }

    /// Selected record id, if any.
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// Gallery index; anything unparseable is the first image.
    pub fn image_index(&self) -> usize {
        self.image
            .as_deref()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Restore the list state this URL describes over freshly fetched records.
    pub fn list_state(&self, records: Vec<Project>) -> ListState {
        ListState::new(records)
            .with_query(self.query_text())
            .with_category(self.category_filter())
            .with_sort(self.sort_key())
    }

    /// Same view with a different record selected. The gallery index is
    /// dropped so the new record opens on its first image.
    pub fn with_selected(&self, id: &RecordId) -> Self {
        Self {
            selected: Some(id.to_string()),
            image: None,
            ..self.clone()
        }
    }

    /// Same view with the modal closed.
    pub fn without_selected(&self) -> Self {
        Self {
            selected: None,
            image: None,
            ..self.clone()
        }
    }

    /// Same view with the gallery at `index`.
    pub fn with_image(&self, index: usize) -> Self {
        Self {
            image: Some(index.to_string()),
            ..self.clone()
        }
    }

    /// Equivalent query with every default value removed.
    pub fn canonical(&self) -> Self {
        let q = Some(self.query_text().trim())
            .filter(|q| !q.is_empty())
            .map(str::to_string);
        let category = self.category_filter().as_param().map(str::to_string);
        let sort = Some(self.sort_key())
            .filter(|key| *key != SortKey::default())
            .map(|key| key.as_str().to_string());
        let selected = self.selected_id().map(str::to_string);
        let image = selected
            .as_ref()
            .and(Some(self.image_index()))
            .filter(|i| *i > 0)
            .map(|i| i.to_string());

        Self {
            q,
            category,
            sort,
            selected,
            image,
        }
    }

    /// Query string of the canonical form, without the leading `?`.
    pub fn to_query_string(&self) -> String {
        serde_urlencoded::to_string(self.canonical()).unwrap_or_default()
    }

    /// Canonical link to the projects page for this state.
    pub fn href(&self) -> String {
        match self.to_query_string() {
            qs if qs.is_empty() => PROJECTS_PATH.to_string(),
            qs => format!("{PROJECTS_PATH}?{qs}"),
        }
    }
}
