//! List state controller.
//!
//! [`ListState`] owns the fetched projects plus the three pieces of UI
//! state (search text, category, sort key) and derives the visible list.
//! Derivation is pure: it borrows the source records and never reorders
//! or mutates them.
//!
//! # Pipeline
//!
//! ```text
//! records ──▶ matches_query ──▶ matches_category ──▶ sort_records ──▶ view
//! ```

mod proptests;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use folio_core::Project;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// URL/query value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Dropdown label for the "all" sentinel.
pub const ALL_CATEGORIES_LABEL: &str = "All Categories";

// ============================================================================
// SortKey
// ============================================================================

/// The four orderings offered by the sort dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Newest first.
    #[default]
    DateDesc,
    /// Oldest first.
    DateAsc,
    /// Title A → Z.
    NameAsc,
    /// Title Z → A.
    NameDesc,
}

impl SortKey {
    /// All keys in dropdown order.
    pub const ALL: [SortKey; 4] = [
        SortKey::DateDesc,
        SortKey::DateAsc,
        SortKey::NameAsc,
        SortKey::NameDesc,
    ];

    /// URL form, e.g. `dateDesc`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::DateDesc => "dateDesc",
            SortKey::DateAsc => "dateAsc",
            SortKey::NameAsc => "nameAsc",
            SortKey::NameDesc => "nameDesc",
        }
    }

    /// Dropdown label.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::DateDesc => "Newest first",
            SortKey::DateAsc => "Oldest first",
            SortKey::NameAsc => "Name (A–Z)",
            SortKey::NameDesc => "Name (Z–A)",
        }
    }

    /// Parse a URL value, falling back to the default for unknown input.
    pub fn from_param(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown sort key '{s}'"))
    }
}

// ============================================================================
// CategoryFilter
// ============================================================================

/// Category selection: everything, or one exact category label.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// The "all" sentinel: no filtering.
    #[default]
    All,
    /// Exact, case-sensitive match on the category field.
    Only(String),
}

impl CategoryFilter {
    /// Parse a URL value; missing, empty, or `all` selects everything.
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => CategoryFilter::All,
            Some(v) if v.eq_ignore_ascii_case(ALL_CATEGORIES) => CategoryFilter::All,
            Some(v) => CategoryFilter::Only(v.to_string()),
        }
    }

    /// URL value, `None` for the sentinel.
    pub fn as_param(&self) -> Option<&str> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Only(c) => Some(c),
        }
    }

    /// Whether this filter selects the given category label.
    pub fn selects(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c == category,
        }
    }
}

// ============================================================================
// Pure derivation steps
// ============================================================================

/// Case-insensitive substring search over title, description, category,
/// technologies, and tags. An empty (or blank) query matches everything.
pub fn matches_query(project: &Project, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    let hit = |field: &String| field.to_lowercase().contains(&needle);

    hit(&project.title)
        || hit(&project.description)
        || hit(&project.category)
        || project.technologies.iter().any(hit)
        || project.tags.iter().any(hit)
}

/// Exact category equality; the `All` sentinel skips the check.
pub fn matches_category(project: &Project, filter: &CategoryFilter) -> bool {
    filter.selects(&project.category)
}

/// Title ordering: accents and case folded first, then accent-preserving
/// case-insensitive, then case-sensitive so the order is total.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    fold_title(a)
        .cmp(&fold_title(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// Decompose, strip combining marks, and lowercase (`Éclair` → `eclair`).
fn fold_title(title: &str) -> String {
    title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Date ordering. Records with unparseable dates are older than any dated
/// record.
pub fn compare_dates(a: &Project, b: &Project) -> Ordering {
    a.parsed_date().cmp(&b.parsed_date())
}

/// Sort borrowed records in place by the given key (stable sort; ties
/// keep their incoming order).
pub fn sort_records(records: &mut [&Project], key: SortKey) {
    match key {
        SortKey::DateDesc => records.sort_by(|a, b| compare_dates(b, a)),
        SortKey::DateAsc => records.sort_by(|a, b| compare_dates(a, b)),
        SortKey::NameAsc => records.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        SortKey::NameDesc => records.sort_by(|a, b| compare_titles(&b.title, &a.title)),
    }
}

/// Distinct categories, alphabetically ordered.
pub fn categories(records: &[Project]) -> Vec<&str> {
    let mut out: Vec<&str> = records.iter().map(|p| p.category.as_str()).collect();
    out.sort_by(|a, b| compare_titles(a, b));
    out.dedup();
    out
}

/// Homepage subset: projects flagged `featured`, newest first. When no
/// project is flagged, the newest `limit` projects stand in.
pub fn featured(records: &[Project], limit: usize) -> Vec<&Project> {
    let mut picked: Vec<&Project> = records.iter().filter(|p| p.featured).collect();
    if picked.is_empty() {
        picked = records.iter().collect();
    }
    sort_records(&mut picked, SortKey::DateDesc);
    picked.truncate(limit);
    picked
}

// ============================================================================
// ListState
// ============================================================================

/// Fetched projects plus the UI state that derives the visible list.
#[derive(Debug, Clone, Default)]
pub struct ListState {
    records: Vec<Project>,
    query: String,
    category: CategoryFilter,
    sort: SortKey,
}

impl ListState {
    /// Wrap a freshly fetched record set with default UI state.
    pub fn new(records: Vec<Project>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Builder: set the search query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.set_query(query);
        self
    }

    /// Builder: set the category filter.
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Builder: set the sort key.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Replace the search query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Replace the category filter.
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    /// Replace the sort key.
    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    /// Replace the source records (a new fetch completed).
    pub fn set_records(&mut self, records: Vec<Project>) {
        self.records = records;
    }

    /// The full source list, in fetch order.
    pub fn records(&self) -> &[Project] {
        &self.records
    }

    /// Current search query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current category filter.
    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    /// Current sort key.
    pub fn sort(&self) -> SortKey {
        self.sort
    }

    /// The derived view: filtered by query and category, then sorted.
    pub fn view(&self) -> Vec<&Project> {
        let mut out: Vec<&Project> = self
            .records
            .iter()
            .filter(|p| matches_query(p, &self.query))
            .filter(|p| matches_category(p, &self.category))
            .collect();
        sort_records(&mut out, self.sort);
        out
    }

    /// Number of records in the derived view.
    pub fn result_count(&self) -> usize {
        self.view().len()
    }

    /// Whether the derived view is empty (the "no projects found" state).
    pub fn is_empty_view(&self) -> bool {
        self.result_count() == 0
    }

    /// Distinct categories of the loaded records, alphabetical.
    pub fn categories(&self) -> Vec<&str> {
        categories(&self.records)
    }

    /// Look up a record by id in the full source list.
    pub fn find(&self, id: &str) -> Option<&Project> {
        self.records.iter().find(|p| p.id.as_str() == id)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Vec<Project> {
        vec![
            Project::new("1", "Alpha", "Web", "2024-01-01", "A web thing")
                .with_technologies(["Rust", "Axum"]),
            Project::new("2", "Beta", "Data", "2024-06-01", "Numbers")
                .with_tags(["pipeline"]),
            Project::new("3", "Gamma", "Web", "2025-1-1", "Newest one"),
        ]
    }

    fn titles(view: &[&Project]) -> Vec<String> {
        view.iter().map(|p| p.title.clone()).collect()
    }

    // ------------------------------------------------------------------------
    // SortKey / CategoryFilter parsing
    // ------------------------------------------------------------------------

    #[test]
    fn test_sort_key_roundtrip_strings() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_sort_key_from_param_falls_back() {
        assert_eq!(SortKey::from_param(None), SortKey::DateDesc);
        assert_eq!(SortKey::from_param(Some("bogus")), SortKey::DateDesc);
        assert_eq!(SortKey::from_param(Some("nameasc")), SortKey::NameAsc);
    }

    #[test]
    fn test_sort_key_serde_form() {
        let json = serde_json::to_string(&SortKey::DateAsc).unwrap();
        assert_eq!(json, "\"dateAsc\"");
    }

    #[test]
    fn test_category_filter_from_param() {
        assert_eq!(CategoryFilter::from_param(None), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_param(Some("")), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_param(Some("ALL")), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_param(Some("Web")),
            CategoryFilter::Only("Web".into())
        );
        assert_eq!(CategoryFilter::All.as_param(), None);
    }

    // ------------------------------------------------------------------------
    // Filtering
    // ------------------------------------------------------------------------

    #[test]
    fn test_query_matches_any_field() {
        let data = dataset();
        assert!(matches_query(&data[0], "AXUM"));
        assert!(matches_query(&data[1], "pipe"));
        assert!(matches_query(&data[1], "data"));
        assert!(matches_query(&data[2], "newest"));
        assert!(!matches_query(&data[0], "numbers"));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let state = ListState::new(dataset()).with_query("   ");
        assert_eq!(state.result_count(), 3);
    }

    #[test]
    fn test_category_filter_is_exact() {
        let state = ListState::new(dataset()).with_category(CategoryFilter::Only("web".into()));
        assert!(state.view().is_empty());

        let state = ListState::new(dataset()).with_category(CategoryFilter::Only("Web".into()));
        assert!(state.view().iter().all(|p| p.category == "Web"));
        assert_eq!(state.result_count(), 2);
    }

    #[test]
    fn test_search_is_independent_of_sort() {
        for key in SortKey::ALL {
            let state = ListState::new(dataset()).with_query("alpha").with_sort(key);
            assert_eq!(titles(&state.view()), ["Alpha"]);
        }
    }

    // ------------------------------------------------------------------------
    // Sorting
    // ------------------------------------------------------------------------

    #[test]
    fn test_sort_date_desc_example() {
        let state = ListState::new(dataset());
        assert_eq!(titles(&state.view()), ["Gamma", "Beta", "Alpha"]);
    }

    #[test]
    fn test_sort_date_asc() {
        let state = ListState::new(dataset()).with_sort(SortKey::DateAsc);
        assert_eq!(titles(&state.view()), ["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn test_sort_names_case_insensitive() {
        let records = vec![
            Project::new("1", "beta", "X", "2024-01-01", ""),
            Project::new("2", "Alpha", "X", "2024-01-01", ""),
            Project::new("3", "alpha", "X", "2024-01-01", ""),
        ];
        let state = ListState::new(records).with_sort(SortKey::NameAsc);
        assert_eq!(titles(&state.view()), ["Alpha", "alpha", "beta"]);

        let state = state.with_sort(SortKey::NameDesc);
        assert_eq!(titles(&state.view()), ["beta", "alpha", "Alpha"]);
    }

    #[test]
    fn test_sort_names_folds_accents() {
        let records = vec![
            Project::new("1", "Zeta", "X", "2024-01-01", ""),
            Project::new("2", "Éclair", "X", "2024-01-01", ""),
            Project::new("3", "Alpha", "X", "2024-01-01", ""),
            Project::new("4", "eclair", "X", "2024-01-01", ""),
        ];
        let state = ListState::new(records).with_sort(SortKey::NameAsc);
        assert_eq!(titles(&state.view()), ["Alpha", "eclair", "Éclair", "Zeta"]);
    }

    #[test]
    fn test_categories_fold_accents() {
        let records = vec![
            Project::new("1", "A", "Zoology", "2024-01-01", ""),
            Project::new("2", "B", "Écologie", "2024-01-01", ""),
            Project::new("3", "C", "Art", "2024-01-01", ""),
        ];
        assert_eq!(categories(&records), ["Art", "Écologie", "Zoology"]);
    }

    #[test]
    fn test_undated_records_sort_oldest() {
        let records = vec![
            Project::new("1", "Undated", "X", "someday", ""),
            Project::new("2", "Dated", "X", "2020-01-01", ""),
        ];
        let state = ListState::new(records).with_sort(SortKey::DateDesc);
        assert_eq!(titles(&state.view()), ["Dated", "Undated"]);
    }

    #[test]
    fn test_view_does_not_mutate_source() {
        let state = ListState::new(dataset()).with_sort(SortKey::NameDesc);
        let _ = state.view();
        let ids: Vec<&str> = state.records().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    // ------------------------------------------------------------------------
    // Categories / featured / find
    // ------------------------------------------------------------------------

    #[test]
    fn test_categories_distinct_sorted() {
        let state = ListState::new(dataset());
        assert_eq!(state.categories(), ["Data", "Web"]);
    }

    #[test]
    fn test_categories_empty() {
        assert!(ListState::default().categories().is_empty());
    }

    #[test]
    fn test_featured_prefers_flagged() {
        let mut data = dataset();
        data[0] = data[0].clone().as_featured();
        let picked = featured(&data, 3);
        assert_eq!(titles(&picked), ["Alpha"]);
    }

    #[test]
    fn test_featured_falls_back_to_newest() {
        let data = dataset();
        let picked = featured(&data, 2);
        assert_eq!(titles(&picked), ["Gamma", "Beta"]);
    }

    #[test]
    fn test_find_by_id() {
        let state = ListState::new(dataset());
        assert_eq!(state.find("2").map(|p| p.title.as_str()), Some("Beta"));
        assert!(state.find("99").is_none());
    }

    #[test]
    fn test_setters_recompute_view() {
        let mut state = ListState::new(dataset());
        state.set_query("a");
        state.set_category(CategoryFilter::Only("Web".into()));
        state.set_sort(SortKey::NameAsc);
        assert_eq!(titles(&state.view()), ["Alpha", "Gamma"]);

        state.set_records(vec![Project::new("9", "Zeta", "Web", "2020-01-01", "a")]);
        assert_eq!(titles(&state.view()), ["Zeta"]);
    }

    #[test]
    fn test_empty_view_state() {
        let state = ListState::new(dataset()).with_query("nothing matches this");
        assert!(state.is_empty_view());
        assert_eq!(state.result_count(), 0);
        assert!(!ListState::new(dataset()).is_empty_view());
    }
}
