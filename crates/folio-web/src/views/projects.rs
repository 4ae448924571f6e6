//! The projects page: search box, category and sort dropdowns, results
//! counter, card grid (or empty state), and the detail modal.

use folio_content::listing::{ALL_CATEGORIES, ALL_CATEGORIES_LABEL};
use folio_content::{CategoryFilter, ListState, SortKey, escape_html};

use super::{Nav, Page, card, modal};
use crate::query::{ListQuery, PROJECTS_PATH};

/// Render the projects page for `state` as restored from `query`.
pub fn render(state: &ListState, query: &ListQuery) -> Page {
    let view = state.view();
    let selected = query.selected_id().and_then(|id| state.find(id));
    let modal_state = selected
        .map(|project| modal::modal_state(project, query))
        .unwrap_or_default();

    let results = if state.is_empty_view() {
        empty_state(query)
    } else {
        card::grid(view.iter().copied(), |project| {
            query.with_selected(&project.id).href()
        })
    };

    let mut body = format!(
        r#"<h1>Projects</h1>{controls}{counter}{results}"#,
        controls = controls(state, query),
        counter = counter(view.len(), state.records().len()),
    );
    if let Some(project) = selected {
        body.push_str(&modal::render(project, query));
    }

    let title = selected.map_or_else(|| "Projects".to_string(), |p| p.title.clone());
    Page {
        title,
        nav: Nav::Projects,
        body,
        scroll_locked: modal_state.scroll_locked(),
    }
}

/// Search box plus the category and sort dropdowns, as a GET form so the
/// state lands in the URL.
fn controls(state: &ListState, query: &ListQuery) -> String {
    let category = state.category();
    let mut categories = option(
        ALL_CATEGORIES,
        ALL_CATEGORIES_LABEL,
        *category == CategoryFilter::All,
    );
    for name in state.categories() {
        categories.push_str(&option(name, name, category.as_param() == Some(name)));
    }

    let sorts: String = SortKey::ALL
        .iter()
        .map(|key| option(key.as_str(), key.label(), *key == state.sort()))
        .collect();

    format!(
        r#"<form class="controls" method="get" action="{PROJECTS_PATH}" role="search"><input type="search" name="q" value="{q}" placeholder="Search projects…" aria-label="Search projects"><select name="category" aria-label="Category">{categories}</select><select name="sort" aria-label="Sort by">{sorts}</select><button type="submit">Apply</button></form>"#,
        q = escape_html(query.query_text()),
    )
}

fn option(value: &str, label: &str, selected: bool) -> String {
    let selected = if selected { " selected" } else { "" };
    format!(
        r#"<option value="{}"{selected}>{}</option>"#,
        escape_html(value),
        escape_html(label)
    )
}

fn counter(shown: usize, total: usize) -> String {
    let noun = if total == 1 { "project" } else { "projects" };
    format!(r#"<p class="results-count" role="status">Showing {shown} of {total} {noun}</p>"#)
}

fn empty_state(query: &ListQuery) -> String {
    let reset = ListQuery::default().href();
    let hint = if query.canonical() == ListQuery::default() {
        "There are no projects to show yet."
    } else {
        "Try a different search or category."
    };
    format!(
        r#"<div class="empty-state"><h2>No projects found</h2><p>{hint}</p><a class="button secondary" href="{reset}">Clear filters</a></div>"#
    )
}
