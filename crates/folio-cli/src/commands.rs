//! `serve`, `projects`, and `categories`.

use folio_content::{CategoryFilter, ListState, SortKey};
use folio_core::Project;
use serde::Serialize;

use crate::Result;
use crate::config::FolioConfig;

/// Filters for `folio projects`.
#[derive(Debug, Clone, Default)]
pub struct ProjectsArgs {
    /// Search text.
    pub query: Option<String>,
    /// Category label or `all`.
    pub category: Option<String>,
    /// Sort order.
    pub sort: SortKey,
    /// Emit JSON.
    pub json: bool,
}

impl ProjectsArgs {
    /// Apply these filters to freshly loaded records.
    pub fn list_state(&self, records: Vec<Project>) -> ListState {
        ListState::new(records)
            .with_query(self.query.clone().unwrap_or_default())
            .with_category(CategoryFilter::from_param(self.category.as_deref()))
            .with_sort(self.sort)
    }
}

/// Start the web server and block until shutdown.
pub async fn serve(config: &FolioConfig, offline: bool) -> Result<()> {
    let state = config.app_state(offline)?;
    folio_web::serve(state, &config.server).await?;
    Ok(())
}

/// Print the derived project list.
pub async fn projects(config: &FolioConfig, offline: bool, args: &ProjectsArgs) -> Result<()> {
    let loader = config.loader(offline)?;
    let list = args.list_state(loader.projects().await);
    print!("{}", render_projects(&list, args.json)?);
    Ok(())
}

/// Print the distinct categories, one per line.
pub async fn categories(config: &FolioConfig, offline: bool) -> Result<()> {
    let loader = config.loader(offline)?;
    let list = ListState::new(loader.projects().await);
    print!("{}", render_categories(&list));
    Ok(())
}

#[derive(Serialize)]
struct ProjectRow<'a> {
    id: &'a str,
    title: &'a str,
    category: &'a str,
    date: &'a str,
    featured: bool,
}

/// Table or JSON rendering of the derived view.
pub fn render_projects(list: &ListState, json: bool) -> Result<String> {
    let view = list.view();
    if json {
        let rows: Vec<ProjectRow<'_>> = view
            .iter()
            .map(|p| ProjectRow {
                id: p.id.as_str(),
                title: &p.title,
                category: &p.category,
                date: &p.date,
                featured: p.featured,
            })
            .collect();
        let mut out = serde_json::to_string_pretty(&rows)?;
        out.push('\n');
        return Ok(out);
    }

    let mut out = String::new();
    for project in &view {
        let marker = if project.featured { "*" } else { " " };
        out.push_str(&format!(
            "{marker} {date:<10}  {category:<12}  {title}  [{id}]\n",
            date = project.date,
            category = project.category,
            title = project.title,
            id = project.id,
        ));
    }
    out.push_str(&format!(
        "Showing {} of {} projects\n",
        view.len(),
        list.records().len()
    ));
    Ok(out)
}

/// One category per line.
pub fn render_categories(list: &ListState) -> String {
    list.categories()
        .into_iter()
        .map(|c| format!("{c}\n"))
        .collect()
}
