//! The home page: hero plus the featured projects.

use folio_content::escape_html;
use folio_content::listing::featured;
use folio_core::Project;

use super::{Nav, Page, card};
use crate::config::SiteConfig;
use crate::query::ListQuery;

/// Render the home page.
pub fn render(site: &SiteConfig, projects: &[Project]) -> Page {
    let picks = featured(projects, site.featured_limit);
    let showcase = if picks.is_empty() {
        String::new()
    } else {
        let root = ListQuery::default();
        format!(
            r#"<section class="featured"><h2>Featured projects</h2>{grid}<p><a href="/projects">See all projects →</a></p></section>"#,
            grid = card::grid(picks, |project| root.with_selected(&project.id).href()),
        )
    };

    let body = format!(
        r#"<section class="hero"><h1>{owner}</h1><p class="tagline">{tagline}</p><a class="button" href="/projects">View projects</a><a class="button secondary" href="/contact">Get in touch</a></section>{showcase}"#,
        owner = escape_html(&site.owner),
        tagline = escape_html(&site.tagline),
    );

    Page::new("", Nav::Home, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_featured_subset_links_to_modal() {
        let site = SiteConfig {
            featured_limit: 1,
            ..SiteConfig::default()
        };
        let projects = vec![
            Project::new("1", "Alpha", "Web", "2024-01-01", "a").as_featured(),
            Project::new("2", "Beta", "Web", "2025-01-01", "b"),
        ];
        let page = render(&site, &projects);
        assert!(page.body.contains(r#"href="/projects?selected=1""#));
        assert!(!page.body.contains("Beta"));
        assert_eq!(page.nav, Nav::Home);
    }

    #[test]
    fn test_no_projects_no_showcase() {
        let page = render(&SiteConfig::default(), &[]);
        assert!(!page.body.contains("Featured projects"));
        assert!(page.body.contains("Alex Doe"));
    }
}
