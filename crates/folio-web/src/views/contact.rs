//! The contact page.

use folio_content::escape_html;

use super::{Nav, Page, external_link};
use crate::config::SiteConfig;

/// Render the contact page.
pub fn render(site: &SiteConfig) -> Page {
    let email = escape_html(&site.email);
    let location = site
        .location
        .as_deref()
        .map(|l| format!(r#"<p class="location">{}</p>"#, escape_html(l)))
        .unwrap_or_default();
    let links: String = site
        .links
        .iter()
        .map(|link| format!("<li>{}</li>", external_link(&link.url, &escape_html(&link.label), "")))
        .collect();

    let body = format!(
        r#"<h1>Contact</h1><p>The quickest way to reach me is by email.</p><p><a class="button" href="mailto:{email}">{email}</a></p>{location}<ul class="links">{links}</ul>"#
    );
    Page::new("Contact", Nav::Contact, body)
}
