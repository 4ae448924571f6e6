//! HTML views.
//!
//! Views are plain functions from models to strings. Every interpolated
//! value is escaped with [`escape_html`] except the output of
//! [`render_trusted`](folio_content::render_trusted), which is sanitized.

pub mod about;
pub mod card;
pub mod contact;
pub mod home;
pub mod layout;
pub mod modal;
pub mod not_found;
pub mod projects;

pub use layout::{Nav, Page};

use folio_content::escape_html;
use folio_content::richtext::is_safe_url;

/// Whether a URL leaves the site (and so opens in a new tab).
pub fn is_external(url: &str) -> bool {
    let url = url.trim_start().to_ascii_lowercase();
    url.starts_with("http://") || url.starts_with("https://")
}

/// An anchor for an outbound URL. External targets open in a new tab;
/// URLs with unsafe schemes render as plain text.
pub fn external_link(url: &str, label_html: &str, extra_attrs: &str) -> String {
    if !is_safe_url(url) {
        return format!("<span>{label_html}</span>");
    }
    let target = if is_external(url) {
        r#" target="_blank" rel="noopener noreferrer""#
    } else {
        ""
    };
    format!(
        r#"<a href="{}"{target}{extra_attrs}>{label_html}</a>"#,
        escape_html(url)
    )
}

/// A `<ul class="tags">` list, or nothing for an empty slice.
pub fn tag_list(tags: &[String], label: &str) -> String {
    if tags.is_empty() {
        return String::new();
    }
    let items: String = tags
        .iter()
        .map(|tag| format!("<li>{}</li>", escape_html(tag)))
        .collect();
    format!(
        r#"<ul class="tags" aria-label="{}">{items}</ul>"#,
        escape_html(label)
    )
}
