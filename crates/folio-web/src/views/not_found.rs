//! The 404 page.

use folio_content::escape_html;

use super::{Nav, Page};

/// Render the not-found page for `path`.
pub fn render(path: &str) -> Page {
    let body = format!(
        r#"<section class="empty-state"><h1>Page not found</h1><p>Nothing lives at <code>{}</code>.</p><a class="button" href="/">Back home</a></section>"#,
        escape_html(path)
    );
    Page::new("Not found", Nav::None, body)
}
