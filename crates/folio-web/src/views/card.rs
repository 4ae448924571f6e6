//! Project cards and the card grid.

use folio_content::{Card, Key, escape_html};
use folio_core::Project;

use super::tag_list;

/// Keys that activate a focused card, as rendered into `data-activate-keys`.
fn activate_keys() -> String {
    Key::ALL
        .into_iter()
        .filter(|key| Card::activates_on(*key))
        .map(|key| key.name())
        .collect::<Vec<_>>()
        .join(" ")
}

/// One card. `href` selects the record (opens the modal).
pub fn render(project: &Project, href: &str) -> String {
    let card = Card::from_project(project);
    let image = card
        .image
        .map(|url| {
            format!(
                r#"<img src="{}" alt="" loading="lazy">"#,
                escape_html(url)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<a class="card" href="{href}" role="button" tabindex="0" data-activate-keys="{keys}" data-record-id="{id}">{image}<div class="card-body"><span class="category">{category}</span><h3>{title}</h3><p>{excerpt}</p>{tags}</div></a>"#,
        href = escape_html(href),
        keys = activate_keys(),
        id = escape_html(card.id.as_str()),
        category = escape_html(card.category),
        title = escape_html(card.title),
        excerpt = escape_html(&card.excerpt),
        tags = tag_list(card.technologies, "Technologies"),
    )
}

/// A grid of cards; `href_for` builds each card's selection link.
pub fn grid<'a, I, F>(projects: I, href_for: F) -> String
where
    I: IntoIterator<Item = &'a Project>,
    F: Fn(&Project) -> String,
{
    let cards: String = projects
        .into_iter()
        .map(|project| render(project, &href_for(project)))
        .collect();
    format!(r#"<div class="grid">{cards}</div>"#)
}
