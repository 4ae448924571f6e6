//! The project detail modal.
//!
//! The modal is a URL state: it is open when `selected` names a record.
//! The backdrop and the close control link to the same URL without
//! `selected`, and the key bindings rendered onto the dialog come from
//! [`ModalState::handle_key`], so Escape and the arrow keys behave exactly
//! as the model says. Tab order is precomputed from [`FocusTrap`] and
//! covers the links inside the rich-text body.

use folio_content::detail::{Actions, Gallery, NarrativeView};
use folio_content::{DetailView, FocusTrap, Key, ModalState, escape_html};
use folio_core::Project;

use super::{external_link, tag_list};
use crate::query::ListQuery;

/// Modal state for the record a query selects, with the gallery at the
/// requested image.
pub fn modal_state(project: &Project, query: &ListQuery) -> ModalState {
    let mut modal = ModalState::default();
    modal.open(project);
    modal.show_image(query.image_index());
    modal
}

/// Render the modal for `project`.
pub fn render(project: &Project, query: &ListQuery) -> String {
    let modal = modal_state(project, query);
    let view = DetailView::new(project, query.image_index());
    let mut closed = modal.clone();
    closed.close();
    let close_href = escape_html(&state_href(&closed, query));
    let mut dismissed = modal.clone();
    dismissed.backdrop_click();
    let backdrop_href = escape_html(&state_href(&dismissed, query));

    let body = view.body.map(|body| body.to_html());
    let body_links = body.as_deref().map_or(0, |html| html.matches(LINK_OPEN).count());
    let mut focus = FocusOrder::new(focusable_count(&view) + body_links);

    let close = format!(
        r#"<a class="modal-close" href="{close_href}" aria-label="Close"{}>×</a>"#,
        focus.attrs()
    );
    let gallery = gallery(&view.gallery, &project.title, query, &mut focus);
    let body = body.map(|html| focusable_links(&html, &mut focus));
    let actions = view
        .actions
        .map(|actions| actions_block(actions, &mut focus))
        .unwrap_or_default();

    let mut sections = String::new();
    if let Some(body) = &body {
        sections.push_str(&format!(r#"<div class="rich-text">{body}</div>"#));
    }
    if let Some(technologies) = view.technologies {
        sections.push_str(&section("Technologies", &tag_list(technologies, "Technologies")));
    }
    if let Some(challenges) = &view.challenges {
        sections.push_str(&section("Challenges", &narrative(challenges)));
    }
    if let Some(outcomes) = &view.outcomes {
        sections.push_str(&section("Outcomes", &narrative(outcomes)));
    }
    if let Some(tags) = view.tags {
        sections.push_str(&section("Tags", &tag_list(tags, "Tags")));
    }

    let date = project
        .parsed_date()
        .map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| project.date.clone());

    format!(
        r#"<div class="modal" data-modal role="dialog" aria-modal="true" aria-labelledby="modal-title" data-focus-first="0" data-focus-last="{last}"{keys}><a class="modal-backdrop" href="{backdrop_href}" tabindex="-1" aria-hidden="true"></a><div class="modal-content">{close}{gallery}<span class="category">{category}</span><h2 id="modal-title">{title}</h2><p class="date">{date}</p><p class="description">{description}</p>{sections}{actions}</div></div>"#,
        last = focus.count().saturating_sub(1),
        keys = key_bindings(&modal, query),
        category = escape_html(&project.category),
        title = escape_html(&project.title),
        date = escape_html(&date),
        description = escape_html(&project.description),
    )
}

// ============================================================================
// Key bindings and focus order
// ============================================================================

/// `data-key-<name>` attributes for every key the modal consumes, each
/// pointing at the URL of the resulting state.
fn key_bindings(modal: &ModalState, query: &ListQuery) -> String {
    Key::ALL
        .into_iter()
        .filter_map(|key| {
            let mut next = modal.clone();
            if !next.handle_key(key) {
                return None;
            }
            Some(format!(
                r#" data-key-{}="{}""#,
                key.name().to_ascii_lowercase(),
                escape_html(&state_href(&next, query))
            ))
        })
        .collect()
}

/// URL of the page showing `modal`: the gallery position while open, the
/// list without `selected` once closed.
fn state_href(modal: &ModalState, query: &ListQuery) -> String {
    match modal.gallery() {
        Some(gallery) => query.with_image(gallery.index()).href(),
        None => query.without_selected().href(),
    }
}

/// Opening of a rich-text link that carries a destination. Anchors
/// without `href` are not focusable.
const LINK_OPEN: &str = "<a href=";

/// Give every rich-text link its focus attributes, in document order.
fn focusable_links(html: &str, focus: &mut FocusOrder) -> String {
    let mut out = String::with_capacity(html.len());
    let mut pieces = html.split(LINK_OPEN);
    if let Some(head) = pieces.next() {
        out.push_str(head);
    }
    for piece in pieces {
        out.push_str("<a");
        out.push_str(&focus.attrs());
        out.push_str(" href=");
        out.push_str(piece);
    }
    out
}

/// Focusable controls outside the rich-text body.
fn focusable_count(view: &DetailView<'_>) -> usize {
    let close = 1;
    let gallery = if view.gallery.has_navigation() {
        2 + view.gallery.len()
    } else {
        0
    };
    let actions = view
        .actions
        .map(|a| usize::from(a.pdf.is_some()) + usize::from(a.demo.is_some()))
        .unwrap_or(0);
    close + gallery + actions
}

/// Hands out focus attributes in document order.
struct FocusOrder {
    trap: FocusTrap,
    first: Option<usize>,
    next: usize,
}

impl FocusOrder {
    fn new(count: usize) -> Self {
        let mut trap = FocusTrap::new(count);
        let first = trap.focus_first();
        Self {
            trap,
            first,
            next: 0,
        }
    }

    fn count(&self) -> usize {
        self.trap.count()
    }

    fn attrs(&mut self) -> String {
        let index = self.next;
        self.next += 1;

        let forward = self.trap.with_focus(index).handle(Key::Tab).unwrap_or(index);
        let backward = self
            .trap
            .with_focus(index)
            .handle(Key::ShiftTab)
            .unwrap_or(index);
        let autofocus = if self.first == Some(index) {
            " autofocus"
        } else {
            ""
        };

        format!(
            r#" data-focus-index="{index}" data-focus-next="{forward}" data-focus-prev="{backward}"{autofocus}"#
        )
    }
}

// ============================================================================
// Blocks
// ============================================================================

fn gallery(gallery: &Gallery, title: &str, query: &ListQuery, focus: &mut FocusOrder) -> String {
    let Some(current) = gallery.current() else {
        return String::new();
    };
    let image = format!(
        r#"<img src="{}" alt="{} (image {} of {})">"#,
        escape_html(current),
        escape_html(title),
        gallery.index() + 1,
        gallery.len()
    );
    if !gallery.has_navigation() {
        return format!(r#"<div class="gallery">{image}</div>"#);
    }

    let prev = format!(
        r#"<a class="gallery-prev" href="{}" aria-label="Previous image"{}>‹</a>"#,
        escape_html(&query.with_image(gallery.previous_index()).href()),
        focus.attrs()
    );
    let indicators: String = gallery
        .indicators()
        .into_iter()
        .map(|indicator| {
            let current = if indicator.active {
                r#" aria-current="true""#
            } else {
                ""
            };
            format!(
                r#"<a class="indicator" href="{}" aria-label="Show image {}"{current}{}></a>"#,
                escape_html(&query.with_image(indicator.index).href()),
                indicator.index + 1,
                focus.attrs()
            )
        })
        .collect();
    let next = format!(
        r#"<a class="gallery-next" href="{}" aria-label="Next image"{}>›</a>"#,
        escape_html(&query.with_image(gallery.next_index()).href()),
        focus.attrs()
    );

    format!(
        r#"<div class="gallery">{image}<div class="gallery-nav">{prev}{indicators}{next}</div></div>"#
    )
}

fn actions_block(actions: Actions<'_>, focus: &mut FocusOrder) -> String {
    let mut links = String::new();
    if let Some(pdf) = actions.pdf {
        let attrs = format!(r#" class="button"{}"#, focus.attrs());
        links.push_str(&external_link(pdf, "View PDF", &attrs));
    }
    if let Some(demo) = actions.demo {
        let attrs = format!(r#" class="button secondary"{}"#, focus.attrs());
        links.push_str(&external_link(demo, "Live Demo", &attrs));
    }
    format!(r#"<div class="actions">{links}</div>"#)
}

fn section(heading: &str, inner: &str) -> String {
    format!("<section><h3>{heading}</h3>{inner}</section>")
}

fn narrative(view: &NarrativeView<'_>) -> String {
    match view {
        NarrativeView::Paragraph(text) => format!("<p>{}</p>", escape_html(text)),
        NarrativeView::Bullets(items) => {
            let items: String = items
                .iter()
                .map(|item| format!("<li>{}</li>", escape_html(item)))
                .collect();
            format!("<ul>{items}</ul>")
        }
    }
}
