//! Trusted rich text.
//!
//! Long-form CMS fields carry editor markup (mostly `<br>`, sometimes
//! emphasis, lists, or links). That markup is part of the visible content,
//! so it must not be escaped wholesale; but it is not inserted blindly
//! either. [`render_trusted`] renders the field as Markdown and passes every
//! raw HTML tag through an allowlist:
//!
//! | Tag                                     | Result                          |
//! |-----------------------------------------|---------------------------------|
//! | `br p strong b em i u ul ol li`         | kept, attributes dropped        |
//! | `a`                                     | kept with a safe `href` only    |
//! | anything else (`script`, `img`, ...)    | escaped, shown as literal text  |
//!
//! Link and image destinations must be relative or use `http`, `https`, or
//! `mailto`; anything else is replaced with `#`.

use std::sync::LazyLock;

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};
use regex::Regex;

/// Tags kept verbatim (minus attributes).
const ALLOWED_TAGS: &[&str] = &["br", "p", "strong", "b", "em", "i", "u", "ul", "ol", "li"];

/// URL schemes allowed in links.
const SAFE_SCHEMES: &[&str] = &["http", "https", "mailto"];

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(/?)([A-Za-z][A-Za-z0-9]*)((?:[\s/][^<>]*)?)>").expect("Invalid tag regex")
});

static HREF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\bhref\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#)
        .expect("Invalid href regex")
});

static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^&(?:#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[A-Za-z][A-Za-z0-9]{1,31});")
        .expect("Invalid entity regex")
});

// ============================================================================
// Public API
// ============================================================================

/// Escape text for use in HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Render a trusted long-form field to sanitized HTML.
pub fn render_trusted(source: &str) -> String {
    let parser = Parser::new_ext(source, Options::ENABLE_STRIKETHROUGH).map(|event| match event {
        Event::Html(raw) => Event::Html(CowStr::from(sanitize_html(&raw))),
        Event::InlineHtml(raw) => Event::InlineHtml(CowStr::from(sanitize_html(&raw))),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_dest(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_dest(dest_url),
            title,
            id,
        }),
        other => other,
    });

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Sanitize a raw HTML fragment against the tag allowlist.
pub fn sanitize_html(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len());
    let mut last = 0;

    for caps in TAG_RE.captures_iter(fragment) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        out.push_str(&escape_text(&fragment[last..whole.start()]));
        last = whole.end();

        let closing = !caps[1].is_empty();
        let name = caps[2].to_ascii_lowercase();
        let attrs = caps.get(3).map_or("", |m| m.as_str());

        match name.as_str() {
            "br" if closing => {}
            "a" if closing => out.push_str("</a>"),
            "a" => out.push_str(&anchor_open(attrs)),
            tag if ALLOWED_TAGS.contains(&tag) => {
                out.push('<');
                if closing {
                    out.push('/');
                }
                out.push_str(tag);
                out.push('>');
            }
            _ => {
                log::debug!("Escaping disallowed tag <{name}> in rich text");
                out.push_str(&escape_html(whole.as_str()));
            }
        }
    }

    out.push_str(&escape_text(&fragment[last..]));
    out
}

/// Whether a URL is relative or uses an allowed scheme.
pub fn is_safe_url(url: &str) -> bool {
    let url = url.trim();
    let scheme_end = url.find(':');
    let path_start = url.find(['/', '?', '#']);
    match (scheme_end, path_start) {
        (None, _) => true,
        (Some(colon), Some(path)) if path < colon => true,
        (Some(colon), _) => {
            let scheme = url[..colon].to_ascii_lowercase();
            SAFE_SCHEMES.contains(&scheme.as_str())
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn safe_dest(dest: CowStr<'_>) -> CowStr<'_> {
    if is_safe_url(&dest) {
        dest
    } else {
        log::debug!("Replacing unsafe link destination in rich text");
        CowStr::Borrowed("#")
    }
}

fn anchor_open(attrs: &str) -> String {
    let href = HREF_RE.captures(attrs).and_then(|caps| {
        caps.get(1)
            .or_else(|| caps.get(2))
            .or_else(|| caps.get(3))
            .map(|m| m.as_str().trim().to_string())
    });

    match href {
        Some(href) if is_safe_url(&href) => {
            let external = href.starts_with("http://") || href.starts_with("https://");
            let target = if external { r#" target="_blank""# } else { "" };
            format!(
                r#"<a href="{}"{target} rel="noopener noreferrer">"#,
                escape_html(&href)
            )
        }
        _ => "<a>".to_string(),
    }
}

/// Escape text found between tags, leaving existing entities intact.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, c) in text.char_indices() {
        match c {
            '&' if ENTITY_RE.is_match(&text[i..]) => out.push('&'),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}
