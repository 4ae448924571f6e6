//! Page shell: head, header navigation, footer, and the key-binding script.

use folio_content::escape_html;

use crate::config::SiteConfig;

/// Top-level navigation entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    /// `/`
    Home,
    /// `/projects`
    Projects,
    /// `/about`
    About,
    /// `/contact`
    Contact,
    /// Not a navigation target (404).
    None,
}

const NAV_ITEMS: [(Nav, &str, &str); 4] = [
    (Nav::Home, "/", "Home"),
    (Nav::Projects, "/projects", "Projects"),
    (Nav::About, "/about", "About"),
    (Nav::Contact, "/contact", "Contact"),
];

/// A rendered page body plus what the shell needs to wrap it.
#[derive(Debug, Clone)]
pub struct Page {
    /// Page title (before the site suffix).
    pub title: String,
    /// Highlighted navigation entry.
    pub nav: Nav,
    /// Inner HTML of `<main>`.
    pub body: String,
    /// Suppress page scroll (an open modal).
    pub scroll_locked: bool,
}

impl Page {
    /// A page with scrolling enabled.
    pub fn new(title: impl Into<String>, nav: Nav, body: String) -> Self {
        Self {
            title: title.into(),
            nav,
            body,
            scroll_locked: false,
        }
    }
}

const STYLES: &str = r#"
*{box-sizing:border-box}
body{margin:0;font-family:system-ui,-apple-system,"Segoe UI",sans-serif;line-height:1.5;color:#1f2328;background:#fafafa}
body.scroll-locked{overflow:hidden}
a{color:#0b5cad}
.site-header,.site-footer{display:flex;gap:1.5rem;align-items:center;justify-content:space-between;padding:1rem 2rem;background:#fff;border-bottom:1px solid #e5e7eb}
.site-footer{border-top:1px solid #e5e7eb;border-bottom:0;margin-top:3rem;font-size:.9rem}
.site-header nav a{margin-left:1rem;text-decoration:none}
.site-header nav a[aria-current=page]{font-weight:600;text-decoration:underline}
.brand{font-weight:700;text-decoration:none;color:inherit}
main{max-width:72rem;margin:0 auto;padding:2rem}
.hero{padding:3rem 0}
.hero h1{font-size:2.5rem;margin:0 0 .5rem}
.button{display:inline-block;padding:.5rem 1rem;border-radius:.375rem;background:#0b5cad;color:#fff;text-decoration:none;margin-right:.5rem}
.button.secondary{background:#fff;color:#0b5cad;border:1px solid #0b5cad}
.controls{display:flex;flex-wrap:wrap;gap:.75rem;margin-bottom:1rem}
.controls input,.controls select,.controls button{padding:.5rem;font:inherit}
.results-count{color:#57606a}
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(18rem,1fr));gap:1.25rem}
.card{display:block;background:#fff;border:1px solid #e5e7eb;border-radius:.5rem;overflow:hidden;color:inherit;text-decoration:none}
.card:focus,.card:hover{outline:2px solid #0b5cad}
.card img{width:100%;aspect-ratio:16/9;object-fit:cover;display:block}
.card-body{padding:1rem}
.category{font-size:.8rem;text-transform:uppercase;letter-spacing:.05em;color:#57606a}
.tags{list-style:none;padding:0;display:flex;flex-wrap:wrap;gap:.375rem}
.tags li{background:#eef2f7;border-radius:999px;padding:.125rem .625rem;font-size:.8rem}
.empty-state{padding:3rem;text-align:center;color:#57606a}
.modal{position:fixed;inset:0;display:flex;align-items:center;justify-content:center;z-index:10}
.modal-backdrop{position:absolute;inset:0;background:rgba(0,0,0,.55)}
.modal-content{position:relative;background:#fff;max-width:56rem;width:92vw;max-height:90vh;overflow:auto;border-radius:.75rem;padding:1.5rem}
.modal-close{position:absolute;top:.75rem;right:1rem;font-size:1.5rem;text-decoration:none}
.gallery img{width:100%;max-height:28rem;object-fit:contain;background:#f3f4f6}
.gallery-nav{display:flex;align-items:center;justify-content:center;gap:.5rem;margin:.5rem 0}
.indicator{width:.75rem;height:.75rem;border-radius:50%;background:#d0d7de;display:inline-block}
.indicator[aria-current=true]{background:#0b5cad}
.actions{display:flex;gap:.75rem;margin-top:1.5rem}
.skills{display:grid;grid-template-columns:repeat(auto-fill,minmax(14rem,1fr));gap:1rem}
.meter{height:.375rem;background:#e5e7eb;border-radius:999px}
.meter span{display:block;height:100%;background:#0b5cad;border-radius:999px}
.timeline{list-style:none;padding:0}
.timeline li{margin-bottom:1.25rem}
"#;

/// Keyboard bindings. Every decision is rendered into `data-*` attributes
/// server-side; the script only dispatches:
///
/// - `data-activate-keys` on cards: listed keys click the element
/// - `data-key-<name>` on the modal: the key navigates to that URL
/// - `data-focus-next` / `data-focus-prev`: where Tab / Shift+Tab go
const SCRIPT: &str = r#"
(function () {
  var names = { " ": "Space", "Spacebar": "Space", "Esc": "Escape", "Left": "ArrowLeft", "Right": "ArrowRight" };
  var modal = document.querySelector("[data-modal]");
  document.addEventListener("keydown", function (e) {
    var key = names[e.key] || e.key;
    var target = e.target;
    var keys = target && target.getAttribute && target.getAttribute("data-activate-keys");
    if (keys && keys.split(" ").indexOf(key) >= 0) {
      e.preventDefault();
      target.click();
      return;
    }
    if (!modal) return;
    if (key === "Tab") {
      var current = document.activeElement;
      var attr = e.shiftKey ? "data-focus-prev" : "data-focus-next";
      var to = current && current.getAttribute && current.getAttribute(attr);
      if (to === null || to === undefined || to === false) {
        to = modal.getAttribute(e.shiftKey ? "data-focus-last" : "data-focus-first");
      }
      var el = modal.querySelector('[data-focus-index="' + to + '"]');
      if (el) {
        e.preventDefault();
        el.focus();
      }
      return;
    }
    var href = modal.getAttribute("data-key-" + key.toLowerCase());
    if (href) {
      e.preventDefault();
      window.location.assign(href);
    }
  });
  if (modal) {
    var first = modal.querySelector("[autofocus]");
    if (first) first.focus();
  }
})();
"#;

/// Wrap a page body in the site shell.
pub fn render(site: &SiteConfig, page: &Page) -> String {
    let title = if page.title.is_empty() {
        escape_html(&site.title)
    } else {
        format!("{} · {}", escape_html(&page.title), escape_html(&site.title))
    };
    let body_class = if page.scroll_locked {
        r#" class="scroll-locked""#
    } else {
        ""
    };

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{STYLES}</style>
</head>
<body{body_class}>
{header}
<main id="main">
{body}
</main>
{footer}
<script>{SCRIPT}</script>
</body>
</html>
"#,
        header = header(site, page.nav),
        body = page.body,
        footer = footer(site),
    )
}

fn header(site: &SiteConfig, active: Nav) -> String {
    let links: String = NAV_ITEMS
        .iter()
        .map(|(nav, href, label)| {
            let current = if *nav == active {
                r#" aria-current="page""#
            } else {
                ""
            };
            format!(r#"<a href="{href}"{current}>{label}</a>"#)
        })
        .collect();

    format!(
        r#"<header class="site-header"><a class="brand" href="/">{owner}</a><nav aria-label="Main">{links}</nav></header>"#,
        owner = escape_html(&site.owner),
    )
}

fn footer(site: &SiteConfig) -> String {
    let links: String = site
        .links
        .iter()
        .map(|link| super::external_link(&link.url, &escape_html(&link.label), ""))
        .collect::<Vec<_>>()
        .join(" · ");

    format!(
        r#"<footer class="site-footer"><span>© {owner}</span><span>{links}</span></footer>"#,
        owner = escape_html(&site.owner),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_lock_class() {
        let site = SiteConfig::default();
        let mut page = Page::new("Projects", Nav::Projects, String::new());
        assert!(render(&site, &page).contains("<body>"));
        page.scroll_locked = true;
        assert!(render(&site, &page).contains(r#"<body class="scroll-locked">"#));
    }

    #[test]
    fn test_active_nav_marked() {
        let site = SiteConfig::default();
        let html = render(&site, &Page::new("About", Nav::About, String::new()));
        assert!(html.contains(r#"<a href="/about" aria-current="page">About</a>"#));
        assert!(html.contains(r#"<a href="/projects">Projects</a>"#));
    }

    #[test]
    fn test_title_is_escaped() {
        let site = SiteConfig::default();
        let html = render(&site, &Page::new("<x>", Nav::None, String::new()));
        assert!(html.contains("<title>&lt;x&gt; · Portfolio</title>"));
    }
}
