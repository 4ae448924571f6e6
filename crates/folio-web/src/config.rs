//! `[site]` and `[server]` configuration sections.

use serde::{Deserialize, Serialize};

/// An outbound profile link shown in the footer and on the contact page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteLink {
    /// Visible label, e.g. "GitHub".
    pub label: String,
    /// Target URL.
    pub url: String,
}

impl SiteLink {
    /// Create a link.
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Owner and presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site owner's name, used as the brand.
    pub owner: String,
    /// Title suffix for every page.
    pub title: String,
    /// One-line pitch on the home page.
    pub tagline: String,
    /// Short introduction on the about page.
    pub bio: String,
    /// Contact address.
    pub email: String,
    /// Optional location line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Profile links.
    pub links: Vec<SiteLink>,
    /// Maximum projects on the home page.
    pub featured_limit: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: "Alex Doe".to_string(),
            title: "Portfolio".to_string(),
            tagline: "Software engineer building dependable tools, data products, and devices."
                .to_string(),
            bio: "I design and build software end to end, from firmware to web front ends."
                .to_string(),
            email: "hello@example.com".to_string(),
            location: None,
            links: vec![
                SiteLink::new("GitHub", "https://github.com/example"),
                SiteLink::new("LinkedIn", "https://www.linkedin.com/in/example"),
            ],
            featured_limit: 3,
        }
    }
}

/// Listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// `host:port`, bracketing IPv6 literals.
    pub fn addr(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}
