//! The project record.
//!
//! Projects are the only record type with real structure: media lists,
//! classification tags, narrative sections, and optional external links.
//! Only `id`, `title`, `category`, `date`, and `description` are
//! guaranteed; everything else may be absent (or `null` in CMS output).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::RecordId;
use super::{null_as_default, string_list};
use crate::dates::parse_lenient;

/// A narrative field (challenges, outcomes) that the CMS stores either
/// as a single block of text or as an ordered list of entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Narrative {
    /// A single paragraph.
    Text(String),
    /// An ordered list of entries.
    #[serde(deserialize_with = "string_list")]
    List(Vec<String>),
}

impl Narrative {
    /// Returns `true` when there is nothing worth rendering.
    pub fn is_empty(&self) -> bool {
        match self {
            Narrative::Text(text) => text.trim().is_empty(),
            Narrative::List(items) => items.iter().all(|item| item.trim().is_empty()),
        }
    }
}

/// A portfolio project as delivered by the content source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique identifier within a fetched set.
    #[serde(alias = "_id")]
    pub id: RecordId,
    /// Display title.
    pub title: String,
    /// Free-text category label.
    pub category: String,
    /// ISO-ish date string, e.g. `2025-01-19` or `2025-1-19`.
    pub date: String,
    /// Short description shown on cards.
    pub description: String,
    /// Long-form overview; preferred over `long_description` when both exist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    /// Long-form description, may contain trusted inline markup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    /// Primary image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Additional image URLs, in display order.
    #[serde(default, deserialize_with = "string_list", skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    /// Technology tags, in display order.
    #[serde(default, deserialize_with = "string_list", skip_serializing_if = "Vec::is_empty")]
    pub technologies: Vec<String>,
    /// Free-form tags.
    #[serde(default, deserialize_with = "string_list", skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Challenges faced during the project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenges: Option<Narrative>,
    /// Outcomes of the project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcomes: Option<Narrative>,
    /// Link to a PDF write-up.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf: Option<String>,
    /// Link to a live demo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
    /// Curated for the homepage.
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,
}

impl Project {
    /// Create a project with only the guaranteed fields set.
    pub fn new(
        id: impl Into<RecordId>,
        title: impl Into<String>,
        category: impl Into<String>,
        date: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            date: date.into(),
            description: description.into(),
            overview: None,
            long_description: None,
            image: None,
            images: Vec::new(),
            technologies: Vec::new(),
            tags: Vec::new(),
            challenges: None,
            outcomes: None,
            pdf: None,
            demo: None,
            featured: false,
        }
    }

    /// Parsed project date, if the date string is understandable.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_lenient(&self.date)
    }

    /// Primary image followed by the additional images, with blank and
    /// exact-duplicate URLs removed. Order of first appearance is kept.
    pub fn images(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::with_capacity(1 + self.images.len());
        for url in self.image.iter().chain(self.images.iter()) {
            let url = url.as_str();
            if url.trim().is_empty() || out.contains(&url) {
                continue;
            }
            out.push(url);
        }
        out
    }

    /// Non-blank primary image, if any.
    pub fn primary_image(&self) -> Option<&str> {
        self.image.as_deref().filter(|url| !url.trim().is_empty())
    }
}

// Builder-style setters used by fixtures and the offline dataset tests.
impl Project {
    /// Set the primary image.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }

    /// Set the additional images.
    pub fn with_images<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = urls.into_iter().map(Into::into).collect();
        self
    }

    /// Set the technology tags.
    pub fn with_technologies<I, S>(mut self, techs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.technologies = techs.into_iter().map(Into::into).collect();
        self
    }

    /// Set the free-form tags.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Mark the project as featured.
    pub fn as_featured(mut self) -> Self {
        self.featured = true;
        self
    }
}
