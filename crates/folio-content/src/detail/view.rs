//! Section model for the detail modal.
//!
//! Each optional section is `Some` only when its backing field is present
//! and non-empty, so the renderer never has to re-check the record.

use folio_core::{Narrative, Project};

use super::gallery::Gallery;
use crate::richtext::render_trusted;

/// Long-form body text. `overview` wins when both fields exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Body<'a> {
    /// From the `overview` field.
    Overview(&'a str),
    /// From the `longDescription` field.
    LongDescription(&'a str),
}

impl<'a> Body<'a> {
    /// Raw source text.
    pub fn source(&self) -> &'a str {
        match self {
            Body::Overview(s) | Body::LongDescription(s) => s,
        }
    }

    /// Sanitized HTML for the trusted rich-text channel.
    pub fn to_html(&self) -> String {
        render_trusted(self.source())
    }
}

/// How a narrative field renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NarrativeView<'a> {
    /// Single string form: one paragraph.
    Paragraph(&'a str),
    /// List form: one bullet per non-blank entry.
    Bullets(Vec<&'a str>),
}

impl<'a> NarrativeView<'a> {
    fn from_narrative(narrative: &'a Narrative) -> Option<Self> {
        if narrative.is_empty() {
            return None;
        }
        Some(match narrative {
            Narrative::Text(text) => NarrativeView::Paragraph(text.trim()),
            Narrative::List(items) => NarrativeView::Bullets(
                items
                    .iter()
                    .map(|item| item.trim())
                    .filter(|item| !item.is_empty())
                    .collect(),
            ),
        })
    }
}

/// External action links. Exists only when at least one link does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actions<'a> {
    /// PDF write-up.
    pub pdf: Option<&'a str>,
    /// Live demo.
    pub demo: Option<&'a str>,
}

/// Everything the modal renders for one record.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView<'a> {
    /// The record itself, for the always-present fields.
    pub project: &'a Project,
    /// Image gallery positioned at the requested index.
    pub gallery: Gallery,
    /// Long-form body.
    pub body: Option<Body<'a>>,
    /// Technology tags.
    pub technologies: Option<&'a [String]>,
    /// Free-form tags.
    pub tags: Option<&'a [String]>,
    /// Challenges section.
    pub challenges: Option<NarrativeView<'a>>,
    /// Outcomes section.
    pub outcomes: Option<NarrativeView<'a>>,
    /// PDF / demo links.
    pub actions: Option<Actions<'a>>,
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn non_empty(list: &[String]) -> Option<&[String]> {
    (!list.is_empty()).then_some(list)
}

impl<'a> DetailView<'a> {
    /// Build the view for `project` with the gallery at `image_index`
    /// (out-of-range indices start at the first image).
    pub fn new(project: &'a Project, image_index: usize) -> Self {
        let body = present(&project.overview)
            .map(Body::Overview)
            .or_else(|| present(&project.long_description).map(Body::LongDescription));

        let pdf = present(&project.pdf);
        let demo = present(&project.demo);
        let actions = (pdf.is_some() || demo.is_some()).then_some(Actions { pdf, demo });

        Self {
            project,
            gallery: Gallery::for_project(project).starting_at(image_index),
            body,
            technologies: non_empty(&project.technologies),
            tags: non_empty(&project.tags),
            challenges: project
                .challenges
                .as_ref()
                .and_then(NarrativeView::from_narrative),
            outcomes: project
                .outcomes
                .as_ref()
                .and_then(NarrativeView::from_narrative),
            actions,
        }
    }
}
