//! Fixed CMS queries, one per record type.
//!
//! Queries project CMS documents onto the shapes `folio-core` deserializes:
//! asset references are dereferenced to plain URLs and `_id` is exposed as
//! `id`. Ordering is left to the client side.

use std::fmt;

/// Projects, with media, classification, narrative, and links.
pub const PROJECTS: &str = r#"*[_type == "project"]{"id": _id, title, category, date, description, overview, longDescription, "image": image.asset->url, "images": images[].asset->url, technologies, tags, challenges, outcomes, "pdf": pdf.asset->url, demo, featured}"#;

/// Skills, ordered for display.
pub const SKILLS: &str =
    r#"*[_type == "skill"] | order(category asc, name asc){name, category, level, icon}"#;

/// Education entries, most recent first.
pub const EDUCATION: &str = r#"*[_type == "education"] | order(startDate desc){"id": _id, institution, degree, field, startDate, endDate, description}"#;

/// Work experience, most recent first.
pub const EXPERIENCE: &str = r#"*[_type == "experience"] | order(startDate desc){"id": _id, company, role, startDate, endDate, description, highlights}"#;

/// Awards, most recent first.
pub const AWARDS: &str =
    r#"*[_type == "award"] | order(date desc){"id": _id, title, issuer, date, description}"#;

/// The record types the site fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Portfolio projects.
    Projects,
    /// Skills.
    Skills,
    /// Education history.
    Education,
    /// Work experience.
    Experience,
    /// Awards and recognition.
    Awards,
}

impl RecordKind {
    /// Every record kind, in page order.
    pub const ALL: [RecordKind; 5] = [
        RecordKind::Projects,
        RecordKind::Skills,
        RecordKind::Education,
        RecordKind::Experience,
        RecordKind::Awards,
    ];

    /// The fixed query for this record type.
    pub fn query(&self) -> &'static str {
        match self {
            RecordKind::Projects => PROJECTS,
            RecordKind::Skills => SKILLS,
            RecordKind::Education => EDUCATION,
            RecordKind::Experience => EXPERIENCE,
            RecordKind::Awards => AWARDS,
        }
    }

    /// Short lowercase name used in logs and errors.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Projects => "projects",
            RecordKind::Skills => "skills",
            RecordKind::Education => "education",
            RecordKind::Experience => "experience",
            RecordKind::Awards => "awards",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
