//! Profile records shown on the about page: skills, education,
//! experience, and awards.

use serde::{Deserialize, Serialize};

use super::ids::RecordId;
use super::string_list;
use crate::dates::parse_lenient;

/// A skill, optionally grouped by category and rated by level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    /// Skill name, e.g. "Rust".
    pub name: String,
    /// Grouping label, e.g. "Languages".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Proficiency from 0 to 100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    /// Icon URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// A degree or course of study.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    /// Record identifier.
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// School or university.
    pub institution: String,
    /// Degree title.
    pub degree: String,
    /// Field of study.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Start date string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// End date string; absent while ongoing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A position held.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    /// Record identifier.
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Employer.
    pub company: String,
    /// Job title.
    pub role: String,
    /// Start date string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// End date string; absent for the current position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Bullet-point highlights.
    #[serde(default, deserialize_with = "string_list", skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,
}

/// An award or recognition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Award {
    /// Record identifier.
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Award title.
    pub title: String,
    /// Awarding organisation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    /// Date string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Human-readable period such as `2019 – 2023` or `2021 – Present`.
///
/// Unparseable dates are shown verbatim rather than dropped.
pub fn format_period(start: Option<&str>, end: Option<&str>) -> String {
    let show = |raw: &str| match parse_lenient(raw) {
        Some(date) => date.format("%b %Y").to_string(),
        None => raw.to_string(),
    };
    match (start, end) {
        (Some(s), Some(e)) => format!("{} – {}", show(s), show(e)),
        (Some(s), None) => format!("{} – Present", show(s)),
        (None, Some(e)) => show(e),
        (None, None) => String::new(),
    }
}
