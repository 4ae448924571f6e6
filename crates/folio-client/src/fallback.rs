//! The bundled fallback dataset.
//!
//! A small, hand-curated set of records compiled into the binary. It stands
//! in for the CMS when the CMS is unreachable and backs `--offline` serving.

use std::sync::LazyLock;

use folio_core::{Award, Education, Experience, Project, Skill};
use serde::{Deserialize, Serialize};

const BUNDLED_JSON: &str = include_str!("../data/fallback.json");

static BUNDLED: LazyLock<Dataset> = LazyLock::new(|| {
    serde_json::from_str(BUNDLED_JSON).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Bundled fallback dataset is malformed; serving nothing");
        Dataset::default()
    })
});

/// Every record type the site shows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    /// Portfolio projects.
    pub projects: Vec<Project>,
    /// Skills.
    pub skills: Vec<Skill>,
    /// Education history.
    pub education: Vec<Education>,
    /// Work experience.
    pub experience: Vec<Experience>,
    /// Awards.
    pub awards: Vec<Award>,
}

impl Dataset {
    /// The dataset compiled into the binary.
    pub fn bundled() -> &'static Dataset {
        &BUNDLED
    }

    /// Parse a dataset from JSON (same layout as the bundled file).
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Whether every collection is empty.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
            && self.skills.is_empty()
            && self.education.is_empty()
            && self.experience.is_empty()
            && self.awards.is_empty()
    }
}
