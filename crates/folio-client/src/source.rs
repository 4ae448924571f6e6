//! The `ContentSource` seam and the in-memory source.

use async_trait::async_trait;
use folio_core::{Award, Education, Experience, Project, Skill};

use crate::fallback::Dataset;
use crate::Result;

/// Anything that can produce CMS records.
///
/// Each call is an independent fetch: no caching, no retries. Callers that
/// need failures masked wrap the source in a [`Loader`](crate::Loader).
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Fetch every project.
    async fn fetch_projects(&self) -> Result<Vec<Project>>;

    /// Fetch every skill.
    async fn fetch_skills(&self) -> Result<Vec<Skill>>;

    /// Fetch the education history.
    async fn fetch_education(&self) -> Result<Vec<Education>>;

    /// Fetch the work experience.
    async fn fetch_experience(&self) -> Result<Vec<Experience>>;

    /// Fetch every award.
    async fn fetch_awards(&self) -> Result<Vec<Award>>;
}

/// A source that serves a fixed [`Dataset`] from memory.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    dataset: Dataset,
}

impl StaticSource {
    /// Serve the given dataset.
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    /// Serve the bundled fallback dataset.
    pub fn bundled() -> Self {
        Self::new(Dataset::bundled().clone())
    }

    /// Serve only the given projects; every other collection is empty.
    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self::new(Dataset {
            projects,
            ..Dataset::default()
        })
    }

    /// The dataset being served.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}

#[async_trait]
impl ContentSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_projects(&self) -> Result<Vec<Project>> {
        Ok(self.dataset.projects.clone())
    }

    async fn fetch_skills(&self) -> Result<Vec<Skill>> {
        Ok(self.dataset.skills.clone())
    }

    async fn fetch_education(&self) -> Result<Vec<Education>> {
        Ok(self.dataset.education.clone())
    }

    async fn fetch_experience(&self) -> Result<Vec<Experience>> {
        Ok(self.dataset.experience.clone())
    }

    async fn fetch_awards(&self) -> Result<Vec<Award>> {
        Ok(self.dataset.awards.clone())
    }
}
