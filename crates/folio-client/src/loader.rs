//! Failure-masking wrapper around a [`ContentSource`].
//!
//! Pages never see fetch errors. A failed fetch is logged once at `warn`
//! and replaced according to the [`FallbackPolicy`].

use std::sync::Arc;

use folio_core::{Award, Education, Experience, Project, Skill};

use crate::config::FallbackPolicy;
use crate::fallback::Dataset;
use crate::queries::RecordKind;
use crate::source::ContentSource;
use crate::Result;

/// A content source plus the policy for masking its failures.
pub struct Loader<S: ?Sized = dyn ContentSource> {
    source: Arc<S>,
    policy: FallbackPolicy,
}

impl<S: ?Sized> Clone for Loader<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            policy: self.policy,
        }
    }
}

impl<S: ContentSource> Loader<S> {
    /// Wrap an owned source.
    pub fn new(source: S, policy: FallbackPolicy) -> Self {
        Self::from_arc(Arc::new(source), policy)
    }
}

impl<S: ContentSource + ?Sized> Loader<S> {
    /// Wrap a shared source.
    pub fn from_arc(source: Arc<S>, policy: FallbackPolicy) -> Self {
        Self { source, policy }
    }

    /// The active fallback policy.
    pub fn policy(&self) -> FallbackPolicy {
        self.policy
    }

    /// The wrapped source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Every project, or the fallback.
    pub async fn projects(&self) -> Vec<Project> {
        let fetched = self.source.fetch_projects().await;
        self.settle(RecordKind::Projects, fetched, |d| &d.projects)
    }

    /// Every skill, or the fallback.
    pub async fn skills(&self) -> Vec<Skill> {
        let fetched = self.source.fetch_skills().await;
        self.settle(RecordKind::Skills, fetched, |d| &d.skills)
    }

    /// The education history, or the fallback.
    pub async fn education(&self) -> Vec<Education> {
        let fetched = self.source.fetch_education().await;
        self.settle(RecordKind::Education, fetched, |d| &d.education)
    }

    /// The work experience, or the fallback.
    pub async fn experience(&self) -> Vec<Experience> {
        let fetched = self.source.fetch_experience().await;
        self.settle(RecordKind::Experience, fetched, |d| &d.experience)
    }

    /// Every award, or the fallback.
    pub async fn awards(&self) -> Vec<Award> {
        let fetched = self.source.fetch_awards().await;
        self.settle(RecordKind::Awards, fetched, |d| &d.awards)
    }

    /// Everything except projects, fetched concurrently (the about page).
    pub async fn profile(&self) -> Dataset {
        let (skills, education, experience, awards) = tokio::join!(
            self.skills(),
            self.education(),
            self.experience(),
            self.awards()
        );
        Dataset {
            projects: Vec::new(),
            skills,
            education,
            experience,
            awards,
        }
    }

    /// Every record type, fetched concurrently.
    pub async fn dataset(&self) -> Dataset {
        let (projects, profile) = tokio::join!(self.projects(), self.profile());
        Dataset {
            projects,
            ..profile
        }
    }

    fn settle<T: Clone>(
        &self,
        kind: RecordKind,
        fetched: Result<Vec<T>>,
        pick: impl FnOnce(&Dataset) -> &Vec<T>,
    ) -> Vec<T> {
        match fetched {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(
                    kind = %kind,
                    source = self.source.name(),
                    policy = ?self.policy,
                    error = %err,
                    "Content fetch failed; serving fallback"
                );
                match self.policy {
                    FallbackPolicy::Bundled => pick(Dataset::bundled()).clone(),
                    FallbackPolicy::Empty => Vec::new(),
                }
            }
        }
    }
}
