//! Project catalog domain module.
//!
//! The catalog is the immutable list of portfolio entries shown to
//! visitors, plus the team listing of the about page.

mod category;
pub mod filter;
mod project;

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use category::{CategoryFilter, ProjectCategory};
pub use filter::{filter_projects, FilterState, SearchScope};
pub use project::{ProjectMetric, ProjectRecord, Slug, TeamMember};

use crate::ids::ProjectId;

/// Raw site content as supplied by a content source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub projects: Vec<ProjectRecord>,
    #[serde(default)]
    pub team: Vec<TeamMember>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate project id: {0}")]
    DuplicateId(ProjectId),

    #[error("duplicate project slug: {0}")]
    DuplicateSlug(Slug),
}

/// Read-only catalog shared for the whole process.
///
/// Cloning is cheap: records and team live behind `Arc`.
#[derive(Debug, Clone)]
pub struct Catalog {
    projects: Arc<[ProjectRecord]>,
    team: Arc<[TeamMember]>,
}

impl Catalog {
    /// Builds the catalog, rejecting duplicate ids or slugs.
    pub fn new(content: SiteContent) -> Result<Self, CatalogError> {
        let mut ids = HashSet::new();
        let mut slugs = HashSet::new();
        for project in &content.projects {
            if !ids.insert(&project.id) {
                return Err(CatalogError::DuplicateId(project.id.clone()));
            }
            if !slugs.insert(&project.slug) {
                return Err(CatalogError::DuplicateSlug(project.slug.clone()));
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            projects = content.projects.len(),
            team = content.team.len(),
            "catalog loaded"
        );

        Ok(Self {
            projects: content.projects.into(),
            team: content.team.into(),
        })
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn team(&self) -> &[TeamMember] {
        &self.team
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn filter(&self, state: &FilterState, scope: SearchScope) -> Vec<&ProjectRecord> {
        filter_projects(
            &self.projects,
            state.active_category,
            &state.search_query,
            scope,
        )
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.slug.as_str() == slug)
    }

    /// Slugs that would need escaping in a detail-page URL.
    pub fn irregular_slugs(&self) -> Vec<&Slug> {
        self.projects
            .iter()
            .map(|p| &p.slug)
            .filter(|slug| !slug.is_url_safe())
            .collect()
    }

    /// First `count` projects in catalog order.
    pub fn featured(&self, count: usize) -> &[ProjectRecord] {
        &self.projects[..count.min(self.projects.len())]
    }
}
