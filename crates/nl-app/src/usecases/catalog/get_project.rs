use std::sync::Arc;

use nl_core::{Catalog, ProjectRecord};
use tracing::debug;

/// Use case backing the project detail page.
pub struct GetProjectBySlug {
    catalog: Arc<Catalog>,
}

impl GetProjectBySlug {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// `None` means the page should render "not found".
    #[tracing::instrument(name = "usecase.get_project_by_slug.execute", skip(self))]
    pub fn execute(&self, slug: &str) -> Option<ProjectRecord> {
        let found = self.catalog.find_by_slug(slug).cloned();
        if found.is_none() {
            debug!("no project with this slug");
        }
        found
    }
}
