use std::sync::Arc;

use nl_core::{Catalog, FilterState, ProjectRecord, SearchScope};
use tracing::debug;

/// Use case for the filterable project gallery.
///
/// The search scope is fixed at construction and applied to every query.
pub struct ListProjects {
    catalog: Arc<Catalog>,
    scope: SearchScope,
}

impl ListProjects {
    pub fn new(catalog: Arc<Catalog>, scope: SearchScope) -> Self {
        Self { catalog, scope }
    }

    #[tracing::instrument(name = "usecase.list_projects.execute", skip(self, filter), fields(category = %filter.active_category.label()))]
    pub fn execute(&self, filter: &FilterState) -> Vec<ProjectRecord> {
        let matches: Vec<ProjectRecord> = self
            .catalog
            .filter(filter, self.scope)
            .into_iter()
            .cloned()
            .collect();
        debug!(count = matches.len(), "projects filtered");
        matches
    }
}
