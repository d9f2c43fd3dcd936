use std::sync::Arc;

use nl_core::{Catalog, ProjectRecord};

/// Home page showcase: the first few projects in catalog order.
pub struct ListFeaturedProjects {
    catalog: Arc<Catalog>,
    count: usize,
}

impl ListFeaturedProjects {
    pub fn new(catalog: Arc<Catalog>, count: usize) -> Self {
        Self { catalog, count }
    }

    pub fn execute(&self) -> Vec<ProjectRecord> {
        self.catalog.featured(self.count).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::catalog::fixtures::sample_catalog;

    #[test]
    fn returns_configured_prefix() {
        let uc = ListFeaturedProjects::new(sample_catalog(), 3);
        let ids: Vec<String> = uc.execute().into_iter().map(|p| p.id.into_inner()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn count_larger_than_catalog_returns_all() {
        let uc = ListFeaturedProjects::new(sample_catalog(), 50);
        assert_eq!(uc.execute().len(), 4);
    }
}
