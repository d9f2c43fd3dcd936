use std::sync::Arc;

use nl_core::{Catalog, TeamMember};

/// About page team listing.
pub struct ListTeamMembers {
    catalog: Arc<Catalog>,
}

impl ListTeamMembers {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn execute(&self) -> Vec<TeamMember> {
        self.catalog.team().to_vec()
    }
}
