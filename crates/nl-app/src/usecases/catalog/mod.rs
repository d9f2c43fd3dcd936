//! Catalog query use cases.

mod get_project;
mod list_categories;
mod list_featured;
mod list_projects;
mod list_team;
mod load_catalog;

pub use get_project::GetProjectBySlug;
pub use list_categories::ListCategories;
pub use list_featured::ListFeaturedProjects;
pub use list_projects::ListProjects;
pub use list_team::ListTeamMembers;
pub use load_catalog::LoadCatalog;

#[cfg(test)]
pub(crate) mod fixtures {
    use std::sync::Arc;

    use nl_core::{Catalog, ProjectCategory, ProjectId, ProjectRecord, SiteContent, Slug, TeamMember};

    pub fn project(id: &str, name: &str, category: ProjectCategory, tags: &[&str]) -> ProjectRecord {
        ProjectRecord {
            id: ProjectId::from(id),
            name: name.to_string(),
            slug: Slug::new(name.to_lowercase().replace(' ', "-")),
            category,
            short_description: format!("{name} short description"),
            full_description: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            features: Vec::new(),
            metrics: Vec::new(),
            thumbnail_url: format!("/images/{id}.jpg"),
            gallery_urls: Vec::new(),
        }
    }

    pub fn sample_catalog() -> Arc<Catalog> {
        let content = SiteContent {
            projects: vec![
                project("1", "RidePulse", ProjectCategory::RideSharing, &["Flutter", "Maps"]),
                project("2", "ChatWave", ProjectCategory::Chatting, &["React Native"]),
                project("3", "PayNest", ProjectCategory::Fintech, &["Flutter", "Stripe"]),
                project("4", "MediTrack", ProjectCategory::HealthCare, &["Swift"]),
            ],
            team: vec![TeamMember {
                name: "Alex Carter".to_string(),
                role: "CEO".to_string(),
                image_url: "/team/alex.jpg".to_string(),
            }],
        };
        Arc::new(Catalog::new(content).expect("fixture catalog is consistent"))
    }
}
