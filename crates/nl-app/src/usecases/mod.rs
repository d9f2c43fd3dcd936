//! Business logic use cases
//!
//! Catalog queries are read-only views over the shared `Catalog`; the
//! contact form is a single orchestrator driving the submission state
//! machine.

pub mod catalog;
pub mod contact;

pub use catalog::{
    GetProjectBySlug, ListCategories, ListFeaturedProjects, ListProjects, ListTeamMembers,
    LoadCatalog,
};
pub use contact::{ContactFormConfig, ContactFormController, ContactFormError, SubmitOutcome};
