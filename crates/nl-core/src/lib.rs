//! # nl-core
//!
//! Core domain models and business logic for the NextLab site.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

pub mod catalog;
pub mod config;
pub mod contact;
pub mod ids;
pub mod ports;

// Re-export commonly used types at the crate root
pub use catalog::{
    Catalog, CatalogError, CategoryFilter, FilterState, ProjectCategory, ProjectMetric,
    ProjectRecord, SearchScope, SiteContent, Slug, TeamMember,
};
pub use config::AppConfig;
pub use contact::{
    ContactFormSnapshot, ContactMessage, DeliveryFailure, FieldError, FieldErrorKind, FieldErrors, FormField,
    FormFields, SubmissionAction, SubmissionEvent, SubmissionState, SubmissionStateMachine,
};
pub use ids::{FormId, ProjectId};
