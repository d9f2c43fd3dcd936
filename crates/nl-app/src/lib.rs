//! NextLab Application Orchestration Layer
//!
//! This crate contains the catalog queries and the contact form workflow.

pub mod deps;
pub mod usecases;

pub use deps::AppDeps;
