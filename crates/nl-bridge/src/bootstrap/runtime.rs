//! # Use Cases Accessor
//!
//! `AppRuntime` owns the shared catalog and the single contact form;
//! commands call `runtime.usecases().xxx()` to get use cases with their
//! dependencies pre-wired.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use nl_app::usecases::{
    ContactFormController, GetProjectBySlug, ListCategories, ListFeaturedProjects, ListProjects,
    ListTeamMembers, LoadCatalog,
};
use nl_app::AppDeps;
use nl_core::config::AppConfig;
use nl_core::Catalog;

use super::wiring::{resolve_catalog_settings, resolve_contact_config, CatalogSettings};

/// Application runtime with dependencies.
pub struct AppRuntime {
    catalog: Arc<Catalog>,
    catalog_settings: CatalogSettings,
    /// Shared across commands so the form state survives between calls.
    contact_form: Arc<ContactFormController>,
}

impl AppRuntime {
    pub fn new(
        catalog: Arc<Catalog>,
        catalog_settings: CatalogSettings,
        contact_form: Arc<ContactFormController>,
    ) -> Self {
        Self {
            catalog,
            catalog_settings,
            contact_form,
        }
    }

    pub fn usecases(&self) -> UseCases<'_> {
        UseCases { runtime: self }
    }
}

/// Use case accessor attached to `AppRuntime`.
pub struct UseCases<'a> {
    runtime: &'a AppRuntime,
}

impl<'a> UseCases<'a> {
    pub fn list_projects(&self) -> ListProjects {
        ListProjects::new(
            self.runtime.catalog.clone(),
            self.runtime.catalog_settings.search_scope,
        )
    }

    pub fn get_project_by_slug(&self) -> GetProjectBySlug {
        GetProjectBySlug::new(self.runtime.catalog.clone())
    }

    pub fn list_featured_projects(&self) -> ListFeaturedProjects {
        ListFeaturedProjects::new(
            self.runtime.catalog.clone(),
            self.runtime.catalog_settings.featured_count,
        )
    }

    pub fn list_categories(&self) -> ListCategories {
        ListCategories::new()
    }

    pub fn list_team_members(&self) -> ListTeamMembers {
        ListTeamMembers::new(self.runtime.catalog.clone())
    }

    pub fn contact_form(&self) -> Arc<ContactFormController> {
        self.runtime.contact_form.clone()
    }
}

/// Loads the catalog and builds the contact form from wired ports.
pub async fn create_runtime(config: &AppConfig, deps: AppDeps) -> anyhow::Result<AppRuntime> {
    let catalog_settings = resolve_catalog_settings(config);
    let catalog = LoadCatalog::from_arc(deps.site_content.clone())
        .execute()
        .await
        .context("Failed to build catalog")?;

    let contact_form = ContactFormController::from_deps(resolve_contact_config(config), &deps);
    info!(
        form_id = %contact_form.form_id(),
        search_scope = ?catalog_settings.search_scope,
        featured = catalog_settings.featured_count,
        "runtime ready"
    );

    Ok(AppRuntime::new(
        Arc::new(catalog),
        catalog_settings,
        Arc::new(contact_form),
    ))
}
