use std::sync::Arc;

use anyhow::{Context, Result};
use nl_core::ports::SiteContentPort;
use nl_core::Catalog;
use tracing::{info, info_span, warn, Instrument};

/// Loads site content once at startup and freezes it into a `Catalog`.
pub struct LoadCatalog {
    source: Arc<dyn SiteContentPort>,
}

impl LoadCatalog {
    pub fn from_arc(source: Arc<dyn SiteContentPort>) -> Self {
        Self { source }
    }

    pub async fn execute(&self) -> Result<Catalog> {
        let span = info_span!("usecase.load_catalog.execute");
        async {
            let content = self
                .source
                .load()
                .await
                .context("Failed to load site content")?;
            let catalog = Catalog::new(content).context("Site content is inconsistent")?;
            // Kept as-is; lookups match the stored slug exactly.
            for slug in catalog.irregular_slugs() {
                warn!(slug = %slug, "project slug is not URL-safe");
            }
            info!(projects = catalog.len(), team = catalog.team().len(), "catalog ready");
            Ok(catalog)
        }
        .instrument(span)
        .await
    }
}
