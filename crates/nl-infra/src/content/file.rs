use std::path::PathBuf;

use anyhow::{Context, Result};
use nl_core::ports::SiteContentPort;
use nl_core::SiteContent;
use tracing::debug;

/// Site content read from a JSON file (same shape as the embedded dataset).
pub struct FileContentSource {
    path: PathBuf,
}

impl FileContentSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait::async_trait]
impl SiteContentPort for FileContentSource {
    async fn load(&self) -> Result<SiteContent> {
        debug!(path = %self.path.display(), "reading site content");
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read site content: {}", self.path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse site content: {}", self.path.display()))
    }
}
