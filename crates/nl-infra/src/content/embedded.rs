use anyhow::{Context, Result};
use nl_core::ports::SiteContentPort;
use nl_core::SiteContent;

const SITE_CONTENT_JSON: &str = include_str!("../../assets/site_content.json");

/// The dataset shipped with the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedContentSource;

impl EmbeddedContentSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl SiteContentPort for EmbeddedContentSource {
    async fn load(&self) -> Result<SiteContent> {
        serde_json::from_str(SITE_CONTENT_JSON).context("Embedded site content is malformed")
    }
}
