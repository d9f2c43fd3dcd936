use crate::catalog::SiteContent;

/// Supplies the static site content once at startup.
#[async_trait::async_trait]
pub trait SiteContentPort: Send + Sync {
    async fn load(&self) -> anyhow::Result<SiteContent>;
}
