//! # Dependency Injection
//!
//! The only place that knows about nl-infra, nl-app and nl-bridge at once.
//! It turns the raw config facts into policy (defaults, provider choice)
//! and assembles `AppDeps`.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{info, warn};

use nl_app::usecases::ContactFormConfig;
use nl_app::AppDeps;
use nl_core::config::{AppConfig, DeliveryConfig};
use nl_core::ports::{DeliveryTarget, DisplayExpiry, MessageDeliveryPort, SiteContentPort};
use nl_core::SearchScope;
use nl_infra::{
    EmailJsDelivery, EmbeddedContentSource, FileContentSource, SimulatedDelivery,
    TokioDisplayTimer, DEFAULT_EMAILJS_ENDPOINT,
};

use crate::events::LineEventEmitter;

pub const DEFAULT_DISPLAY_DURATION_MS: u64 = 3_000;
pub const DEFAULT_DELIVERY_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_FEATURED_COUNT: usize = 3;
pub const DEFAULT_SIMULATED_LATENCY_MS: u64 = 1_500;

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Unknown delivery provider: {0}")]
    UnknownProvider(String),

    #[error("Delivery client initialization failed: {0}")]
    DeliveryInit(#[source] anyhow::Error),
}

/// Catalog policy derived from `[catalog]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSettings {
    pub search_scope: SearchScope,
    pub featured_count: usize,
    /// `None` selects the embedded dataset.
    pub content_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryProvider {
    EmailJs,
    Simulated,
}

/// Everything the runtime needs besides the catalog itself.
pub struct WiredDependencies {
    pub deps: AppDeps,
    /// Expired display timers, to be fed back into the contact form.
    pub timer_fired: mpsc::Receiver<DisplayExpiry>,
}

fn or_default(value: u64, default: u64) -> u64 {
    if value == 0 {
        default
    } else {
        value
    }
}

pub fn resolve_catalog_settings(config: &AppConfig) -> CatalogSettings {
    let raw_scope = config.catalog.search_scope.trim();
    let search_scope = if raw_scope.is_empty() {
        SearchScope::default()
    } else {
        SearchScope::from_config_value(raw_scope).unwrap_or_else(|| {
            warn!(value = %raw_scope, "unknown catalog.search_scope, using default");
            SearchScope::default()
        })
    };

    let featured_count = match config.catalog.featured_count {
        0 => DEFAULT_FEATURED_COUNT,
        n => usize::try_from(n).unwrap_or(usize::MAX),
    };

    let content_path = if config.catalog.content_path.as_os_str().is_empty() {
        None
    } else {
        Some(config.catalog.content_path.clone())
    };

    CatalogSettings {
        search_scope,
        featured_count,
        content_path,
    }
}

pub fn resolve_contact_config(config: &AppConfig) -> ContactFormConfig {
    ContactFormConfig {
        display_duration: Duration::from_millis(or_default(
            config.contact.display_duration_ms,
            DEFAULT_DISPLAY_DURATION_MS,
        )),
        delivery_timeout: Duration::from_millis(or_default(
            config.contact.delivery_timeout_ms,
            DEFAULT_DELIVERY_TIMEOUT_MS,
        )),
        target: DeliveryTarget {
            service_id: config.delivery.service_id.clone(),
            template_id: config.delivery.template_id.clone(),
            public_key: config.delivery.public_key.clone(),
        },
    }
}

/// Explicit provider wins; otherwise EmailJS only when all keys are present.
pub fn select_provider(delivery: &DeliveryConfig) -> WiringResult<DeliveryProvider> {
    match delivery.provider.trim().to_ascii_lowercase().as_str() {
        "emailjs" => Ok(DeliveryProvider::EmailJs),
        "simulated" => Ok(DeliveryProvider::Simulated),
        "" => {
            let has_keys = [
                &delivery.service_id,
                &delivery.template_id,
                &delivery.public_key,
            ]
            .iter()
            .all(|v| !v.trim().is_empty());
            Ok(if has_keys {
                DeliveryProvider::EmailJs
            } else {
                DeliveryProvider::Simulated
            })
        }
        other => Err(WiringError::UnknownProvider(other.to_string())),
    }
}

fn create_delivery(delivery: &DeliveryConfig) -> WiringResult<Arc<dyn MessageDeliveryPort>> {
    match select_provider(delivery)? {
        DeliveryProvider::EmailJs => {
            let endpoint = if delivery.endpoint.trim().is_empty() {
                DEFAULT_EMAILJS_ENDPOINT.to_string()
            } else {
                delivery.endpoint.clone()
            };
            let adapter = EmailJsDelivery::new(endpoint).map_err(WiringError::DeliveryInit)?;
            info!(endpoint = %adapter.endpoint(), "using EmailJS delivery");
            Ok(Arc::new(adapter))
        }
        DeliveryProvider::Simulated => {
            let latency = or_default(delivery.simulated_latency_ms, DEFAULT_SIMULATED_LATENCY_MS);
            info!(latency_ms = latency, "using simulated delivery");
            Ok(Arc::new(SimulatedDelivery::new(Duration::from_millis(latency))))
        }
    }
}

fn create_content_source(settings: &CatalogSettings) -> Arc<dyn SiteContentPort> {
    match &settings.content_path {
        Some(path) => {
            info!(path = %path.display(), "using site content file");
            Arc::new(FileContentSource::new(path.clone()))
        }
        None => Arc::new(EmbeddedContentSource::new()),
    }
}

/// Assembles the ports. Submission events go to `out` as protocol lines.
pub fn wire_dependencies(
    config: &AppConfig,
    out: mpsc::Sender<String>,
) -> WiringResult<WiredDependencies> {
    let catalog_settings = resolve_catalog_settings(config);
    let (display_timer, timer_fired) = TokioDisplayTimer::new();

    let deps = AppDeps {
        site_content: create_content_source(&catalog_settings),
        delivery: create_delivery(&config.delivery)?,
        display_timer: Arc::new(display_timer),
        submission_events: Arc::new(LineEventEmitter::new(out)),
    };

    Ok(WiredDependencies { deps, timer_fired })
}
