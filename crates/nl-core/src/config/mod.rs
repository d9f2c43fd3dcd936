//! # Configuration DTO
//!
//! Maps the TOML configuration file onto plain data. Nothing here
//! validates values or computes defaults: an empty string or a zero is a
//! valid fact, and the bootstrap layer decides what it means.

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub contact: ContactConfig,
    pub delivery: DeliveryConfig,
    pub logging: LoggingConfig,
}

/// `[catalog]` section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// JSON content file (empty = embedded dataset, no existence check)
    pub content_path: PathBuf,
    /// Raw scope name as written in the file
    pub search_scope: String,
    pub featured_count: u64,
}

/// `[contact]` section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactConfig {
    pub display_duration_ms: u64,
    pub delivery_timeout_ms: u64,
}

/// `[delivery]` section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryConfig {
    /// "emailjs", "simulated" or empty
    pub provider: String,
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub simulated_latency_ms: u64,
}

/// `[logging]` section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub file_logging: bool,
}

fn str_at(value: &toml::Value, section: &str, key: &str) -> String {
    value
        .get(section)
        .and_then(|s| s.get(key))
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string()
}

// Negative integers are a fact too; they read as zero.
fn u64_at(value: &toml::Value, section: &str, key: &str) -> u64 {
    value
        .get(section)
        .and_then(|s| s.get(key))
        .and_then(|v| v.as_integer())
        .map(|n| n.max(0) as u64)
        .unwrap_or(0)
}

impl AppConfig {
    /// Create AppConfig from a parsed TOML document.
    ///
    /// Must not contain validation or default value logic.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            catalog: CatalogConfig {
                content_path: PathBuf::from(str_at(toml_value, "catalog", "content_path")),
                search_scope: str_at(toml_value, "catalog", "search_scope"),
                featured_count: u64_at(toml_value, "catalog", "featured_count"),
            },
            contact: ContactConfig {
                display_duration_ms: u64_at(toml_value, "contact", "display_duration_ms"),
                delivery_timeout_ms: u64_at(toml_value, "contact", "delivery_timeout_ms"),
            },
            delivery: DeliveryConfig {
                provider: str_at(toml_value, "delivery", "provider"),
                endpoint: str_at(toml_value, "delivery", "endpoint"),
                service_id: str_at(toml_value, "delivery", "service_id"),
                template_id: str_at(toml_value, "delivery", "template_id"),
                public_key: str_at(toml_value, "delivery", "public_key"),
                simulated_latency_ms: u64_at(toml_value, "delivery", "simulated_latency_ms"),
            },
            logging: LoggingConfig {
                file_logging: toml_value
                    .get("logging")
                    .and_then(|l| l.get("file_logging"))
                    .and_then(|v| v.as_bool())
                    .unwrap_or(false),
            },
        })
    }

    /// Create empty AppConfig (all empty/zero values)
    pub fn empty() -> Self {
        Self {
            catalog: CatalogConfig {
                content_path: PathBuf::new(),
                search_scope: String::new(),
                featured_count: 0,
            },
            contact: ContactConfig {
                display_duration_ms: 0,
                delivery_timeout_ms: 0,
            },
            delivery: DeliveryConfig {
                provider: String::new(),
                endpoint: String::new(),
                service_id: String::new(),
                template_id: String::new(),
                public_key: String::new(),
                simulated_latency_ms: 0,
            },
            logging: LoggingConfig {
                file_logging: false,
            },
        }
    }
}
