//! # Configuration Loader
//!
//! Reads the TOML file and maps it onto the `AppConfig` DTO. No validation
//! and no defaults here: whatever the file says is accepted as a fact.

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::Context;
use nl_core::config::AppConfig;

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "NEXTLAB_CONFIG";

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Picks the config file: CLI argument, then `NEXTLAB_CONFIG`, then the
/// per-user config directory.
pub fn resolve_config_path(cli_arg: Option<PathBuf>, env_value: Option<OsString>) -> Option<PathBuf> {
    cli_arg
        .or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
        .or_else(|| dirs::config_dir().map(|dir| dir.join("nextlab").join("config.toml")))
}
