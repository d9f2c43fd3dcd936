use std::path::PathBuf;

use nl_bridge::bootstrap::tracing::init_tracing_subscriber;
use nl_bridge::bootstrap::{load_config, resolve_config_path, run_app, CONFIG_ENV_VAR};
use nl_core::config::AppConfig;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is normal.
    let _ = dotenvy::dotenv();

    let config_path = resolve_config_path(
        std::env::args_os().nth(1).map(PathBuf::from),
        std::env::var_os(CONFIG_ENV_VAR),
    );

    // Tracing is not up yet, so remember the failure and report it after.
    let (config, load_error) = match config_path.clone() {
        Some(path) if path.exists() => match load_config(path) {
            Ok(config) => (config, None),
            Err(err) => (AppConfig::empty(), Some(err)),
        },
        _ => (AppConfig::empty(), None),
    };

    if let Err(err) = init_tracing_subscriber(config.logging.file_logging) {
        eprintln!("Failed to initialize tracing: {err:#}");
    }

    match (&config_path, load_error) {
        (Some(path), Some(err)) => {
            warn!(path = %path.display(), error = %format!("{err:#}"), "config unreadable, using defaults")
        }
        (Some(path), None) if path.exists() => info!(path = %path.display(), "config loaded"),
        _ => warn!("no config file found, using defaults"),
    }

    if let Err(err) = run_app(config).await {
        error!(error = %format!("{err:#}"), "nextlab stopped with an error");
        return Err(err);
    }
    Ok(())
}
