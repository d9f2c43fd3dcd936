pub mod config;
pub mod run;
pub mod runtime;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, resolve_config_path, CONFIG_ENV_VAR};
pub use run::{run_app, serve};
pub use runtime::{create_runtime, AppRuntime, UseCases};
pub use wiring::{wire_dependencies, WiredDependencies};
