mod error;
mod loader;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::{ConfigError, ValidationErrors};
pub use loader::{DEFAULT_CONFIG_FILE, load_config, resolve_config};
pub use types::{AppConfig, ElasticsearchConfig, MonitorConfig};
pub use validation::validate_config;
