use crate::conf::error::ConfigError;
use crate::conf::types::AppConfig;
use crate::conf::validation::validate_config;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Config file picked up from the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "logpulse.toml";

/// Load and validate a config file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    //--------------------------------------------------------------------------
    // Hard fail: IO and parsing
    //--------------------------------------------------------------------------
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let cfg: AppConfig = toml::from_str(&contents).map_err(|e| ConfigError::parse(path, e))?;

    //--------------------------------------------------------------------------
    // Semantic validation (aggregate all errors)
    //--------------------------------------------------------------------------
    validate_config(&cfg).map_err(|errs| ConfigError::Validation {
        validation_errors: errs,
    })?;

    debug!(path = %path.display(), "loaded config");
    Ok(cfg)
}

/// Load `path` if given; otherwise `logpulse.toml` when it exists in the
/// working directory, falling back to built-in defaults.
pub fn resolve_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    match path {
        Some(p) => load_config(p),
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if default.is_file() {
                load_config(default)
            } else {
                Ok(AppConfig::default())
            }
        }
    }
}
