use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    //-------------------------------------------------------------------------
    // IO / Parsing
    //-------------------------------------------------------------------------
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration file: {path}\n\n{source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{validation_errors}")]
    Validation { validation_errors: ValidationErrors },

    //-------------------------------------------------------------------------
    // Search index
    //-------------------------------------------------------------------------
    #[error("invalid elasticsearch url '{url}': {reason}")]
    InvalidUrl { url: String, reason: &'static str },

    #[error("index prefix must not be empty")]
    EmptyIndexPrefix,

    #[error("elasticsearch timeout must be greater than zero")]
    InvalidTimeout,

    //-------------------------------------------------------------------------
    // Thresholds
    //-------------------------------------------------------------------------
    #[error("threshold '{field}' must be a finite, non-negative number (got {value})")]
    InvalidThreshold { field: &'static str, value: f64 },

    #[error("threshold '{critical}' ({critical_value}) is below '{warning}' ({warning_value})")]
    CriticalBelowWarning {
        critical: &'static str,
        critical_value: f64,
        warning: &'static str,
        warning_value: f64,
    },

    //-------------------------------------------------------------------------
    // Monitor
    //-------------------------------------------------------------------------
    #[error("monitor interval must be greater than zero")]
    InvalidInterval,
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}

/// Every semantic problem found in one config, reported together.
#[derive(Debug)]
pub struct ValidationErrors(pub Vec<ConfigError>);

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "configuration validation failed")?;
        for err in &self.0 {
            write!(f, "\n  - {err}")?;
        }
        Ok(())
    }
}
