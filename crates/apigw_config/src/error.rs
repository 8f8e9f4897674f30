//! Error types for the config module.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading or resolving an ingress definition.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Ingress definition not found at path: {0}")]
    NotFound(PathBuf),

    #[error("Unsupported ingress definition format: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
