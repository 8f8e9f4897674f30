//! Error types for template synthesis.

use thiserror::Error;

use apigw_config::ConfigError;

/// Result type alias for synthesis operations.
pub type CfnResult<T> = Result<T, CfnError>;

/// Errors that can occur while synthesizing a template.
#[derive(Error, Debug)]
pub enum CfnError {
    #[error("Ingress rule has no paths")]
    NoPaths,

    #[error("Logical name collision: {0} is derived from two different paths")]
    LogicalNameCollision(String),

    #[error("Ingress definition error: {0}")]
    Config(#[from] ConfigError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
