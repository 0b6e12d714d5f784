//! Configuration error types.

use thiserror::Error;

/// Configuration loading error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadFile(#[from] std::io::Error),
    #[error("failed to parse YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to parse config script: {0}")]
    Script(String),
    #[error("unsupported config format: {0}")]
    UnsupportedFormat(String),
    #[error("validation failed: {field}: {reason}")]
    Validation { field: String, reason: String },
}

impl ConfigError {
    pub(crate) fn validation(field: &str, reason: impl Into<String>) -> Self {
        ConfigError::Validation {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// Name of the offending field, for validation failures.
    pub fn field(&self) -> Option<&str> {
        match self {
            ConfigError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}
