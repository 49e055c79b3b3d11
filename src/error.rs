use thiserror::Error;

use crate::validate::ValidationError;

#[derive(Debug, Error)]
pub enum RemedianError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unsupported document format `{0}` (expected .json or .toml)")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
