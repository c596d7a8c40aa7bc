//! Error types for Focus Quest.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FocusError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {field} {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("Could not determine a data directory for this platform")]
    NoDataDir,
}

impl FocusError {
    pub fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        FocusError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FocusError>;
