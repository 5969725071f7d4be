//! Error types for configuration and item input.
//!
//! The layout engine itself never fails; these cover everything around it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScatterError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("invalid item {index}: {reason}")]
    InvalidItem { index: usize, reason: String },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScatterError>;
