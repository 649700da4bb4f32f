//! Error types for ganrun

use thiserror::Error;

/// Main error type for ganrun
#[derive(Error, Debug)]
pub enum GanrunError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported trainer type: {0:?}")]
    UnsupportedType(String),

    #[error("Trainer error: {0}")]
    Trainer(String),
}

pub type Result<T> = std::result::Result<T, GanrunError>;
