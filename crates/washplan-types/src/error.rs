//! Error types for washplan

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration directory not found")]
    NotFound,

    #[error("failed to parse configuration: {0}")]
    Parse(String),
}

#[derive(Debug, Error)]
pub enum Error {
    /// The referenced record does not exist.
    #[error("record not found: id {0}")]
    NotFound(u64),

    /// A required field is missing or malformed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The backing store could not be read or written. Absence of the
    /// store file on first run is not a storage error.
    #[error("storage unavailable: {0}")]
    Storage(String),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
