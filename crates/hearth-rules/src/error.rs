//! Error types for the rest engine.

use crate::host::HostError;

/// Errors that can occur while resting or loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    /// A host write failed. Earlier writes for the same character stay
    /// applied.
    #[error("host write failed: {0}")]
    Host(#[from] HostError),

    /// The configuration could not be used.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A JSON document could not be decoded.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A file could not be read.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for rest operations.
pub type RulesResult<T> = Result<T, RulesError>;
