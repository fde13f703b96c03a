//! Error types.
//!
//! Placement failures and conflicts are data, not errors. This type covers
//! lookups that miss, rejected moves, malformed input and configuration.

use crate::moves::MoveRejection;
use crate::validation::ValidationError;

/// Crate-wide error type.
#[derive(Debug, thiserror::Error)]
pub enum TimetableError {
    #[error("schedule version not found: {id}")]
    VersionNotFound { id: String },

    #[error("session not found: {id}")]
    SessionNotFound { id: String },

    #[error("move rejected: {0}")]
    MoveRejected(#[from] MoveRejection),

    #[error("invalid input: {} problem(s)", .0.len())]
    InvalidInput(Vec<ValidationError>),

    #[error("invalid engine configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl TimetableError {
    pub fn version_not_found(id: impl Into<String>) -> Self {
        Self::VersionNotFound { id: id.into() }
    }

    pub fn session_not_found(id: impl Into<String>) -> Self {
        Self::SessionNotFound { id: id.into() }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TimetableError>;
