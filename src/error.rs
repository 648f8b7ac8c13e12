//! Error types for Postbox
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using PostboxError
pub type Result<T> = std::result::Result<T, PostboxError>;

/// Unified error type for Postbox operations
#[derive(Debug, Error)]
pub enum PostboxError {
    // -------------------------------------------------------------------------
    // Caller Errors (reported, never retried)
    // -------------------------------------------------------------------------
    #[error("Missing fields: {}", .missing.join(", "))]
    Validation { missing: Vec<&'static str> },

    #[error("Invalid sort field '{0}'. Must be 'title' or 'content'.")]
    InvalidSortField(String),

    #[error("Invalid direction '{0}'. Must be 'asc' or 'desc'.")]
    InvalidDirection(String),

    #[error("Post with id {0} not found.")]
    NotFound(u64),

    /// A path segment that is not a valid post id
    #[error("Post with id {0} not found.")]
    InvalidId(String),

    #[error("Request body must be JSON")]
    MalformedBody,

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    #[error("Corrupt store at {}: {reason}", .path.display())]
    CorruptStore { path: PathBuf, reason: String },

    #[error("No post id left above {}", u64::MAX)]
    IdsExhausted,

    #[error("Failed to persist posts to {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Runtime Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl PostboxError {
    /// True for errors caused by the caller's input (4xx-class).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            PostboxError::Validation { .. }
                | PostboxError::InvalidSortField(_)
                | PostboxError::InvalidDirection(_)
                | PostboxError::NotFound(_)
                | PostboxError::InvalidId(_)
                | PostboxError::MalformedBody
        )
    }
}

impl From<serde_json::Error> for PostboxError {
    fn from(err: serde_json::Error) -> Self {
        PostboxError::Serialization(err.to_string())
    }
}
