//! Journal error types

use thiserror::Error;

/// Errors that can occur while snapshotting the journal
#[derive(Error, Debug)]
pub enum JournalError {
    /// Serialization/deserialization of a snapshot failed
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for JournalError {
    fn from(err: serde_json::Error) -> Self {
        JournalError::Serialization(err.to_string())
    }
}

/// Result type alias for journal operations
pub type JournalResult<T> = Result<T, JournalError>;
