//! Storage error types

use thiserror::Error;

/// Error type for registry storage operations.
///
/// Reads never produce these: a failed read degrades to an empty
/// collection. Mutations surface them so the caller can tell the user the
/// change was lost.
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    /// I/O failure in the underlying medium
    #[error("I/O error: {0}")]
    Io(String),

    /// Failed to serialize a collection for writing
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Stored text could not be parsed
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Generic backend failure
    #[error("Storage backend error: {0}")]
    Backend(String),

    /// Backend refused the write, e.g. quota exceeded or medium disabled
    #[error("Write rejected: {0}")]
    WriteRejected(String),

    /// Invalid backend configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    /// Create a generic backend error
    pub fn backend<S: Into<String>>(msg: S) -> Self {
        Self::Backend(msg.into())
    }

    /// Create a serialization error
    pub fn serialization<S: Into<String>>(msg: S) -> Self {
        Self::Serialization(msg.into())
    }

    /// Create a deserialization error
    pub fn deserialization<S: Into<String>>(msg: S) -> Self {
        Self::Deserialization(msg.into())
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Self::Io(err.to_string())
        } else {
            Self::Deserialization(err.to_string())
        }
    }
}
