//! Error types for the key-value backend

use thiserror::Error;
use wardbook_core::StoreError;

/// Key-value medium error type
#[derive(Error, Debug)]
pub enum KvError {
    /// Underlying filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Key contains characters the medium cannot map to a location
    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

/// Result type for key-value operations
pub type KvResult<T> = Result<T, KvError>;

impl From<KvError> for StoreError {
    fn from(err: KvError) -> Self {
        match err {
            KvError::Io(e) => Self::Io(e.to_string()),
            KvError::InvalidKey(msg) => Self::Configuration(format!("invalid key: {msg}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_into_core_store_error() {
        let err = KvError::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
        assert!(matches!(StoreError::from(err), StoreError::Io(_)));

        let err = KvError::InvalidKey("../escape".into());
        assert!(matches!(StoreError::from(err), StoreError::Configuration(_)));
    }
}
