//! Key-value store error types
//!
//! Defines all errors that can occur when reading or writing persisted
//! session state.

use thiserror::Error;

/// Errors that can occur in a key-value store
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    /// The backing store cannot be reached (private browsing, quota disabled, no window)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// A write or remove was rejected by the backing store
    #[error("Failed to write key {key}: {reason}")]
    Write { key: String, reason: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

/// Result type alias for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StorageError::Unavailable("no window".to_string());
        assert_eq!(err.to_string(), "Storage unavailable: no window");

        let err = StorageError::Write {
            key: "theme".to_string(),
            reason: "QuotaExceededError".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to write key theme: QuotaExceededError"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let storage_err: StorageError = json_err.into();
        assert!(matches!(storage_err, StorageError::Serialization(_)));
    }
}
