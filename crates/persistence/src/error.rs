//! # Persistence Errors
//!
//! Error types for the store layer, wrapping IO and record-format failures.

use thiserror::Error;

/// Persistence layer errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt record in {file} at line {line}: {reason}")]
    Corrupt {
        file: String,
        line: usize,
        reason: String,
    },

    #[error("Record not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },
}

/// Result type alias for StoreError
pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    /// Create a NotFound error
    pub fn not_found(entity: &str, id: &str) -> Self {
        Self::NotFound {
            entity: entity.to_string(),
            id: id.to_string(),
        }
    }

    /// Create a Corrupt error
    pub fn corrupt(file: &std::path::Path, line: usize, reason: impl Into<String>) -> Self {
        Self::Corrupt {
            file: file.display().to_string(),
            line,
            reason: reason.into(),
        }
    }

    /// Whether this is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
