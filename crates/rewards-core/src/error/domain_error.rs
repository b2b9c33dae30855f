//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Store Errors
    // =========================================================================
    #[error("Failed to read point store {path}: {reason}")]
    StoreRead { path: String, reason: String },

    #[error("Failed to write point store {path}: {reason}")]
    StoreWrite { path: String, reason: String },

    #[error("Point store {path} is corrupt: {reason}")]
    CorruptStore { path: String, reason: String },
}

impl DomainError {
    /// Get an error code string for diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            Self::StoreRead { .. } => "STORE_READ_FAILED",
            Self::StoreWrite { .. } => "STORE_WRITE_FAILED",
            Self::CorruptStore { .. } => "CORRUPT_STORE",
        }
    }

    /// Check if this error came from writing the store
    pub fn is_write_failure(&self) -> bool {
        matches!(self, Self::StoreWrite { .. })
    }

    /// Create a store read error
    pub fn store_read(path: impl Into<String>, reason: impl ToString) -> Self {
        Self::StoreRead {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a store write error
    pub fn store_write(path: impl Into<String>, reason: impl ToString) -> Self {
        Self::StoreWrite {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a corrupt store error
    pub fn corrupt_store(path: impl Into<String>, reason: impl ToString) -> Self {
        Self::CorruptStore {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
