//! Service layer error types
//!
//! Provides a unified error type for all ledger operations.

use rewards_core::DomainError;
use std::fmt;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// The store rejected a write; memory already holds the new state
    Persistence(DomainError),

    /// Any other domain failure
    Domain(DomainError),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Persistence(e) => write!(f, "Ledger change not persisted: {e}"),
            Self::Domain(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Persistence(e) | Self::Domain(e) => Some(e),
        }
    }
}

impl ServiceError {
    /// Check if this is a failed write to the durable store
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }

    /// Get the error code for diagnostics
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Persistence(_) => "PERSISTENCE_WRITE_FAILED",
            Self::Domain(e) => e.code(),
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        if err.is_write_failure() {
            Self::Persistence(err)
        } else {
            Self::Domain(err)
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
