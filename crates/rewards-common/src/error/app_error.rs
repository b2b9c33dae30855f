//! Application error types
//!
//! Errors that stop the bot: bad configuration, a broken event stream, or an
//! internal failure at the process edge.

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Internal errors
    #[error("Internal error")]
    Internal(#[source] anyhow::Error),

    // Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    // I/O on the event stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Get error code for diagnostics
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Io(_) => "IO_ERROR",
        }
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
