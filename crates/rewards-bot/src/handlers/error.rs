//! Handler error types

use rewards_service::ServiceError;
use thiserror::Error;

/// Generic reply for a failed command; the cause is only logged
pub const COMMAND_APOLOGY: &str = "Sorry, there was an error processing your request.";
/// Generic reply for a failed help command
pub const HELP_APOLOGY: &str = "Sorry, there was an error showing the help information.";

/// Handler error type
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Line was not a valid event
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// Slash command this bot does not serve
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Ledger operation failed
    #[error("Service error: {0}")]
    Service(#[from] ServiceError),
}

impl HandlerError {
    /// Get the error code for logs
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidPayload(_) => "INVALID_PAYLOAD",
            Self::UnknownCommand(_) => "UNKNOWN_COMMAND",
            Self::Service(e) => e.error_code(),
        }
    }
}

impl From<serde_json::Error> for HandlerError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidPayload(err.to_string())
    }
}

/// Apology shown to the user when `command` fails
pub fn apology_for(command: &str) -> &'static str {
    if command == "/rewards-help" {
        HELP_APOLOGY
    } else {
        COMMAND_APOLOGY
    }
}

/// Handler result type
pub type HandlerResult<T> = Result<T, HandlerError>;
