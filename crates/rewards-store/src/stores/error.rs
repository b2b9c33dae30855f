//! Error handling utilities for stores

use rewards_core::DomainError;
use std::io;
use std::path::Path;

/// Convert an I/O error while reading to DomainError
pub fn map_read_error(path: &Path, e: io::Error) -> DomainError {
    DomainError::store_read(path.display().to_string(), e)
}

/// Convert an I/O error while writing to DomainError
pub fn map_write_error(path: &Path, e: io::Error) -> DomainError {
    DomainError::store_write(path.display().to_string(), e)
}

/// Convert a JSON parse error to DomainError
pub fn map_parse_error(path: &Path, e: serde_json::Error) -> DomainError {
    DomainError::corrupt_store(path.display().to_string(), e)
}
