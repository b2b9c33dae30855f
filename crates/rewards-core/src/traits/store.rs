//! Point store trait (port) - durable storage for point totals
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use crate::entities::PointTotals;
use crate::error::DomainError;

/// Result type for store operations
pub type StoreResult<T> = Result<T, DomainError>;

/// Durable storage for the full point table
///
/// Implementations replace the stored contents wholesale on every save.
pub trait PointStore: Send + Sync {
    /// Load the persisted totals.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet, and an error when
    /// stored data exists but cannot be read or parsed.
    fn load(&self) -> StoreResult<Option<PointTotals>>;

    /// Replace the persisted totals with `totals`
    fn save(&self, totals: &PointTotals) -> StoreResult<()>;

    /// Human-readable location for logs
    fn describe(&self) -> String;
}
