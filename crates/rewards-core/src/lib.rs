//! # rewards-core
//!
//! Domain layer containing the point table, the per-user point totals, and the
//! store trait the ledger persists through.
//! This crate has zero dependencies on infrastructure (files, runtime, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{LeaderboardEntry, PointTotals};
pub use error::DomainError;
pub use traits::{PointStore, StoreResult};
pub use value_objects::{PointTable, ReactionDirection};
