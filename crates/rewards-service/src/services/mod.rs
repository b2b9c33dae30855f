//! Business logic services
//!
//! The reward ledger turns reaction events into point totals and keeps the
//! durable store in step with memory.

pub mod error;
pub mod ledger;

pub use error::{ServiceError, ServiceResult};
pub use ledger::{RewardLedger, DEFAULT_LEADERBOARD_LIMIT};
