//! # rewards-service
//!
//! Application layer containing the reward ledger.

pub mod services;

pub use services::{RewardLedger, ServiceError, ServiceResult, DEFAULT_LEADERBOARD_LIMIT};
