//! # rewards-store
//!
//! Storage layer implementing the `PointStore` trait from `rewards-core`.
//!
//! ## Overview
//!
//! - [`JsonFileStore`]: the durable store, a single pretty-printed JSON
//!   object of `user id -> total`, replaced atomically on every save
//! - [`MemoryStore`]: a process-local store for tests and ephemeral runs
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rewards_core::PointStore;
//! use rewards_store::JsonFileStore;
//!
//! let store = JsonFileStore::new("rewards_data.json");
//! let totals = store.load()?.unwrap_or_default();
//! ```

pub mod stores;

// Re-export commonly used types
pub use stores::{JsonFileStore, MemoryStore};
