//! Integration test utilities for the rewards bot
//!
//! This crate provides helpers for running end-to-end tests against the
//! JSON-lines event loop with a throwaway storage file.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
