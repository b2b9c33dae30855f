//! # rewards-bot
//!
//! Event adapter between the chat platform and the reward ledger.
//!
//! Inbound events arrive as newline-delimited JSON; replies leave the same
//! way. Transport to the chat platform itself lives outside this crate.

pub mod handlers;
pub mod protocol;
pub mod server;

pub use handlers::{EventDispatcher, HandlerError, HandlerResult};
pub use server::{create_dispatcher, run, serve};
