//! Test fixtures and event builders
//!
//! Provides inbound event payloads shaped like the chat platform sends them.

use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique user id
pub fn unique_user() -> String {
    format!("U{:06}", COUNTER.fetch_add(1, Ordering::SeqCst))
}

/// `reaction_added` on a message written by `author`
pub fn reaction_added(reactor: &str, emoji: &str, author: &str) -> Value {
    reaction("reaction_added", reactor, emoji, author)
}

/// `reaction_removed` on a message written by `author`
pub fn reaction_removed(reactor: &str, emoji: &str, author: &str) -> Value {
    reaction("reaction_removed", reactor, emoji, author)
}

fn reaction(kind: &str, reactor: &str, emoji: &str, author: &str) -> Value {
    json!({
        "type": kind,
        "user": reactor,
        "reaction": emoji,
        "item_user": author,
        "item": { "type": "message", "channel": "C_GENERAL", "ts": "1700000000.000100" }
    })
}

/// `/rewards` invoked by `user` with `text`
pub fn rewards_command(user: &str, text: &str) -> Value {
    command("/rewards", user, text)
}

/// `/rewards-help` invoked by `user`
pub fn help_command(user: &str) -> Value {
    command("/rewards-help", user, "")
}

fn command(name: &str, user: &str, text: &str) -> Value {
    json!({
        "type": "command",
        "command": name,
        "text": text,
        "user_id": user,
        "channel_id": "C_GENERAL"
    })
}

/// Bot mention in `channel`
pub fn mention(user: &str, channel: &str) -> Value {
    json!({ "type": "app_mention", "user": user, "channel": channel })
}
