//! App mention handler

use crate::protocol::{MentionEvent, Reply};

const MENTION_HINT: &str =
    "Hi! Use `/rewards` to check your points or `/rewards-help` for more information!";

/// Answers when the bot is mentioned
pub struct MentionHandler;

impl MentionHandler {
    /// Reply with a usage hint
    pub fn handle(event: &MentionEvent) -> Reply {
        Reply::new(event.channel.clone(), MENTION_HINT)
    }
}
