//! Inbound event payloads
//!
//! Field names follow the chat platform's event API so upstream transports
//! can forward payloads unchanged.

use serde::{Deserialize, Serialize};

/// An event forwarded by the transport, tagged by `type`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InboundEvent {
    /// Someone added an emoji reaction
    ReactionAdded(ReactionEvent),
    /// Someone removed an emoji reaction
    ReactionRemoved(ReactionEvent),
    /// A slash command was invoked
    Command(CommandEvent),
    /// The bot was mentioned
    AppMention(MentionEvent),
}

impl InboundEvent {
    /// Event type name as it appears on the wire
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ReactionAdded(_) => "reaction_added",
            Self::ReactionRemoved(_) => "reaction_removed",
            Self::Command(_) => "command",
            Self::AppMention(_) => "app_mention",
        }
    }
}

/// Reaction added/removed payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionEvent {
    /// User who reacted
    pub user: String,
    /// Emoji name without colons
    pub reaction: String,
    /// What was reacted to
    pub item: ReactionItem,
    /// Author of the reacted-to item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_user: Option<String>,
}

impl ReactionEvent {
    /// Author of the message, if known and non-empty
    pub fn author(&self) -> Option<&str> {
        self.item_user.as_deref().filter(|author| !author.is_empty())
    }

    /// Check if the reactor reacted to their own message
    pub fn is_self_reaction(&self) -> bool {
        self.author() == Some(self.user.as_str())
    }
}

/// Target of a reaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionItem {
    /// Item kind: `message`, `file`, ...
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub ts: Option<String>,
}

impl ReactionItem {
    /// Only message reactions earn points
    pub fn is_message(&self) -> bool {
        self.kind == "message"
    }
}

/// Slash command payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandEvent {
    /// Command name including the slash, e.g. `/rewards`
    pub command: String,
    /// Text after the command name
    #[serde(default)]
    pub text: String,
    /// User who invoked the command
    pub user_id: String,
    #[serde(default)]
    pub channel_id: Option<String>,
}

/// Mention payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentionEvent {
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
}

/// Outbound text reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    pub text: String,
}

impl Reply {
    /// Create a reply to `channel`
    pub fn new(channel: Option<String>, text: impl Into<String>) -> Self {
        Self {
            channel,
            text: text.into(),
        }
    }
}
