//! Event handlers
//!
//! Routes inbound events to the reaction, command and mention handlers.

mod command;
mod error;
mod mention;
mod reaction;

pub use command::{render_help, render_leaderboard, CommandHandler, RewardsQuery};
pub use error::{apology_for, HandlerError, HandlerResult, COMMAND_APOLOGY, HELP_APOLOGY};
pub use mention::MentionHandler;
pub use reaction::ReactionHandler;

use std::sync::Arc;

use rewards_core::ReactionDirection;
use rewards_service::RewardLedger;

use crate::protocol::{InboundEvent, Reply};

/// Dispatch inbound events to the appropriate handlers
#[derive(Debug, Clone)]
pub struct EventDispatcher {
    ledger: Arc<RewardLedger>,
    leaderboard_limit: usize,
}

impl EventDispatcher {
    /// Create a dispatcher over a shared ledger
    pub fn new(ledger: Arc<RewardLedger>, leaderboard_limit: usize) -> Self {
        Self {
            ledger,
            leaderboard_limit,
        }
    }

    /// Ledger the handlers operate on
    pub fn ledger(&self) -> &Arc<RewardLedger> {
        &self.ledger
    }

    /// Handle one event, returning the reply to send (if any)
    pub fn dispatch(&self, event: InboundEvent) -> HandlerResult<Option<Reply>> {
        match event {
            InboundEvent::ReactionAdded(reaction) => {
                ReactionHandler::handle(&self.ledger, &reaction, ReactionDirection::Added)?;
                Ok(None)
            }
            InboundEvent::ReactionRemoved(reaction) => {
                ReactionHandler::handle(&self.ledger, &reaction, ReactionDirection::Removed)?;
                Ok(None)
            }
            InboundEvent::Command(command) => {
                let text = CommandHandler::handle(&self.ledger, self.leaderboard_limit, &command)?;
                Ok(Some(Reply::new(command.channel_id, text)))
            }
            InboundEvent::AppMention(mention) => Ok(Some(MentionHandler::handle(&mention))),
        }
    }

    /// Handle one raw JSON line.
    ///
    /// Failures never escape: they are logged, and a failed command still
    /// gets a generic apology so the user is not left waiting.
    pub fn handle_line(&self, line: &str) -> Option<Reply> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let event: InboundEvent = match serde_json::from_str(line) {
            Ok(event) => event,
            Err(e) => {
                let e = HandlerError::from(e);
                tracing::warn!(error = %e, code = e.error_code(), "Dropping malformed event");
                return None;
            }
        };

        let kind = event.kind();
        let failed_command = match &event {
            InboundEvent::Command(command) => {
                Some((command.command.clone(), command.channel_id.clone()))
            }
            _ => None,
        };

        match self.dispatch(event) {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!(event = kind, error = %e, code = e.error_code(), "Event handling failed");
                failed_command.map(|(command, channel)| Reply::new(channel, apology_for(&command)))
            }
        }
    }
}
