//! Reaction event handler

use rewards_core::ReactionDirection;
use rewards_service::RewardLedger;
use tracing::debug;

use super::error::HandlerResult;
use crate::protocol::ReactionEvent;

/// Applies reaction events to the ledger
pub struct ReactionHandler;

impl ReactionHandler {
    /// Apply a reaction to the reacted-to message's author.
    ///
    /// Returns the points involved, or 0 when the event is skipped: non-message
    /// items, unknown authors, and reactions to one's own message.
    pub fn handle(
        ledger: &RewardLedger,
        event: &ReactionEvent,
        direction: ReactionDirection,
    ) -> HandlerResult<u32> {
        if !event.item.is_message() {
            debug!(item_type = %event.item.kind, "Ignoring reaction on non-message item");
            return Ok(0);
        }

        let Some(author) = event.author() else {
            debug!(reaction = %event.reaction, "Ignoring reaction without message author");
            return Ok(0);
        };

        if event.is_self_reaction() {
            debug!(user = %event.user, "Ignoring reaction to own message");
            return Ok(0);
        }

        Ok(ledger.apply_reaction(author, &event.reaction, direction)?)
    }
}
