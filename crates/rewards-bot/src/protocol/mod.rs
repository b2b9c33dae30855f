//! Wire format for inbound events and outbound replies

mod events;

pub use events::{CommandEvent, InboundEvent, MentionEvent, ReactionEvent, ReactionItem, Reply};
