//! Reaction direction - whether a reaction was added or removed

use std::fmt;

/// Direction of a reaction event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReactionDirection {
    /// Reaction added to a message (+1)
    Added,
    /// Reaction removed from a message (-1)
    Removed,
}

impl ReactionDirection {
    /// Sign applied to the emoji's point value
    #[inline]
    pub const fn sign(self) -> i64 {
        match self {
            Self::Added => 1,
            Self::Removed => -1,
        }
    }
}

impl fmt::Display for ReactionDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added => write!(f, "added"),
            Self::Removed => write!(f, "removed"),
        }
    }
}
