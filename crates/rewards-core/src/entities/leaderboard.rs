//! Leaderboard entry - one ranked row of the leaderboard

/// A user's position on the leaderboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub user_id: String,
    pub points: u64,
}

impl LeaderboardEntry {
    /// Create a new LeaderboardEntry
    pub fn new(user_id: impl Into<String>, points: u64) -> Self {
        Self {
            user_id: user_id.into(),
            points,
        }
    }
}
