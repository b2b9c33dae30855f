//! Domain entities - core business objects

mod leaderboard;
mod point_totals;

pub use leaderboard::LeaderboardEntry;
pub use point_totals::PointTotals;
