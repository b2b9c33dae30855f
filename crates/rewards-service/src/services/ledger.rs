//! Reward ledger
//!
//! Converts reaction events into point changes, answers point and
//! leaderboard queries, and writes the full table through to the store after
//! every change.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info, instrument, warn};

use rewards_core::{LeaderboardEntry, PointStore, PointTable, PointTotals, ReactionDirection};

use super::error::{ServiceError, ServiceResult};

/// Leaderboard size used when the caller has no preference
pub const DEFAULT_LEADERBOARD_LIMIT: usize = 10;

/// Reward ledger
///
/// One instance is shared (behind `Arc`) by every event handler. Each
/// mutation and the save that follows it happen under a single lock, so
/// concurrent events never lose an update and the store never lags behind a
/// change another caller has already observed.
pub struct RewardLedger {
    table: PointTable,
    store: Arc<dyn PointStore>,
    totals: Mutex<PointTotals>,
}

impl RewardLedger {
    /// Open a ledger over `store`, loading whatever it already holds.
    ///
    /// A missing store starts empty. An unreadable or corrupt store also
    /// starts empty, with a warning; it is overwritten on the next change.
    pub fn open(table: PointTable, store: Arc<dyn PointStore>) -> Self {
        let totals = match store.load() {
            Ok(Some(totals)) => {
                info!(store = %store.describe(), users = totals.len(), "Loaded point totals");
                totals
            }
            Ok(None) => {
                info!(store = %store.describe(), "No stored point totals, starting empty");
                PointTotals::new()
            }
            Err(e) => {
                warn!(
                    store = %store.describe(),
                    error = %e,
                    code = e.code(),
                    "Point store unreadable, starting from an empty table"
                );
                PointTotals::new()
            }
        };

        Self {
            table,
            store,
            totals: Mutex::new(totals),
        }
    }

    /// Point table used to value emoji
    pub fn point_table(&self) -> &PointTable {
        &self.table
    }

    /// Apply one reaction event to `user_id`'s total.
    ///
    /// Returns the emoji's point value (the magnitude involved, not the
    /// signed change). Events with an empty user id or emoji name are
    /// ignored and return 0. Removals never take a total below zero.
    ///
    /// If the store rejects the write the new total stays in memory and
    /// [`ServiceError::Persistence`] is returned.
    #[instrument(skip(self))]
    pub fn apply_reaction(
        &self,
        user_id: &str,
        emoji: &str,
        direction: ReactionDirection,
    ) -> ServiceResult<u32> {
        if user_id.is_empty() || emoji.is_empty() {
            debug!("Ignoring reaction without user or emoji");
            return Ok(0);
        }

        let points = self.table.points_for(emoji);
        let delta = direction.sign() * i64::from(points);

        let mut totals = self.totals.lock();
        let total = totals.apply_delta(user_id, delta);
        let saved = self.persist(&totals);
        drop(totals);

        info!(
            user_id = %user_id,
            emoji = %emoji,
            direction = %direction,
            points,
            total,
            "Reaction applied"
        );

        saved.map(|()| points)
    }

    /// Award points for a reaction added to one of `user_id`'s messages
    pub fn add_points(&self, user_id: &str, emoji: &str) -> ServiceResult<u32> {
        self.apply_reaction(user_id, emoji, ReactionDirection::Added)
    }

    /// Take back points for a reaction removed from one of `user_id`'s messages
    pub fn remove_points(&self, user_id: &str, emoji: &str) -> ServiceResult<u32> {
        self.apply_reaction(user_id, emoji, ReactionDirection::Removed)
    }

    /// Current total for a user (0 if never seen)
    pub fn user_points(&self, user_id: &str) -> u64 {
        self.totals.lock().get(user_id)
    }

    /// Top `limit` users by points, ties in first-seen order
    pub fn leaderboard(&self, limit: usize) -> Vec<LeaderboardEntry> {
        self.totals.lock().leaderboard(limit)
    }

    /// Set a user's total to zero; unknown users are left alone
    #[instrument(skip(self))]
    pub fn reset_user(&self, user_id: &str) -> ServiceResult<()> {
        let mut totals = self.totals.lock();
        if !totals.reset(user_id) {
            debug!("Reset requested for unknown user");
            return Ok(());
        }
        let saved = self.persist(&totals);
        drop(totals);

        info!(user_id = %user_id, "User points reset");
        saved
    }

    /// Drop every user's total
    #[instrument(skip(self))]
    pub fn reset_all(&self) -> ServiceResult<()> {
        let mut totals = self.totals.lock();
        let cleared = totals.len();
        totals.clear();
        let saved = self.persist(&totals);
        drop(totals);

        info!(users = cleared, "All points reset");
        saved
    }

    /// Copy of the current totals
    pub fn snapshot(&self) -> PointTotals {
        self.totals.lock().clone()
    }

    fn persist(&self, totals: &PointTotals) -> ServiceResult<()> {
        self.store.save(totals).map_err(|e| {
            warn!(
                store = %self.store.describe(),
                error = %e,
                "Failed to persist point totals; keeping in-memory state"
            );
            ServiceError::from(e)
        })
    }
}

impl std::fmt::Debug for RewardLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RewardLedger")
            .field("table", &self.table)
            .field("store", &self.store.describe())
            .field("users", &self.totals.lock().len())
            .finish()
    }
}
