//! Point totals - per-user accumulated points
//!
//! Keys keep the order in which they were first written. That order is the
//! leaderboard tie-break and the key order of the persisted document.

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

use super::LeaderboardEntry;

/// Insertion-ordered mapping from user id to point total
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointTotals {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl PointTotals {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Total for a user; absent users have 0
    #[inline]
    pub fn get(&self, user_id: &str) -> u64 {
        self.index
            .get(user_id)
            .map_or(0, |&slot| self.entries[slot].1)
    }

    /// Check if a user has an entry (possibly 0)
    #[inline]
    pub fn contains(&self, user_id: &str) -> bool {
        self.index.contains_key(user_id)
    }

    /// Set a user's total, appending the user if not yet present
    pub fn set(&mut self, user_id: &str, total: u64) {
        match self.index.get(user_id) {
            Some(&slot) => self.entries[slot].1 = total,
            None => {
                self.index.insert(user_id.to_string(), self.entries.len());
                self.entries.push((user_id.to_string(), total));
            }
        }
    }

    /// Apply a signed delta to a user's total, clamping at zero.
    ///
    /// Returns the new total.
    pub fn apply_delta(&mut self, user_id: &str, delta: i64) -> u64 {
        let current = self.get(user_id);
        let updated = if delta >= 0 {
            current.saturating_add(delta.unsigned_abs())
        } else {
            current.saturating_sub(delta.unsigned_abs())
        };
        self.set(user_id, updated);
        updated
    }

    /// Zero a user's total, keeping the key.
    ///
    /// Returns false if the user had no entry.
    pub fn reset(&mut self, user_id: &str) -> bool {
        match self.index.get(user_id) {
            Some(&slot) => {
                self.entries[slot].1 = 0;
                true
            }
            None => false,
        }
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Number of tracked users
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no users are tracked
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(user_id, total)` in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(user, total)| (user.as_str(), *total))
    }

    /// Top `limit` users by points, ties in insertion order
    pub fn leaderboard(&self, limit: usize) -> Vec<LeaderboardEntry> {
        if limit == 0 {
            return Vec::new();
        }

        let mut ranked: Vec<&(String, u64)> = self.entries.iter().collect();
        // sort_by is stable, so equal totals keep insertion order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .take(limit)
            .map(|(user, total)| LeaderboardEntry::new(user.clone(), *total))
            .collect()
    }
}

impl<S: AsRef<str>> FromIterator<(S, u64)> for PointTotals {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut totals = Self::new();
        for (user, total) in iter {
            totals.set(user.as_ref(), total);
        }
        totals
    }
}

// Serialize as a flat `{ "user": total }` object in insertion order
impl Serialize for PointTotals {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (user, total) in &self.entries {
            map.serialize_entry(user, total)?;
        }
        map.end()
    }
}

// Deserialize keeping document key order; negative or fractional totals are rejected
impl<'de> Deserialize<'de> for PointTotals {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PointTotalsVisitor;

        impl<'de> Visitor<'de> for PointTotalsVisitor {
            type Value = PointTotals;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of user ids to non-negative integer totals")
            }

            fn visit_map<A>(self, mut access: A) -> Result<PointTotals, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut totals = PointTotals::new();
                while let Some((user, total)) = access.next_entry::<String, u64>()? {
                    totals.set(&user, total);
                }
                Ok(totals)
            }
        }

        deserializer.deserialize_map(PointTotalsVisitor)
    }
}
