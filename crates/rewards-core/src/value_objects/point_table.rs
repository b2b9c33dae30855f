//! Point table - emoji name to point value lookup

use std::collections::HashMap;

/// Immutable mapping from emoji name to the points it is worth.
///
/// Emoji names are stored without surrounding colons (`fire`, not `:fire:`).
/// Lookups are exact and case-sensitive: `thumbsup::skin-tone-2` is a
/// different emoji from `thumbsup` and falls back to the default value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointTable {
    emoji_points: HashMap<String, u32>,
    default_points: u32,
}

impl PointTable {
    /// Create a table from an emoji mapping and the fallback value
    pub fn new(emoji_points: HashMap<String, u32>, default_points: u32) -> Self {
        Self {
            emoji_points,
            default_points,
        }
    }

    /// Points awarded for `emoji`, or the default value when it is unmapped
    #[inline]
    pub fn points_for(&self, emoji: &str) -> u32 {
        self.emoji_points
            .get(emoji)
            .copied()
            .unwrap_or(self.default_points)
    }

    /// Value used for any emoji not present in the table
    #[inline]
    pub fn default_points(&self) -> u32 {
        self.default_points
    }

    /// Mapped emoji sorted by points descending, then by name
    pub fn entries(&self) -> Vec<(&str, u32)> {
        let mut entries: Vec<_> = self
            .emoji_points
            .iter()
            .map(|(emoji, points)| (emoji.as_str(), *points))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}
