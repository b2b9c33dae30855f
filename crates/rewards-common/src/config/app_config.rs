//! Application configuration structs
//!
//! Loads configuration from environment variables and an optional emoji
//! points file.

use rewards_core::PointTable;
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub rewards: RewardsConfig,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Reward ledger configuration
#[derive(Debug, Clone)]
pub struct RewardsConfig {
    /// JSON file holding the persisted point totals
    pub storage_file: PathBuf,
    /// Points for any emoji missing from `emoji_points`
    pub default_points: u32,
    /// Points per emoji name (no surrounding colons)
    pub emoji_points: HashMap<String, u32>,
    /// Number of rows shown by the leaderboard command
    pub leaderboard_limit: usize,
}

impl Default for RewardsConfig {
    fn default() -> Self {
        Self {
            storage_file: PathBuf::from(default_storage_file()),
            default_points: default_points(),
            emoji_points: default_emoji_points(),
            leaderboard_limit: default_leaderboard_limit(),
        }
    }
}

impl RewardsConfig {
    /// Build the point table the ledger uses
    #[must_use]
    pub fn point_table(&self) -> PointTable {
        PointTable::new(self.emoji_points.clone(), self.default_points)
    }

    /// Merge an emoji points file over the current table.
    ///
    /// The file format is picked from the extension (TOML, JSON, YAML, ...).
    /// Emoji names are given as values, not keys, because the `config` crate
    /// lowercases keys and emoji matching is case-sensitive:
    ///
    /// ```toml
    /// default_points = 1
    ///
    /// [[emoji]]
    /// name = "fire"
    /// points = 3
    ///
    /// [[emoji]]
    /// name = "PartyParrot"
    /// points = 4
    /// ```
    pub fn merge_points_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let file: EmojiPointsFile = ::config::Config::builder()
            .add_source(::config::File::from(path))
            .build()
            .and_then(|settings| settings.try_deserialize())
            .map_err(|e| ConfigError::File(path.display().to_string(), e.to_string()))?;

        if let Some(points) = file.default_points {
            self.default_points = points;
        }
        self.emoji_points.extend(
            file.emoji
                .into_iter()
                .map(|entry| (entry.name, entry.points)),
        );
        Ok(())
    }
}

/// On-disk shape of the emoji points file
#[derive(Debug, Deserialize)]
struct EmojiPointsFile {
    #[serde(default)]
    default_points: Option<u32>,
    #[serde(default)]
    emoji: Vec<EmojiPointsEntry>,
}

#[derive(Debug, Deserialize)]
struct EmojiPointsEntry {
    name: String,
    points: u32,
}

// Default value functions
fn default_app_name() -> String {
    "emoji-rewards".to_string()
}

fn default_storage_file() -> String {
    "rewards_data.json".to_string()
}

fn default_points() -> u32 {
    1
}

fn default_leaderboard_limit() -> usize {
    10
}

fn default_emoji_points() -> HashMap<String, u32> {
    [
        ("+1", 1),
        ("thumbsup", 1),
        ("heart", 2),
        ("fire", 3),
        ("100", 5),
        ("trophy", 10),
        ("star", 2),
        ("clap", 1),
        ("raised_hands", 2),
        ("tada", 5),
    ]
    .into_iter()
    .map(|(emoji, points)| (emoji.to_string(), points))
    .collect()
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a variable holds an invalid value or the emoji
    /// points file cannot be read
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app = AppSettings {
            name: lookup("APP_NAME").unwrap_or_else(default_app_name),
            env: match lookup("APP_ENV") {
                Some(s) => Environment::parse(&s).ok_or(ConfigError::InvalidValue("APP_ENV", s))?,
                None => Environment::default(),
            },
        };

        let mut rewards = RewardsConfig::default();

        if let Some(path) = lookup("REWARDS_EMOJI_POINTS_FILE") {
            rewards.merge_points_file(Path::new(&path))?;
        }
        if let Some(path) = lookup("REWARDS_STORAGE_FILE") {
            rewards.storage_file = PathBuf::from(path);
        }
        if let Some(points) = parse_var(&lookup, "REWARDS_DEFAULT_POINTS")? {
            rewards.default_points = points;
        }
        if let Some(limit) = parse_var(&lookup, "REWARDS_LEADERBOARD_LIMIT")? {
            rewards.leaderboard_limit = limit;
        }

        Ok(Self { app, rewards })
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key)
        .map(|s| s.trim().parse().map_err(|_| ConfigError::InvalidValue(key, s)))
        .transpose()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),

    #[error("Failed to load emoji points file {0}: {1}")]
    File(String, String),
}
