//! Slash command handlers
//!
//! `/rewards [leaderboard | <@user>]` and `/rewards-help`.

use std::fmt::Write;

use rewards_core::{LeaderboardEntry, PointTable};
use rewards_service::RewardLedger;

use super::error::{HandlerError, HandlerResult};
use crate::protocol::CommandEvent;

const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];

/// What a `/rewards` invocation asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewardsQuery {
    /// Caller's own points
    Own,
    /// Points for a mentioned user
    User(String),
    /// Top users
    Leaderboard,
}

impl RewardsQuery {
    /// Parse the text after `/rewards`.
    ///
    /// Mentions arrive as `<@U123>` or `<@U123|name>`; anything that is not
    /// `leaderboard` or a mention asks for the caller's own points.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();

        if text.eq_ignore_ascii_case("leaderboard") {
            return Self::Leaderboard;
        }

        if let Some(mention) = text.strip_prefix("<@").and_then(|t| t.strip_suffix('>')) {
            let user_id = mention.split('|').next().unwrap_or_default();
            return Self::User(user_id.to_string());
        }

        Self::Own
    }
}

/// Handles `/rewards` and `/rewards-help`
pub struct CommandHandler;

impl CommandHandler {
    /// Produce the reply text for a command
    pub fn handle(
        ledger: &RewardLedger,
        leaderboard_limit: usize,
        event: &CommandEvent,
    ) -> HandlerResult<String> {
        match event.command.as_str() {
            "/rewards" => Ok(Self::rewards(ledger, leaderboard_limit, event)),
            "/rewards-help" => Ok(render_help(ledger.point_table(), leaderboard_limit)),
            other => Err(HandlerError::UnknownCommand(other.to_string())),
        }
    }

    fn rewards(ledger: &RewardLedger, leaderboard_limit: usize, event: &CommandEvent) -> String {
        match RewardsQuery::parse(&event.text) {
            RewardsQuery::Own => {
                let points = ledger.user_points(&event.user_id);
                format!("You have *{points}* points")
            }
            RewardsQuery::User(user_id) => {
                let points = ledger.user_points(&user_id);
                format!("<@{user_id}> has *{points}* points")
            }
            RewardsQuery::Leaderboard => render_leaderboard(&ledger.leaderboard(leaderboard_limit)),
        }
    }
}

/// Render leaderboard rows with medals for the top three
pub fn render_leaderboard(entries: &[LeaderboardEntry]) -> String {
    if entries.is_empty() {
        return "No rewards have been earned yet!".to_string();
    }

    let mut out = String::from("*🏆 Rewards Leaderboard 🏆*\n");
    for (idx, entry) in entries.iter().enumerate() {
        let rank = idx + 1;
        let medal = MEDALS
            .get(idx)
            .map_or_else(|| format!("{rank}."), |m| (*m).to_string());
        let _ = write!(out, "\n{medal} <@{}>: *{}* points", entry.user_id, entry.points);
    }
    out
}

/// Render the emoji value table and command summary
pub fn render_help(table: &PointTable, leaderboard_limit: usize) -> String {
    let mut lines = vec![
        "*Emoji Rewards System* 🎁\n".to_string(),
        "Earn points when people react to your messages with emojis!\n".to_string(),
        "*Emoji Point Values:*".to_string(),
    ];

    for (emoji, points) in table.entries() {
        lines.push(format!(":{emoji}: = {points} {}", plural_points(points)));
    }

    let default = table.default_points();
    lines.push(format!("\nAll other emojis = {default} {}", plural_points(default)));
    lines.push("\n*Commands:*".to_string());
    lines.push("`/rewards` - Show your points".to_string());
    lines.push("`/rewards @user` - Show points for a user".to_string());
    lines.push(format!(
        "`/rewards leaderboard` - Show top {leaderboard_limit} users"
    ));

    lines.join("\n")
}

fn plural_points(points: u32) -> &'static str {
    if points == 1 {
        "point"
    } else {
        "points"
    }
}
