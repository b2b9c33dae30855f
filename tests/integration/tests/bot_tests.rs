//! Bot Integration Tests
//!
//! Drives the JSON-lines event loop end to end against a storage file in a
//! temporary directory. No external services are needed.
//!
//! Run with: cargo test -p integration-tests --test bot_tests

use integration_tests::{
    help_command, mention, reaction_added, reaction_removed, rewards_command, test_config,
    unique_user, TestBot, TestStorage,
};
use rewards_bot::handlers::COMMAND_APOLOGY;
use serde_json::json;

// ============================================================================
// Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_reactions_award_and_revoke_points() {
    let storage = TestStorage::new().unwrap();
    let mut bot = TestBot::start(&storage).unwrap();
    let (author, reactor) = (unique_user(), unique_user());

    bot.send(&reaction_added(&reactor, "fire", &author)).await.unwrap();
    bot.send(&reaction_added(&reactor, "unknown_emoji", &author)).await.unwrap();
    bot.send(&reaction_removed(&reactor, "fire", &author)).await.unwrap();

    let reply = bot.ask(&rewards_command(&author, "")).await.unwrap();
    assert_eq!(reply.text, "You have *1* points");
    assert_eq!(reply.channel.as_deref(), Some("C_GENERAL"));

    bot.shutdown().await.unwrap();
    assert_eq!(storage.contents().unwrap(), json!({ author: 1 }));
}

#[tokio::test]
async fn test_removal_never_goes_negative() {
    let storage = TestStorage::new().unwrap();
    let mut bot = TestBot::start(&storage).unwrap();
    let (author, reactor) = (unique_user(), unique_user());

    bot.send(&reaction_removed(&reactor, "trophy", &author)).await.unwrap();
    let reply = bot
        .ask(&rewards_command(&reactor, &format!("<@{author}>")))
        .await
        .unwrap();
    assert_eq!(reply.text, format!("<@{author}> has *0* points"));

    bot.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_self_reactions_do_not_count() {
    let storage = TestStorage::new().unwrap();
    let mut bot = TestBot::start(&storage).unwrap();
    let author = unique_user();

    bot.send(&reaction_added(&author, "trophy", &author)).await.unwrap();
    let reply = bot.ask(&rewards_command(&author, "")).await.unwrap();
    assert_eq!(reply.text, "You have *0* points");

    bot.shutdown().await.unwrap();
    assert!(!storage.file().exists());
}

#[tokio::test]
async fn test_self_reaction_removal_does_not_deduct() {
    let storage = TestStorage::new().unwrap();
    let mut bot = TestBot::start(&storage).unwrap();
    let (author, reactor) = (unique_user(), unique_user());

    bot.send(&reaction_added(&reactor, "trophy", &author)).await.unwrap();
    bot.send(&reaction_removed(&author, "trophy", &author)).await.unwrap();

    let reply = bot.ask(&rewards_command(&author, "")).await.unwrap();
    assert_eq!(reply.text, "You have *10* points");

    bot.shutdown().await.unwrap();
    assert_eq!(storage.contents().unwrap(), json!({ author: 10 }));
}

// ============================================================================
// Command Tests
// ============================================================================

#[tokio::test]
async fn test_leaderboard_command() {
    let storage = TestStorage::new().unwrap();
    let mut bot = TestBot::start(&storage).unwrap();
    let reactor = unique_user();
    let users: Vec<String> = (0..4).map(|_| unique_user()).collect();

    let empty = bot.ask(&rewards_command(&reactor, "leaderboard")).await.unwrap();
    assert_eq!(empty.text, "No rewards have been earned yet!");

    for (user, emoji) in users.iter().zip(["heart", "trophy", "fire", "clap"]) {
        bot.send(&reaction_added(&reactor, emoji, user)).await.unwrap();
    }

    let board = bot.ask(&rewards_command(&reactor, "LEADERBOARD")).await.unwrap();
    let expected = format!(
        "*🏆 Rewards Leaderboard 🏆*\n\n\
         🥇 <@{}>: *10* points\n\
         🥈 <@{}>: *3* points\n\
         🥉 <@{}>: *2* points\n\
         4. <@{}>: *1* points",
        users[1], users[2], users[0], users[3]
    );
    assert_eq!(board.text, expected);

    bot.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_leaderboard_respects_configured_limit() {
    let storage = TestStorage::new().unwrap();
    let mut config = test_config(storage.file()).unwrap();
    config.rewards.leaderboard_limit = 2;
    let mut bot = TestBot::start_with_config(&config).unwrap();
    let reactor = unique_user();

    for _ in 0..3 {
        bot.send(&reaction_added(&reactor, "fire", &unique_user()))
            .await
            .unwrap();
    }

    let board = bot.ask(&rewards_command(&reactor, "leaderboard")).await.unwrap();
    assert_eq!(board.text.lines().filter(|l| l.contains("points")).count(), 2);

    let help = bot.ask(&help_command(&reactor)).await.unwrap();
    assert!(help.text.contains("Show top 2 users"));

    bot.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_help_lists_emoji_values() {
    let storage = TestStorage::new().unwrap();
    let mut bot = TestBot::start(&storage).unwrap();

    let help = bot.ask(&help_command(&unique_user())).await.unwrap();
    assert!(help.text.contains(":trophy: = 10 points"));
    assert!(help.text.contains(":+1: = 1 point"));
    assert!(help.text.contains("All other emojis = 1 point"));

    // Highest value first
    let trophy = help.text.find(":trophy:").unwrap();
    let heart = help.text.find(":heart:").unwrap();
    assert!(trophy < heart);

    bot.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_mention_and_bad_input() {
    let storage = TestStorage::new().unwrap();
    let mut bot = TestBot::start(&storage).unwrap();
    let user = unique_user();

    bot.send_raw("{ not json").await.unwrap();
    bot.send_bytes(b"\xff\xfe\n").await.unwrap();
    bot.send(&json!({ "type": "channel_created", "channel": "C2" }))
        .await
        .unwrap();

    let hint = bot.ask(&mention(&user, "C_RANDOM")).await.unwrap();
    assert_eq!(hint.channel.as_deref(), Some("C_RANDOM"));
    assert!(hint.text.starts_with("Hi! Use `/rewards`"));

    let unknown = json!({ "type": "command", "command": "/points", "user_id": user });
    let apology = bot.ask(&unknown).await.unwrap();
    assert_eq!(apology.text, COMMAND_APOLOGY);

    bot.shutdown().await.unwrap();
}

// ============================================================================
// Persistence Tests
// ============================================================================

#[tokio::test]
async fn test_restart_restores_totals() {
    let storage = TestStorage::new().unwrap();
    let (alice, bob, reactor) = (unique_user(), unique_user(), unique_user());

    let mut bot = TestBot::start(&storage).unwrap();
    bot.send(&reaction_added(&reactor, "tada", &alice)).await.unwrap();
    bot.send(&reaction_added(&reactor, "100", &bob)).await.unwrap();
    bot.send(&reaction_added(&reactor, "star", &bob)).await.unwrap();
    bot.shutdown().await.unwrap();

    let mut bot = TestBot::start(&storage).unwrap();
    let reply = bot.ask(&rewards_command(&bob, "")).await.unwrap();
    assert_eq!(reply.text, "You have *7* points");
    let reply = bot.ask(&rewards_command(&alice, "")).await.unwrap();
    assert_eq!(reply.text, "You have *5* points");
    bot.shutdown().await.unwrap();

    // First-seen order survives the round trip
    let contents = std::fs::read_to_string(storage.file()).unwrap();
    assert!(contents.find(&alice).unwrap() < contents.find(&bob).unwrap());
}

#[tokio::test]
async fn test_corrupt_storage_starts_empty() {
    let storage = TestStorage::new().unwrap();
    std::fs::write(storage.file(), "[1, 2, 3]").unwrap();
    let (author, reactor) = (unique_user(), unique_user());

    let mut bot = TestBot::start(&storage).unwrap();
    let reply = bot.ask(&rewards_command(&author, "")).await.unwrap();
    assert_eq!(reply.text, "You have *0* points");

    bot.send(&reaction_added(&reactor, "heart", &author)).await.unwrap();
    bot.shutdown().await.unwrap();

    assert_eq!(storage.contents().unwrap(), json!({ author: 2 }));
}
