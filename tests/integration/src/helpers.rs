//! Test helpers for integration tests
//!
//! Runs the bot's event loop over in-memory pipes against a storage file in
//! a temporary directory.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use rewards_bot::{create_dispatcher, protocol::Reply, serve};
use rewards_common::{AppConfig, AppError, RewardsConfig};
use serde_json::Value;
use tempfile::TempDir;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, DuplexStream, Lines};
use tokio::task::JoinHandle;

const PIPE_CAPACITY: usize = 64 * 1024;
const REPLY_TIMEOUT: Duration = Duration::from_secs(5);

/// Config pointing at `storage_file` with the built-in emoji table
pub fn test_config(storage_file: PathBuf) -> Result<AppConfig> {
    let mut config = AppConfig::from_lookup(|_| None)?;
    config.rewards = RewardsConfig {
        storage_file,
        ..RewardsConfig::default()
    };
    Ok(config)
}

/// Scratch directory holding the bot's storage file
pub struct TestStorage {
    dir: TempDir,
}

impl TestStorage {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: TempDir::new()?,
        })
    }

    /// Path of the persisted point totals
    pub fn file(&self) -> PathBuf {
        self.dir.path().join("rewards_data.json")
    }

    /// Parsed contents of the storage file
    pub fn contents(&self) -> Result<Value> {
        Ok(serde_json::from_str(&std::fs::read_to_string(self.file())?)?)
    }
}

/// Running bot instance fed through an in-memory pipe
pub struct TestBot {
    input: DuplexStream,
    replies: Lines<BufReader<DuplexStream>>,
    handle: JoinHandle<Result<(), AppError>>,
}

impl TestBot {
    /// Start a bot over `storage`
    pub fn start(storage: &TestStorage) -> Result<Self> {
        Self::start_with_config(&test_config(storage.file())?)
    }

    /// Start a bot with custom config
    pub fn start_with_config(config: &AppConfig) -> Result<Self> {
        let dispatcher = Arc::new(create_dispatcher(config));

        let (input, bot_input) = tokio::io::duplex(PIPE_CAPACITY);
        let (bot_output, output) = tokio::io::duplex(PIPE_CAPACITY);

        let handle = tokio::spawn(serve(dispatcher, BufReader::new(bot_input), bot_output));

        Ok(Self {
            input,
            replies: BufReader::new(output).lines(),
            handle,
        })
    }

    /// Send one event
    pub async fn send(&mut self, event: &Value) -> Result<()> {
        self.send_raw(&event.to_string()).await
    }

    /// Send one raw line
    pub async fn send_raw(&mut self, line: &str) -> Result<()> {
        self.input.write_all(line.as_bytes()).await?;
        self.input.write_all(b"\n").await?;
        self.input.flush().await?;
        Ok(())
    }

    /// Send bytes exactly as given, newline included
    pub async fn send_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.input.write_all(bytes).await?;
        self.input.flush().await?;
        Ok(())
    }

    /// Wait for the next reply
    pub async fn recv(&mut self) -> Result<Reply> {
        let line = tokio::time::timeout(REPLY_TIMEOUT, self.replies.next_line())
            .await
            .map_err(|_| anyhow!("timed out waiting for reply"))??
            .ok_or_else(|| anyhow!("bot closed its output"))?;
        Ok(serde_json::from_str(&line)?)
    }

    /// Send an event and wait for its reply
    pub async fn ask(&mut self, event: &Value) -> Result<Reply> {
        self.send(event).await?;
        self.recv().await
    }

    /// Close the input and wait for the loop to finish
    pub async fn shutdown(self) -> Result<()> {
        drop(self.input);
        self.handle.await??;
        Ok(())
    }
}
