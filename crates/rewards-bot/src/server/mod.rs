//! Event loop setup
//!
//! Reads newline-delimited JSON events and writes one JSON reply per line.

use std::sync::Arc;

use rewards_common::{AppConfig, AppError, AppResult};
use rewards_service::RewardLedger;
use rewards_store::JsonFileStore;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::handlers::EventDispatcher;

/// Initialize the store and ledger and create the dispatcher
pub fn create_dispatcher(config: &AppConfig) -> EventDispatcher {
    let rewards = &config.rewards;

    tracing::info!(path = %rewards.storage_file.display(), "Opening point store");
    let store = Arc::new(JsonFileStore::new(&rewards.storage_file));
    let ledger = Arc::new(RewardLedger::open(rewards.point_table(), store));

    EventDispatcher::new(ledger, rewards.leaderboard_limit)
}

/// Serve events from `reader` until end of input.
///
/// Events are handled one at a time in arrival order. Handling runs on the
/// blocking pool since every change is written to disk. Lines that are not
/// UTF-8 are dropped; only a failing stream ends the loop early.
pub async fn serve<R, W>(
    dispatcher: Arc<EventDispatcher>,
    mut reader: R,
    mut writer: W,
) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();
    let mut handled = 0usize;
    let mut dropped = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }

        let line = match String::from_utf8(std::mem::take(&mut buf)) {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!(error = %e, "Dropping event that is not valid UTF-8");
                dropped += 1;
                continue;
            }
        };

        let worker = Arc::clone(&dispatcher);
        let reply = tokio::task::spawn_blocking(move || worker.handle_line(&line))
            .await
            .map_err(AppError::internal)?;
        handled += 1;

        if let Some(reply) = reply {
            let mut out = serde_json::to_string(&reply).map_err(AppError::internal)?;
            out.push('\n');
            writer.write_all(out.as_bytes()).await?;
            writer.flush().await?;
        }
    }

    tracing::info!(events = handled, dropped, "Event stream closed");
    Ok(())
}

/// Run the bot over stdin/stdout with configuration
pub async fn run(config: AppConfig) -> AppResult<()> {
    let dispatcher = Arc::new(create_dispatcher(&config));

    tracing::info!(app = %config.app.name, "Listening for events on stdin");
    serve(dispatcher, BufReader::new(io::stdin()), io::stdout()).await
}
