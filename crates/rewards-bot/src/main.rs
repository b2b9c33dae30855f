//! Rewards bot entry point
//!
//! Run with:
//! ```bash
//! cargo run -p rewards-bot < events.ndjson
//! ```
//!
//! Configuration is loaded from environment variables. Logs go to stderr;
//! stdout carries only reply lines.

use rewards_common::{try_init_tracing_with_config, AppConfig, AppError, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration first so the log format can follow APP_ENV
    let config = match AppConfig::from_env().map_err(AppError::from) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration [{}]: {e}", e.error_code());
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        env = ?config.app.env,
        storage_file = %config.rewards.storage_file.display(),
        emoji = config.rewards.emoji_points.len(),
        "Configuration loaded"
    );

    if let Err(e) = rewards_bot::run(config).await {
        error!(error = %e, code = e.error_code(), "Rewards bot stopped");
        std::process::exit(1);
    }
}
