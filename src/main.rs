//! hwwatch — homework review watcher daemon.
//!
//! Polls the Practicum homework-statuses API on a fixed interval and pushes
//! a verdict message to a Telegram chat whenever the tracked homework's
//! review status changes. Everything past startup is recoverable: transport,
//! validation, format and delivery failures are logged and retried on the
//! next cycle.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::info;

mod channels;
mod config;
mod poller;
mod protocol;
mod source;
mod verdict;

use channels::TelegramChannel;
use config::Config;
use poller::Poller;
use source::PracticumSource;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env().context("startup configuration is incomplete")?;
    init_tracing(config.log_file.as_deref())?;

    info!("hwwatch v{}", env!("CARGO_PKG_VERSION"));
    info!(
        endpoint = %config.endpoint,
        interval_secs = config.poll_interval.as_secs(),
        "watching for review status updates"
    );

    let source = PracticumSource::new(&config.endpoint, &config.source_token)
        .context("failed to build the status API client")?;
    let channel = TelegramChannel::new(&config.bot_token, config.chat_id);

    Poller::new(source, channel, Utc::now().timestamp(), config.poll_interval)
        .run()
        .await;

    Ok(())
}

fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "hwwatch=info".into());
    let stdout = fmt::layer().with_target(false);

    // Optional append-only mirror of the log stream, observational only.
    let file = match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            Some(fmt::layer().with_target(false).with_ansi(false).with_writer(Arc::new(file)))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout)
        .with(file)
        .init();

    Ok(())
}
