//! Environment-backed configuration.
//!
//! All three secrets come from the process environment (optionally seeded
//! from a `.env` file in main). A missing or malformed required variable is
//! fatal before the poll loop ever starts.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";

const DEFAULT_POLL_SECS: u64 = 600;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    MissingVar(&'static str),
    #[error("environment variable {var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    /// OAuth token for the status endpoint.
    pub source_token: String,
    /// Telegram bot token.
    pub bot_token: String,
    /// Destination chat for notifications.
    pub chat_id: i64,
    pub endpoint: String,
    pub poll_interval: Duration,
    /// Optional append-only mirror of the log stream.
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let require = |var: &'static str| {
            get(var)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::MissingVar(var))
        };

        let source_token = require("YA_TOKEN")?;
        let bot_token = require("TG_TOKEN")?;
        let chat_id = require("CHAT_ID")?
            .parse::<i64>()
            .map_err(|e| ConfigError::Invalid {
                var: "CHAT_ID",
                reason: e.to_string(),
            })?;

        let endpoint = get("HWWATCH_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let poll_secs = match get("HWWATCH_POLL_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|e| ConfigError::Invalid {
                var: "HWWATCH_POLL_SECS",
                reason: e.to_string(),
            })?,
            None => DEFAULT_POLL_SECS,
        };
        if poll_secs == 0 {
            return Err(ConfigError::Invalid {
                var: "HWWATCH_POLL_SECS",
                reason: "interval must be at least 1 second".into(),
            });
        }

        Ok(Self {
            source_token,
            bot_token,
            chat_id,
            endpoint,
            poll_interval: Duration::from_secs(poll_secs),
            log_file: get("HWWATCH_LOG_FILE").map(PathBuf::from),
        })
    }
}
