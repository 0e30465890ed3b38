//! Outbound notification channels.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{error, info};

pub mod telegram;
pub use telegram::TelegramChannel;

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("telegram send failed: {0}")]
    Telegram(#[from] teloxide::RequestError),
}

#[async_trait]
pub trait Channel: Send + Sync {
    async fn send(&self, text: &str) -> Result<(), DeliveryError>;
}

/// Send `message`, falling back to a single diagnostic attempt on failure.
///
/// Never returns an error: a channel outage must not take the poll loop
/// down with it.
pub async fn deliver(channel: &impl Channel, message: &str) {
    match channel.send(message).await {
        Ok(()) => info!("notification delivered"),
        Err(err) => {
            error!("notification failed: {err}");
            let diagnostic = format!("hwwatch: failed to deliver a status update ({err})");
            if let Err(err) = channel.send(&diagnostic).await {
                error!("fallback diagnostic also failed: {err}");
            }
        }
    }
}
