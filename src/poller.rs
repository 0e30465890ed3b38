//! The poll–diff–notify loop.
//!
//! Owns the two pieces of loop state — the `from_date` cursor and the last
//! status we notified about — and classifies every collaborator failure as
//! recoverable. Nothing that happens inside a cycle can stop the loop; the
//! only fatal path in the whole program is startup configuration.

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;
use tokio::time;
use tracing::{debug, info, warn};

use crate::channels::{self, Channel};
use crate::protocol::{self, ValidationError};
use crate::source::{FetchError, StatusSource};
use crate::verdict::{self, FormatError, HomeworkStatus};

/// Everything a cycle can fail with. All variants are recoverable: the loop
/// logs, reports once, and retries on the next tick.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Format(#[from] FormatError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Nothing pending inside the query window.
    Empty,
    /// The first item's status matches the last notified one.
    Unchanged,
    /// A new status was seen and a notification was attempted.
    Notified(HomeworkStatus),
}

pub struct Poller<S, C> {
    source: S,
    channel: C,
    cursor: i64,
    last_notified: Option<HomeworkStatus>,
    last_reported_failure: Option<String>,
    interval: Duration,
}

impl<S: StatusSource, C: Channel> Poller<S, C> {
    pub fn new(source: S, channel: C, start_cursor: i64, interval: Duration) -> Self {
        Self {
            source,
            channel,
            cursor: start_cursor,
            last_notified: None,
            last_reported_failure: None,
            interval,
        }
    }

    /// Run forever. The first cycle fires immediately, then one per interval.
    pub async fn run(mut self) {
        info!(
            cursor = self.cursor,
            interval_secs = self.interval.as_secs(),
            "poller starting"
        );
        let mut ticker = time::interval(self.interval);
        loop {
            ticker.tick().await;
            self.tick().await;
        }
    }

    /// One cycle with the error classification applied.
    async fn tick(&mut self) {
        match self.cycle().await {
            Ok(CycleOutcome::Notified(status)) => {
                info!(?status, "notified new review status");
                self.last_reported_failure = None;
            }
            Ok(_) => {
                self.last_reported_failure = None;
            }
            Err(err) => {
                warn!("cycle failed: {err}");
                self.report_failure(err.to_string()).await;
            }
        }
    }

    async fn cycle(&mut self) -> Result<CycleOutcome, CycleError> {
        let raw = self.source.fetch(self.cursor).await?;
        let items = protocol::homeworks(&raw)?;

        if items.is_empty() {
            debug!("no new statuses inside the query window");
            self.advance_cursor(&raw);
            return Ok(CycleOutcome::Empty);
        }

        // Single-entity tracking: only the newest item matters.
        let change = verdict::parse_status(&items[0])?;

        let outcome = if self.last_notified == Some(change.status) {
            debug!(status = ?change.status, "status unchanged, skipping notification");
            CycleOutcome::Unchanged
        } else {
            // Record the transition before attempting delivery, so a channel
            // outage cannot produce a duplicate on the next cycle.
            self.last_notified = Some(change.status);
            channels::deliver(&self.channel, &change.message).await;
            CycleOutcome::Notified(change.status)
        };

        self.advance_cursor(&raw);
        Ok(outcome)
    }

    /// The cursor moves only forward, and only when the endpoint names the
    /// next window itself.
    fn advance_cursor(&mut self, raw: &Value) {
        if let Some(next) = protocol::checkpoint(raw) {
            if next > self.cursor {
                self.cursor = next;
            }
        }
    }

    /// Push a failure diagnostic to the chat, at most once per distinct
    /// error text, so a long outage reports once instead of every cycle.
    async fn report_failure(&mut self, text: String) {
        if self.last_reported_failure.as_deref() == Some(text.as_str()) {
            return;
        }
        let message = format!("Сбой в работе программы: {text}");
        channels::deliver(&self.channel, &message).await;
        self.last_reported_failure = Some(text);
    }
}
