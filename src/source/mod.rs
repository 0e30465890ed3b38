//! The status endpoint seam.
//!
//! The poll loop talks to the endpoint only through [`StatusSource`], so
//! tests can script responses without a network.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub mod practicum;
pub use practicum::PracticumSource;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure: DNS, connection refused, timeout.
    #[error("status endpoint unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),
    /// The endpoint answered, but not with 200.
    #[error("status endpoint returned HTTP {0}")]
    BadStatus(u16),
    /// A 200 answer whose body is not JSON.
    #[error("status endpoint returned an undecodable body: {0}")]
    BadBody(#[source] reqwest::Error),
}

#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Query for homework updates since `cursor` (unix seconds).
    async fn fetch(&self, cursor: i64) -> Result<Value, FetchError>;
}
