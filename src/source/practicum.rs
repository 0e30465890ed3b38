//! Practicum homework-statuses API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, StatusCode};
use serde_json::Value;

use super::{FetchError, StatusSource};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct PracticumSource {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl PracticumSource {
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            token: token.into(),
        })
    }
}

#[async_trait]
impl StatusSource for PracticumSource {
    async fn fetch(&self, cursor: i64) -> Result<Value, FetchError> {
        let resp = self
            .client
            .get(&self.endpoint)
            .header(header::AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", cursor)])
            .send()
            .await
            .map_err(FetchError::Unreachable)?;

        if resp.status() != StatusCode::OK {
            return Err(FetchError::BadStatus(resp.status().as_u16()));
        }

        resp.json::<Value>().await.map_err(FetchError::BadBody)
    }
}
