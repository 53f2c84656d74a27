//! HTTP client for the OMDb API.

use crate::domain::upstream::{FetchError, UpstreamClient};
use async_trait::async_trait;
use std::time::Duration;

/// Fetches raw response bodies from OMDb over HTTPS.
///
/// The client holds a pooled [`reqwest::Client`] with a request timeout, so
/// a stalled upstream turns into a [`FetchError::Transport`] instead of a
/// hung request. Non-2xx statuses become [`FetchError::Status`].
pub struct OmdbClient {
    client: reqwest::Client,
}

impl OmdbClient {
    /// Creates a client with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns the underlying builder error if the TLS backend cannot be
    /// initialized.
    pub fn new(timeout_seconds: u64) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .user_agent(concat!("omdb-proxy/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl UpstreamClient for OmdbClient {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(to_fetch_error)?
            .error_for_status()
            .map_err(to_fetch_error)?;

        response.text().await.map_err(to_fetch_error)
    }
}

fn to_fetch_error(err: reqwest::Error) -> FetchError {
    match err.status() {
        Some(status) => FetchError::Status(status.as_u16()),
        None => FetchError::Transport(err.to_string()),
    }
}
