//! Client trait for fetching raw upstream response bodies.

use async_trait::async_trait;
use thiserror::Error;

/// Failure fetching a response from the upstream API.
///
/// Transport problems and non-success statuses collapse into one failure
/// signal at the service boundary; the variants exist for logging only.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// Connection, TLS, or timeout failure before a response arrived.
    #[error("transport error: {0}")]
    Transport(String),

    /// The upstream answered with a non-success HTTP status.
    #[error("upstream returned HTTP {0}")]
    Status(u16),
}

/// Interface for issuing a single GET against the upstream API.
///
/// One network call per invocation; no retries, no caching at this layer
/// (caching lives in the service above).
///
/// # Implementations
///
/// - [`crate::infrastructure::omdb::OmdbClient`] - reqwest-backed production client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// Fetches the response body for a fully built query URL.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on transport failure or a non-2xx status.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}
