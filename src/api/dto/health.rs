//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response.
///
/// The service has no failable components, so `status` is always
/// `"healthy"`; the value of this endpoint is the per-cache counters
/// carried in `checks`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

/// One check per cache region.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub search_cache: CheckStatus,
    pub detail_cache: CheckStatus,
}

/// Status of a single component, with an optional human-readable note.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
