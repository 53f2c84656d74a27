//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::infrastructure::cache::CacheStats;
use crate::state::AppState;

/// Returns service health status with cache usage counters.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// Always **200 OK**. The caches are process-local and cannot degrade,
/// and upstream reachability is not probed here because every probe
/// would spend an upstream API call.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "search_cache": {
///       "status": "ok",
///       "message": "5 entries, 12 hits, 7 misses"
///     },
///     "detail_cache": {
///       "status": "ok",
///       "message": "2 entries, 3 hits, 2 misses"
///     }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let search_check = cache_check(state.movie_service.search_cache_stats().await);
    let detail_check = cache_check(state.movie_service.detail_cache_stats().await);

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            search_cache: search_check,
            detail_cache: detail_check,
        },
    })
}

/// Renders cache counters as a component check.
fn cache_check(stats: CacheStats) -> CheckStatus {
    CheckStatus {
        status: "ok".to_string(),
        message: Some(format!(
            "{} entries, {} hits, {} misses",
            stats.entries, stats.hits, stats.misses
        )),
    }
}
