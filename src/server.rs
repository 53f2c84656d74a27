//! HTTP server initialization and runtime setup.
//!
//! Handles upstream client construction, cache setup, and Axum server lifecycle.

use crate::application::services::MovieService;
use crate::config::Config;
use crate::domain::entities::{MovieDetail, MovieSummary};
use crate::infrastructure::cache::{CacheStore, MemoryCache, NullCache};
use crate::infrastructure::omdb::OmdbClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - OMDb HTTP client with request timeout
/// - In-memory caches (or NullCache when caching is disabled)
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be constructed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let upstream = OmdbClient::new(config.upstream_timeout_seconds)
        .context("Failed to build OMDb HTTP client")?;

    let (search_cache, detail_cache): (
        Arc<dyn CacheStore<Vec<MovieSummary>>>,
        Arc<dyn CacheStore<MovieDetail>>,
    ) = if config.cache_enabled {
        tracing::info!("Cache enabled (in-memory)");
        (Arc::new(MemoryCache::new()), Arc::new(MemoryCache::new()))
    } else {
        tracing::info!("Cache disabled (NullCache)");
        (Arc::new(NullCache::new()), Arc::new(NullCache::new()))
    };

    let movie_service = MovieService::new(
        Arc::new(upstream),
        config.api_url.clone(),
        config.api_key.clone(),
        search_cache,
        detail_cache,
    );

    let state = AppState {
        movie_service: Arc::new(movie_service),
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Waits for a shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down");
        },
    }
}
