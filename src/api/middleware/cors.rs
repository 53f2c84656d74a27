//! Cross-origin resource sharing middleware.

use tower_http::cors::{Any, CorsLayer};

/// Creates a permissive CORS layer for browser clients.
///
/// The API is a read-only public proxy, so any origin may call it. No
/// credentials are involved, which is what makes the wildcard safe.
///
/// # Integration
///
/// ```rust,ignore
/// let app = Router::new()
///     .nest("/api/movies", movie_routes())
///     .layer(cors::layer());
/// ```
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
