//! API route configuration.

use crate::api::handlers::{movie_details_handler, search_movies_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Movie lookup routes, nested under `/api/movies`.
///
/// # Endpoints
///
/// - `GET /search`    - Search movies by title (`?title=` query parameter)
/// - `GET /{imdbId}`  - Full details for one movie
///
/// The router prefers the literal `/search` segment over the `{imdbId}`
/// capture, so `search` is never read as an IMDb id.
pub fn movie_routes() -> Router<AppState> {
    Router::new()
        .route("/search", get(search_movies_handler))
        .route("/{imdbId}", get(movie_details_handler))
}
