//! Handlers for movie search and detail endpoints.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use serde_json::json;

use crate::api::dto::movies::{MovieDetailResponse, MovieSummaryResponse, SearchParams};
use crate::error::AppError;
use crate::state::AppState;

/// Searches movies by title.
///
/// # Endpoint
///
/// `GET /api/movies/search?title=batman`
///
/// # Response
///
/// Always a JSON array, in upstream order:
///
/// ```json
/// [
///   {
///     "imdbID": "tt0372784",
///     "title": "Batman Begins",
///     "year": "2005",
///     "poster": "https://..."
///   }
/// ]
/// ```
///
/// An unknown title, an unreachable upstream, or an upstream error all
/// produce `[]` with status 200. Clients only ever branch on emptiness.
///
/// # Errors
///
/// Returns 400 Bad Request if the `title` query parameter is missing.
pub async fn search_movies_handler(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<MovieSummaryResponse>>, AppError> {
    let Query(params) = params.map_err(|rejection| {
        AppError::bad_request(
            "Missing or invalid title parameter",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    let movies = state
        .movie_service
        .search_movies(&params.title)
        .await
        .into_iter()
        .map(MovieSummaryResponse::from)
        .collect();

    Ok(Json(movies))
}

/// Returns full details for one movie.
///
/// # Endpoint
///
/// `GET /api/movies/{imdbId}`
///
/// # Response
///
/// The detail object on success, or a literal JSON `null` body with
/// status 200 when the id is unknown or the upstream lookup failed.
pub async fn movie_details_handler(
    Path(imdb_id): Path<String>,
    State(state): State<AppState>,
) -> Json<Option<MovieDetailResponse>> {
    let detail = state
        .movie_service
        .movie_details(&imdb_id)
        .await
        .map(MovieDetailResponse::from);

    Json(detail)
}
