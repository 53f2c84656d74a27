//! DTOs for movie search and detail endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{MovieDetail, MovieSummary};

/// Query parameters for title search.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Title fragment forwarded verbatim to the upstream query.
    pub title: String,
}

/// Abbreviated movie record as rendered in search responses.
///
/// Field casing follows the public API contract: `imdbID` keeps its
/// upstream spelling, the rest are lowercase.
#[derive(Debug, Serialize)]
pub struct MovieSummaryResponse {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster: String,
}

impl From<MovieSummary> for MovieSummaryResponse {
    fn from(movie: MovieSummary) -> Self {
        Self {
            imdb_id: movie.imdb_id,
            title: movie.title,
            year: movie.year,
            poster: movie.poster,
        }
    }
}

/// Full movie record as rendered in detail responses.
#[derive(Debug, Serialize)]
pub struct MovieDetailResponse {
    pub title: String,
    pub year: String,
    pub plot: String,
    pub director: String,
    pub actors: String,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: String,
    pub poster: String,
}

impl From<MovieDetail> for MovieDetailResponse {
    fn from(detail: MovieDetail) -> Self {
        Self {
            title: detail.title,
            year: detail.year,
            plot: detail.plot,
            director: detail.director,
            actors: detail.actors,
            imdb_rating: detail.imdb_rating,
            poster: detail.poster,
        }
    }
}
