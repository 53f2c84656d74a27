//! Movie value objects produced from upstream responses.

use serde_json::{Map, Value};

use crate::domain::payload::UpstreamPayload;

/// Reads a string field from an upstream record, defaulting to empty.
///
/// OMDb models every field as a string; anything missing or non-string
/// projects to `""` so the value objects stay non-optional.
fn text(record: &Map<String, Value>, key: &str) -> String {
    record
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Abbreviated movie record returned by title search.
///
/// Immutable value object with no identity beyond field equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieSummary {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster: String,
}

impl MovieSummary {
    /// Projects one element of the upstream `Search` array.
    ///
    /// Field mapping: `imdbID`, `Title`, `Year`, `Poster`. Unknown fields
    /// in the record are ignored.
    pub fn from_record(record: &Map<String, Value>) -> Self {
        Self {
            imdb_id: text(record, "imdbID"),
            title: text(record, "Title"),
            year: text(record, "Year"),
            poster: text(record, "Poster"),
        }
    }
}

/// Full movie record returned by id lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieDetail {
    pub title: String,
    pub year: String,
    pub plot: String,
    pub director: String,
    pub actors: String,
    pub imdb_rating: String,
    pub poster: String,
}

impl MovieDetail {
    /// Projects the flat detail fields of a successful upstream payload.
    ///
    /// Values are taken verbatim, no transformation or normalization.
    pub fn from_payload(payload: &UpstreamPayload) -> Self {
        Self {
            title: payload.str_field("Title"),
            year: payload.str_field("Year"),
            plot: payload.str_field("Plot"),
            director: payload.str_field("Director"),
            actors: payload.str_field("Actors"),
            imdb_rating: payload.str_field("imdbRating"),
            poster: payload.str_field("Poster"),
        }
    }
}
