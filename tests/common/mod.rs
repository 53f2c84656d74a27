#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use omdb_proxy::application::services::MovieService;
use omdb_proxy::domain::upstream::{FetchError, UpstreamClient};
use omdb_proxy::infrastructure::cache::{MemoryCache, NullCache};
use omdb_proxy::state::AppState;

/// Canned OMDb search response with two results.
pub const SEARCH_BODY: &str = r#"{
    "Search": [
        {"Title": "Batman Begins", "Year": "2005", "imdbID": "tt0372784", "Type": "movie", "Poster": "https://m.media-amazon.com/images/M/begins.jpg"},
        {"Title": "Batman Returns", "Year": "1992", "imdbID": "tt0103776", "Type": "movie", "Poster": "https://m.media-amazon.com/images/M/returns.jpg"}
    ],
    "totalResults": "2",
    "Response": "True"
}"#;

/// Canned OMDb detail response with extra fields the proxy ignores.
pub const DETAIL_BODY: &str = r#"{
    "Title": "Batman Begins",
    "Year": "2005",
    "Rated": "PG-13",
    "Released": "15 Jun 2005",
    "Runtime": "140 min",
    "Director": "Christopher Nolan",
    "Actors": "Christian Bale, Michael Caine, Ken Watanabe",
    "Plot": "After witnessing his parents' death, Bruce learns the art of fighting to confront injustice.",
    "Poster": "https://m.media-amazon.com/images/M/begins.jpg",
    "imdbRating": "8.2",
    "imdbID": "tt0372784",
    "Response": "True"
}"#;

/// Canned OMDb failure response.
pub const NOT_FOUND_BODY: &str = r#"{"Response":"False","Error":"Movie not found!"}"#;

/// Scripted upstream standing in for the OMDb API.
///
/// Routes are matched by substring against the full request URL, first
/// match wins. Unmatched URLs answer HTTP 404. Every fetch bumps a shared
/// counter so tests can assert how often the cache let a request through.
pub struct StubUpstream {
    routes: Vec<(String, Result<String, FetchError>)>,
    calls: Arc<AtomicUsize>,
}

impl StubUpstream {
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Registers a response body for URLs containing `needle`.
    pub fn with_response(mut self, needle: &str, body: &str) -> Self {
        self.routes.push((needle.to_string(), Ok(body.to_string())));
        self
    }

    /// Registers a fetch failure for URLs containing `needle`.
    pub fn with_error(mut self, needle: &str, error: FetchError) -> Self {
        self.routes.push((needle.to_string(), Err(error)));
        self
    }

    /// Shared counter of fetches that reached this stub.
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

#[async_trait]
impl UpstreamClient for StubUpstream {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        for (needle, result) in &self.routes {
            if url.contains(needle.as_str()) {
                return result.clone();
            }
        }

        Err(FetchError::Status(404))
    }
}

/// Builds application state around the stub with live in-memory caches.
pub fn create_test_state(upstream: StubUpstream) -> AppState {
    let service = MovieService::new(
        Arc::new(upstream),
        "https://omdb.test/".to_string(),
        "test-key".to_string(),
        Arc::new(MemoryCache::new()),
        Arc::new(MemoryCache::new()),
    );

    AppState {
        movie_service: Arc::new(service),
    }
}

/// Builds application state with caching disabled.
pub fn create_uncached_state(upstream: StubUpstream) -> AppState {
    let service = MovieService::new(
        Arc::new(upstream),
        "https://omdb.test/".to_string(),
        "test-key".to_string(),
        Arc::new(NullCache::new()),
        Arc::new(NullCache::new()),
    );

    AppState {
        movie_service: Arc::new(service),
    }
}
