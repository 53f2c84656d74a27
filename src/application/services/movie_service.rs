//! Movie search and detail lookup service.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::{MovieDetail, MovieSummary};
use crate::domain::payload::UpstreamPayload;
use crate::domain::upstream::UpstreamClient;
use crate::infrastructure::cache::{CacheStats, CacheStore};

/// Outcome of a single upstream lookup.
///
/// Separates "the API answered and had nothing" from "the API could not be
/// asked", which the cache layer treats differently: only [`Lookup::Found`]
/// results are worth keeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    /// Upstream answered successfully with data.
    Found(T),
    /// Upstream answered, but reported no match for the query.
    NotFound,
    /// Upstream could not be reached or returned an unusable body.
    Failed,
}

/// Service for searching movies and fetching movie details through OMDb.
///
/// Composes the upstream client with two caches, one per lookup kind.
/// Public lookups never fail: every upstream or decode problem is logged
/// and absorbed into an empty result, so handlers always have something
/// well-formed to return.
///
/// # Cache Strategy
///
/// - Keys are the caller's exact input string, case preserved
/// - Only successful non-empty outcomes are stored
/// - Failures and not-found outcomes are retried on the next request
pub struct MovieService {
    upstream: Arc<dyn UpstreamClient>,
    api_url: String,
    api_key: String,
    search_cache: Arc<dyn CacheStore<Vec<MovieSummary>>>,
    detail_cache: Arc<dyn CacheStore<MovieDetail>>,
}

impl MovieService {
    /// Creates a new movie service.
    pub fn new(
        upstream: Arc<dyn UpstreamClient>,
        api_url: String,
        api_key: String,
        search_cache: Arc<dyn CacheStore<Vec<MovieSummary>>>,
        detail_cache: Arc<dyn CacheStore<MovieDetail>>,
    ) -> Self {
        Self {
            upstream,
            api_url,
            api_key,
            search_cache,
            detail_cache,
        }
    }

    /// Searches movies by title, upstream order preserved.
    ///
    /// Consults the search cache first; on a miss, queries upstream and
    /// stores the result if it is non-empty. Returns an empty list when
    /// upstream reports no match or cannot be reached.
    pub async fn search_movies(&self, title: &str) -> Vec<MovieSummary> {
        if let Some(cached) = self.search_cache.get(title).await {
            return cached;
        }

        match self.search_upstream(title).await {
            Lookup::Found(movies) => {
                if !movies.is_empty() {
                    self.search_cache.insert(title, movies.clone()).await;
                }
                movies
            }
            Lookup::NotFound | Lookup::Failed => Vec::new(),
        }
    }

    /// Fetches full details for an IMDb id.
    ///
    /// Consults the detail cache first; on a miss, queries upstream and
    /// stores a successful result. Returns `None` when the id is unknown
    /// upstream or the lookup failed.
    pub async fn movie_details(&self, imdb_id: &str) -> Option<MovieDetail> {
        if let Some(cached) = self.detail_cache.get(imdb_id).await {
            return Some(cached);
        }

        match self.detail_upstream(imdb_id).await {
            Lookup::Found(detail) => {
                self.detail_cache.insert(imdb_id, detail.clone()).await;
                Some(detail)
            }
            Lookup::NotFound | Lookup::Failed => None,
        }
    }

    /// Runs one uncached search query against upstream.
    pub async fn search_upstream(&self, title: &str) -> Lookup<Vec<MovieSummary>> {
        let url = self.search_url(title);
        let payload = match self.fetch_payload(&url, "search").await {
            Some(payload) => payload,
            None => return Lookup::Failed,
        };

        if !payload.is_success() {
            debug!(
                title = %title,
                reason = payload.error_message().unwrap_or("unknown"),
                "Upstream reported no search results"
            );
            return Lookup::NotFound;
        }

        let movies = payload
            .search_entries()
            .into_iter()
            .map(MovieSummary::from_record)
            .collect();

        Lookup::Found(movies)
    }

    /// Runs one uncached detail query against upstream.
    pub async fn detail_upstream(&self, imdb_id: &str) -> Lookup<MovieDetail> {
        let url = self.detail_url(imdb_id);
        let payload = match self.fetch_payload(&url, "details").await {
            Some(payload) => payload,
            None => return Lookup::Failed,
        };

        if !payload.is_success() {
            debug!(
                imdb_id = %imdb_id,
                reason = payload.error_message().unwrap_or("unknown"),
                "Upstream reported no matching movie"
            );
            return Lookup::NotFound;
        }

        Lookup::Found(MovieDetail::from_payload(&payload))
    }

    /// Fetches and decodes one upstream response.
    ///
    /// Returns `None` on any transport or decode failure. Log lines never
    /// include the URL because it carries the API key.
    async fn fetch_payload(&self, url: &str, operation: &str) -> Option<UpstreamPayload> {
        let body = match self.upstream.fetch(url).await {
            Ok(body) => body,
            Err(e) => {
                warn!(operation = %operation, error = %e, "Upstream fetch failed");
                return None;
            }
        };

        match UpstreamPayload::parse(&body) {
            Ok(payload) => Some(payload),
            Err(e) => {
                warn!(operation = %operation, error = %e, "Upstream response not decodable");
                None
            }
        }
    }

    /// Usage counters for the search cache.
    pub async fn search_cache_stats(&self) -> CacheStats {
        self.search_cache.stats().await
    }

    /// Usage counters for the detail cache.
    pub async fn detail_cache_stats(&self) -> CacheStats {
        self.detail_cache.stats().await
    }

    fn search_url(&self, title: &str) -> String {
        format!(
            "{}?apikey={}&s={}",
            self.api_url,
            self.api_key,
            urlencoding::encode(title)
        )
    }

    fn detail_url(&self, imdb_id: &str) -> String {
        format!(
            "{}?apikey={}&i={}&plot=full",
            self.api_url,
            self.api_key,
            urlencoding::encode(imdb_id)
        )
    }
}
