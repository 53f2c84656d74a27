//! No-op cache implementation for testing or disabled caching.

use super::store::{CacheStats, CacheStore};
use async_trait::async_trait;
use tracing::debug;

/// A cache implementation that does nothing.
///
/// Used when caching is explicitly disabled. All operations succeed
/// immediately without storing or retrieving data, so every lookup goes
/// to the upstream API.
///
/// # Use Cases
///
/// - Deployments where stale results are unacceptable
/// - Testing scenarios where caching should be bypassed
pub struct NullCache;

impl NullCache {
    /// Creates a new NullCache instance.
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> CacheStore<T> for NullCache
where
    T: Clone + Send + Sync + 'static,
{
    async fn get(&self, _key: &str) -> Option<T> {
        None
    }

    async fn insert(&self, _key: &str, _value: T) {}

    async fn invalidate(&self, _key: &str) {}

    async fn stats(&self) -> CacheStats {
        CacheStats::default()
    }
}
