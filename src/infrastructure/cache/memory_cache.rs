//! In-memory cache implementation backed by a `HashMap`.

use super::store::{CacheStats, CacheStore};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use tracing::debug;

/// A process-local cache that keeps entries for the lifetime of the process.
///
/// Entries never expire and are never evicted. The map only grows with the
/// set of distinct keys seen, which is bounded by the variety of incoming
/// requests. Hit and miss counters are tracked with relaxed atomics since
/// they only feed monitoring output.
///
/// Each service owns its own instances, so two services caching the same
/// key type never observe each other's entries.
pub struct MemoryCache<T> {
    entries: RwLock<HashMap<String, T>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<T> MemoryCache<T> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }
}

impl<T> Default for MemoryCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> CacheStore<T> for MemoryCache<T>
where
    T: Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &str) -> Option<T> {
        let guard = self.entries.read().await;
        match guard.get(key) {
            Some(value) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                debug!(key = %key, "Cache hit");
                Some(value.clone())
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                debug!(key = %key, "Cache miss");
                None
            }
        }
    }

    async fn insert(&self, key: &str, value: T) {
        let mut guard = self.entries.write().await;
        guard.insert(key.to_owned(), value);
    }

    async fn invalidate(&self, key: &str) {
        let mut guard = self.entries.write().await;
        guard.remove(key);
    }

    async fn stats(&self) -> CacheStats {
        let entries = self.entries.read().await.len() as u64;
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries,
        }
    }
}
