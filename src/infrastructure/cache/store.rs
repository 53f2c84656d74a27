//! Cache store trait and statistics types.

use async_trait::async_trait;

/// Counters describing how a cache instance has been used.
///
/// Exposed through the health endpoint for operational visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: u64,
}

/// Trait for caching upstream lookup results.
///
/// Keys are the exact strings callers pass in. No normalization happens at
/// this layer, so `"Batman"` and `"batman"` occupy separate slots.
///
/// Implementations must be thread-safe and must never fail a request: a
/// broken cache degrades to upstream lookups, it does not surface errors.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::MemoryCache`] - In-process map, lives for the process lifetime
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[async_trait]
pub trait CacheStore<T>: Send + Sync
where
    T: Clone + Send + Sync + 'static,
{
    /// Retrieves the value stored under `key`.
    ///
    /// Returns `None` on a miss. Implementations record hit/miss counters
    /// as a side effect.
    async fn get(&self, key: &str) -> Option<T>;

    /// Stores `value` under `key`, replacing any previous entry.
    async fn insert(&self, key: &str, value: T);

    /// Removes the entry stored under `key`, if any.
    async fn invalidate(&self, key: &str);

    /// Returns usage counters for this cache instance.
    ///
    /// Used by the health endpoint to report cache activity.
    async fn stats(&self) -> CacheStats;
}
