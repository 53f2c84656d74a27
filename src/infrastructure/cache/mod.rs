//! Caching layer for upstream lookup results.
//!
//! Provides a [`CacheStore`] trait with two implementations:
//! - [`MemoryCache`] - Process-local map with hit/miss counters
//! - [`NullCache`] - No-op implementation for testing/disabled caching

mod memory_cache;
mod null_cache;
mod store;

pub use memory_cache::MemoryCache;
pub use null_cache::NullCache;
pub use store::{CacheStats, CacheStore};
