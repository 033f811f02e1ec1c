//! Cache stores for upstream responses.
//!
//! Provides a [`CacheStore`] trait with two implementations:
//! - [`RedisCache`] - Production Redis-backed store
//! - [`MemoryCache`] - In-process store used when Redis is not available

mod memory_cache;
mod redis_cache;
mod service;

pub use memory_cache::MemoryCache;
pub use redis_cache::RedisCache;
pub use service::{CacheError, CacheResult, CacheStore};

#[cfg(test)]
pub use service::MockCacheStore;

use crate::config::Config;
use std::sync::Arc;

/// Opens the cache store described by the configuration.
///
/// Uses Redis when a Redis URL is configured and reachable. Falls back to
/// [`MemoryCache`], bounded to `memory_cache_capacity` entries, when Redis is
/// not configured or the connection fails, so
/// the proxy keeps serving (with a per-process cache) instead of refusing to
/// start.
pub async fn connect_store(config: &Config) -> Arc<dyn CacheStore> {
    match &config.redis_url {
        Some(redis_url) => match RedisCache::connect(redis_url).await {
            Ok(redis) => {
                tracing::info!("Cache enabled (Redis)");
                Arc::new(redis)
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Using in-memory cache.", e);
                Arc::new(MemoryCache::with_capacity(config.memory_cache_capacity))
            }
        },
        None => {
            tracing::info!("Redis not configured, using in-memory cache");
            Arc::new(MemoryCache::with_capacity(config.memory_cache_capacity))
        }
    }
}
