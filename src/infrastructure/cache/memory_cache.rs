//! In-process cache store with per-entry expiration.

use super::service::{CacheResult, CacheStore};
use async_trait::async_trait;
use moka::Expiry;
use moka::future::Cache;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::config::DEFAULT_MEMORY_CACHE_CAPACITY;

/// Cache store held in this process.
///
/// Used when Redis is not configured or unreachable at startup. Each entry
/// expires after the TTL it was written with; expired entries are evicted by
/// moka's maintenance whether or not they are read again, and the store never
/// holds more than its capacity. Contents are lost on restart and not shared
/// between replicas.
pub struct MemoryCache {
    entries: Cache<String, Entry>,
}

#[derive(Clone)]
struct Entry {
    value: String,
    ttl: Duration,
}

/// Expires every entry after its own TTL, counted from the latest write.
struct PerEntryTtl;

impl Expiry<String, Entry> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        entry: &Entry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        entry: &Entry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }
}

impl MemoryCache {
    /// Creates an empty store bounded to [`DEFAULT_MEMORY_CACHE_CAPACITY`] entries.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MEMORY_CACHE_CAPACITY)
    }

    /// Creates an empty store holding at most `max_entries` entries.
    pub fn with_capacity(max_entries: u64) -> Self {
        debug!(max_entries, "Using in-memory cache store");
        Self {
            entries: Cache::builder()
                .max_capacity(max_entries)
                .expire_after(PerEntryTtl)
                .build(),
        }
    }

    /// Number of live entries, after pending evictions have been applied.
    pub async fn entry_count(&self) -> u64 {
        self.entries.run_pending_tasks().await;
        self.entries.entry_count()
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        Ok(self.entries.get(key).await.map(|entry| entry.value))
    }

    async fn set_with_expiration(
        &self,
        key: &str,
        value: &str,
        ttl_seconds: u64,
    ) -> CacheResult<()> {
        self.entries
            .insert(
                key.to_string(),
                Entry {
                    value: value.to_string(),
                    ttl: Duration::from_secs(ttl_seconds),
                },
            )
            .await;
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_missing_key() {
        let cache = MemoryCache::new();
        assert_eq!(cache.get("riot:account:a:b").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_value_visible_until_ttl() {
        let cache = MemoryCache::new();
        cache.set_with_expiration("k", "v", 1).await.unwrap();

        assert_eq!(cache.get("k").await.unwrap(), Some("v".to_string()));

        tokio::time::sleep(Duration::from_millis(1200)).await;
        assert_eq!(cache.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_entries_keep_their_own_ttl() {
        let cache = MemoryCache::new();
        cache.set_with_expiration("short", "a", 1).await.unwrap();
        cache.set_with_expiration("long", "b", 900).await.unwrap();

        tokio::time::sleep(Duration::from_millis(1200)).await;

        assert_eq!(cache.get("short").await.unwrap(), None);
        assert_eq!(cache.get("long").await.unwrap(), Some("b".to_string()));
    }

    #[tokio::test]
    async fn test_overwrite_replaces_value_and_ttl() {
        let cache = MemoryCache::new();
        cache.set_with_expiration("k", "old", 1).await.unwrap();
        cache.set_with_expiration("k", "new", 900).await.unwrap();

        tokio::time::sleep(Duration::from_millis(1200)).await;

        assert_eq!(cache.get("k").await.unwrap(), Some("new".to_string()));
        assert_eq!(cache.entry_count().await, 1);
    }

    #[tokio::test]
    async fn test_expired_entries_evicted_without_reads() {
        let cache = MemoryCache::new();
        for n in 0..1_000 {
            let key = format!("riot:matches:abc123:ranked:{}", n);
            cache.set_with_expiration(&key, "[]", 1).await.unwrap();
        }

        // Expiry is tracked at roughly one-second granularity.
        tokio::time::sleep(Duration::from_secs(3)).await;
        cache
            .set_with_expiration("riot:matches:abc123:ranked:fresh", "[]", 900)
            .await
            .unwrap();

        assert_eq!(cache.entry_count().await, 1);
    }

    #[tokio::test]
    async fn test_capacity_is_bounded() {
        let cache = MemoryCache::with_capacity(50);
        for n in 0..1_000 {
            let key = format!("riot:matches:abc123:ranked:{}", n);
            cache.set_with_expiration(&key, "[]", 900).await.unwrap();
        }

        assert!(cache.entry_count().await <= 50);
    }

    #[tokio::test]
    async fn test_health_and_backend() {
        let cache = MemoryCache::new();
        assert!(cache.health_check().await);
        assert_eq!(cache.backend(), "memory");
    }
}
