//! Generic read-through cache in front of any idempotent fetch.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::infrastructure::cache::CacheStore;

/// Cache-aside orchestrator.
///
/// [`CacheAside::get_or_fetch`] serves a key from the store when present and
/// otherwise runs the supplied fetch, stores its result for `ttl` and returns
/// it. It knows nothing about what is fetched: values only need to round-trip
/// through JSON.
///
/// # Failure policy
///
/// - Fetch errors propagate unchanged and nothing is written.
/// - A store read failure, or a stored value that no longer decodes, counts
///   as a miss.
/// - A store write failure is logged; the fetched value is still returned.
///
/// # Concurrency
///
/// There is no per-key coordination. Concurrent misses on the same key each
/// call their fetch and each write the result (last write wins).
#[derive(Clone)]
pub struct CacheAside {
    store: Arc<dyn CacheStore>,
}

impl CacheAside {
    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self { store }
    }

    /// The underlying store, for health checks.
    pub fn store(&self) -> &Arc<dyn CacheStore> {
        &self.store
    }

    /// Returns the cached value under `key`, or fetches, caches and returns it.
    ///
    /// A `ttl` under one second disables the write.
    ///
    /// # Errors
    ///
    /// Returns exactly the error produced by `fetch`.
    pub async fn get_or_fetch<T, E, F, Fut>(
        &self,
        key: &str,
        ttl: Duration,
        fetch: F,
    ) -> Result<T, E>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(cached) = self.read(key).await {
            return Ok(cached);
        }

        let value = fetch().await?;
        self.write(key, ttl, &value).await;

        Ok(value)
    }

    async fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.store.get(key).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => {
                    debug!(key, "Cache HIT");
                    Some(value)
                }
                Err(e) => {
                    warn!(key, error = %e, "Discarding undecodable cache entry");
                    None
                }
            },
            Ok(None) => {
                debug!(key, "Cache MISS");
                None
            }
            Err(e) => {
                warn!(key, error = %e, "Cache read failed, treating as miss");
                None
            }
        }
    }

    async fn write<T: Serialize>(&self, key: &str, ttl: Duration, value: &T) {
        let ttl_seconds = ttl.as_secs();
        if ttl_seconds == 0 {
            debug!(key, "TTL is zero, not caching");
            return;
        }

        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key, error = %e, "Failed to serialize value for cache");
                return;
            }
        };

        if let Err(e) = self.store.set_with_expiration(key, &raw, ttl_seconds).await {
            warn!(key, error = %e, "Cache write failed");
        }
    }
}
