//! Cache store trait and error types.

use async_trait::async_trait;

/// Errors that can occur during cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// The store could not be reached.
    #[error("Cache connection error: {0}")]
    ConnectionError(String),

    /// A read or write was rejected by the store.
    #[error("Cache operation error: {0}")]
    OperationError(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Key-value store with native expiration.
///
/// This is the whole surface the cache-aside orchestrator needs: a point read
/// and an atomic write-with-TTL. Values are opaque strings; serialization is
/// the caller's concern. Implementations report failures instead of hiding
/// them so the caller can decide how to degrade.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis `GET` / `SET EX`
/// - [`crate::infrastructure::cache::MemoryCache`] - In-process map with deadlines
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Reads a value.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` when the key exists and has not expired
    /// - `Ok(None)` when the key is absent or expired
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] when the store cannot be queried.
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Writes a value that expires after `ttl_seconds`, replacing any previous
    /// value under the same key.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] when the store cannot be written.
    async fn set_with_expiration(
        &self,
        key: &str,
        value: &str,
        ttl_seconds: u64,
    ) -> CacheResult<()>;

    /// Checks if the store is reachable.
    ///
    /// Used by the health endpoint and the admin CLI.
    async fn health_check(&self) -> bool;

    /// Short backend name for logs and health output.
    fn backend(&self) -> &'static str;
}
