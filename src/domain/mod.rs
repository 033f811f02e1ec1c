//! Domain layer: entities, cache keys and the upstream contract.
//!
//! Nothing here depends on HTTP, Redis or configuration. The infrastructure
//! layer implements [`upstream::RiotApi`]; the application layer combines it
//! with the cache.
//!
//! - [`entities`] - Accounts, match types and match summaries
//! - [`cache_key`] - Deterministic, injective cache key derivation
//! - [`upstream`] - Riot API trait and its error type

pub mod cache_key;
pub mod entities;
pub mod upstream;

pub use cache_key::CacheKey;
pub use upstream::{RiotApi, RiotError};

#[cfg(test)]
pub use upstream::MockRiotApi;
