//! Application layer services implementing business logic.
//!
//! This layer combines the upstream client with the cache. Services consume
//! the [`crate::domain::RiotApi`] and [`crate::infrastructure::cache::CacheStore`]
//! traits and provide a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::cache_aside::CacheAside`] - Generic read-through cache
//! - [`services::player_service::PlayerService`] - Account and match lookups
pub mod services;
