//! # Riot Cache Proxy
//!
//! A caching proxy in front of the Riot Games account and match APIs, built
//! with Axum and Redis.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, cache keys and the upstream API trait
//! - **Application Layer** ([`application`]) - Cache-aside orchestration and player lookups
//! - **Infrastructure Layer** ([`infrastructure`]) - Cache stores and the Riot HTTP client
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Riot ID to account resolution, cached for 6 hours
//! - Recent match ids by type and count, cached for 15 minutes
//! - Case-insensitive Riot IDs sharing one cache entry
//! - Redis store with an in-memory fallback
//! - Upstream errors mapped to stable HTTP statuses
//! - Rate limiting and observability
//!
//! ## Quick Start
//!
//! ```bash
//! export RIOT_API_KEY="RGAPI-..."
//! export REDIS_URL="redis://localhost:6379"  # Optional
//!
//! cargo run
//! curl http://localhost:3000/player/Faker/KR1
//! curl "http://localhost:3000/Faker/KR1/matches?count=5&type=ranked"
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CacheAside, CacheTtls, PlayerService};
    pub use crate::domain::entities::{Account, MatchSummary, MatchType};
    pub use crate::domain::{CacheKey, RiotApi, RiotError};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
