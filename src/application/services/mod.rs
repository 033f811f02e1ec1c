//! Business logic services for the application layer.

pub mod cache_aside;
pub mod player_service;

pub use cache_aside::CacheAside;
pub use player_service::{CacheTtls, PlayerService};
