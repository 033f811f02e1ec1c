//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod matches;
pub mod not_found;
pub mod player;

pub use health::health_handler;
pub use matches::matches_handler;
pub use not_found::not_found_handler;
pub use player::player_handler;
