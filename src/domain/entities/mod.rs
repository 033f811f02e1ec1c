//! Core domain entities.
//!
//! - [`Account`] - A Riot account resolved from a Riot ID
//! - [`MatchType`] - Match category filter for match history queries
//! - [`MatchSummary`] - Match ids for a player plus the query that produced them

pub mod account;
pub mod match_summary;
pub mod match_type;

pub use account::Account;
pub use match_summary::MatchSummary;
pub use match_type::{MatchType, ParseMatchTypeError};
