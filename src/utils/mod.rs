//! Utility functions for request input handling.
//!
//! - [`riot_id`] - Riot ID parsing and normalization
//! - [`match_count`] - Match count defaults and clamping

pub mod match_count;
pub mod riot_id;
