//! Upstream Riot API client.

mod client;

pub use client::{API_KEY_HEADER, RiotClient};
