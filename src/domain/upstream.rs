//! Contract for the upstream Riot API.
//!
//! [`RiotApi`] is implemented by [`crate::infrastructure::riot::RiotClient`]
//! over HTTP; tests use the generated `MockRiotApi`.

use async_trait::async_trait;

use crate::domain::entities::{Account, MatchType};

/// Failures surfaced by the upstream client. None of them are retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RiotError {
    /// Upstream answered with a non-success status.
    #[error("Riot API returned {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The request could not be sent or the response body could not be read.
    #[error("Riot API request failed: {0}")]
    Transport(String),

    /// A success response carried a body of the wrong shape.
    #[error("Unexpected Riot API payload: {0}")]
    Decode(String),
}

/// Read-only access to the Riot account and match endpoints.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RiotApi: Send + Sync {
    /// Looks up an account by Riot ID.
    ///
    /// Name and tag are sent as given; case folding is the caller's concern.
    ///
    /// # Errors
    ///
    /// [`RiotError::Upstream`] carrying status and body on any non-2xx response.
    async fn account_by_riot_id(&self, name: &str, tag: &str) -> Result<Account, RiotError>;

    /// Lists recent match ids for an account, most recent first.
    ///
    /// `max_count` is clamped into `1..=50` before the request is sent; out of
    /// range values are not an error.
    ///
    /// # Errors
    ///
    /// Same contract as [`RiotApi::account_by_riot_id`].
    async fn match_ids_by_puuid(
        &self,
        puuid: &str,
        match_type: MatchType,
        max_count: i64,
    ) -> Result<Vec<String>, RiotError>;
}
