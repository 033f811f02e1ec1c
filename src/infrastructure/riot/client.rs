//! HTTP client for the Riot account-v1 and match-v5 endpoints.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::config::Config;
use crate::domain::entities::{Account, MatchType};
use crate::domain::upstream::{RiotApi, RiotError};
use crate::utils::match_count::clamp_match_count;

/// Header carrying the API key on every request (`X-Riot-Token`).
pub const API_KEY_HEADER: &str = "x-riot-token";

/// Riot API client.
///
/// One instance is shared by all requests; `reqwest::Client` pools
/// connections internally. No retries and no client-side timeout are applied.
#[derive(Clone)]
pub struct RiotClient {
    http: reqwest::Client,
    base_url: Url,
}

impl RiotClient {
    /// Creates a client for a regional routing host.
    ///
    /// # Arguments
    ///
    /// - `base_url` - Routing host, e.g. `"https://americas.api.riotgames.com"`
    /// - `api_key` - Riot developer or production key
    ///
    /// # Errors
    ///
    /// Returns [`RiotError::Transport`] if the base URL cannot be used as a
    /// base, the key is not a valid header value, or the HTTP client fails to
    /// initialize.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, RiotError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| RiotError::Transport(format!("Invalid base URL '{}': {}", base_url, e)))?;

        if base_url.cannot_be_a_base() {
            return Err(RiotError::Transport(format!(
                "Base URL '{}' cannot carry a path",
                base_url
            )));
        }

        let mut key = HeaderValue::from_str(api_key)
            .map_err(|_| RiotError::Transport("API key is not a valid header value".to_string()))?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(API_KEY_HEADER), key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RiotError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http, base_url })
    }

    /// Creates a client from the service configuration.
    ///
    /// # Errors
    ///
    /// See [`RiotClient::new`].
    pub fn from_config(config: &Config) -> Result<Self, RiotError> {
        Self::new(&config.riot_api_base_url, &config.riot_api_key)
    }

    /// Joins path segments onto the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, RiotError> {
        debug!(path = url.path(), "Riot API request");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| RiotError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Riot API returned an error status");
            return Err(RiotError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| RiotError::Transport(e.to_string()))?;

        serde_json::from_slice(&bytes).map_err(|e| RiotError::Decode(e.to_string()))
    }
}

#[async_trait]
impl RiotApi for RiotClient {
    async fn account_by_riot_id(&self, name: &str, tag: &str) -> Result<Account, RiotError> {
        let url = self.endpoint(&["riot", "account", "v1", "accounts", "by-riot-id", name, tag]);
        self.get_json(url).await
    }

    async fn match_ids_by_puuid(
        &self,
        puuid: &str,
        match_type: MatchType,
        max_count: i64,
    ) -> Result<Vec<String>, RiotError> {
        let count = clamp_match_count(max_count);

        let mut url = self.endpoint(&["lol", "match", "v5", "matches", "by-puuid", puuid, "ids"]);
        url.query_pairs_mut()
            .append_pair("type", match_type.as_str())
            .append_pair("start", "0")
            .append_pair("count", &count.to_string());

        self.get_json(url).await
    }
}
