//! Player lookups: Riot ID to account, account to recent matches.

use std::sync::Arc;
use std::time::Duration;

use crate::application::services::cache_aside::CacheAside;
use crate::config::{Config, DEFAULT_ACCOUNT_TTL_SECONDS, DEFAULT_MATCHES_TTL_SECONDS};
use crate::domain::entities::{Account, MatchSummary, MatchType};
use crate::domain::{CacheKey, RiotApi};
use crate::error::AppError;
use crate::utils::riot_id::RiotId;

/// Lifetimes of the two cache tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheTtls {
    /// Identity data. Long, because a Riot ID rarely changes owner.
    pub account: Duration,
    /// Match id lists. Short, because new matches keep arriving.
    pub matches: Duration,
}

impl Default for CacheTtls {
    fn default() -> Self {
        Self {
            account: Duration::from_secs(DEFAULT_ACCOUNT_TTL_SECONDS),
            matches: Duration::from_secs(DEFAULT_MATCHES_TTL_SECONDS),
        }
    }
}

impl CacheTtls {
    pub fn from_config(config: &Config) -> Self {
        Self {
            account: config.account_cache_ttl(),
            matches: config.matches_cache_ttl(),
        }
    }
}

/// Service resolving players and their match history through the cache.
///
/// Names and tags are lowercased before they reach the cache or the Riot API,
/// so `Faker#KR1` and `faker#kr1` share one cache entry.
pub struct PlayerService {
    riot: Arc<dyn RiotApi>,
    cache: CacheAside,
    ttls: CacheTtls,
}

impl PlayerService {
    /// Creates a new player service.
    pub fn new(riot: Arc<dyn RiotApi>, cache: CacheAside, ttls: CacheTtls) -> Self {
        Self { riot, cache, ttls }
    }

    pub fn cache(&self) -> &CacheAside {
        &self.cache
    }

    /// Resolves a Riot ID to its account.
    ///
    /// Cached under `riot:account:{name}:{tag}` for the account TTL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if name or tag is blank.
    /// Returns [`AppError::Upstream`] when Riot fails; its status mirrors
    /// upstream 400/404/429 and is 502 otherwise.
    pub async fn get_account(&self, name: &str, tag: &str) -> Result<Account, AppError> {
        let id = RiotId::new(name, tag)?;
        self.resolve_account(&id).await
    }

    /// Resolves a Riot ID and lists its most recent match ids.
    ///
    /// The account step uses the same cache entry as [`Self::get_account`]
    /// regardless of `count` and `match_type`. The match list is cached under
    /// `riot:matches:{puuid}:{type}:{count}` for the matches TTL, keyed on the
    /// count as requested; the upstream call itself clamps it into `1..=50`.
    ///
    /// # Errors
    ///
    /// See [`Self::get_account`].
    pub async fn get_matches(
        &self,
        name: &str,
        tag: &str,
        count: i64,
        match_type: MatchType,
    ) -> Result<MatchSummary, AppError> {
        let id = RiotId::new(name, tag)?;
        let account = self.resolve_account(&id).await?;
        let puuid = account.puuid.as_str();

        let key = CacheKey::matches(puuid, match_type, count).to_string();
        let matches = self
            .cache
            .get_or_fetch(&key, self.ttls.matches, || {
                self.riot.match_ids_by_puuid(puuid, match_type, count)
            })
            .await?;

        Ok(MatchSummary::new(id.name, id.tag, match_type, matches))
    }

    async fn resolve_account(&self, id: &RiotId) -> Result<Account, AppError> {
        let key = CacheKey::account(&id.name, &id.tag).to_string();
        let account = self
            .cache
            .get_or_fetch(&key, self.ttls.account, || {
                self.riot.account_by_riot_id(&id.name, &id.tag)
            })
            .await?;

        Ok(account)
    }
}
