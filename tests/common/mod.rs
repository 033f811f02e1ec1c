#![allow(dead_code)]

use async_trait::async_trait;
use axum::{Router, routing::get};
use riot_cache_proxy::api::handlers::{health_handler, matches_handler, player_handler};
use riot_cache_proxy::application::services::{CacheAside, CacheTtls, PlayerService};
use riot_cache_proxy::infrastructure::cache::{CacheError, CacheResult, CacheStore, MemoryCache};
use riot_cache_proxy::infrastructure::riot::RiotClient;
use riot_cache_proxy::state::AppState;
use serde_json::{Value, json};
use std::sync::Arc;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_KEY: &str = "RGAPI-test-key";

pub const ACCOUNT_PATH: &str = "/riot/account/v1/accounts/by-riot-id";
pub const MATCHES_PATH: &str = "/lol/match/v5/matches/by-puuid";

pub fn account_json(puuid: &str, game_name: &str, tag_line: &str) -> Value {
    json!({
        "puuid": puuid,
        "gameName": game_name,
        "tagLine": tag_line,
    })
}

pub fn riot_error_json(status: u16, message: &str) -> Value {
    json!({
        "status": {
            "message": message,
            "status_code": status,
        }
    })
}

/// Expects exactly `times` account lookups for `name`/`tag` as sent upstream.
pub async fn mount_account(server: &MockServer, name: &str, tag: &str, body: Value, times: u64) {
    Mock::given(method("GET"))
        .and(path(format!("{}/{}/{}", ACCOUNT_PATH, name, tag)))
        .and(header("x-riot-token", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(times)
        .mount(server)
        .await;
}

pub async fn mount_account_error(
    server: &MockServer,
    name: &str,
    tag: &str,
    status: u16,
    times: u64,
) {
    Mock::given(method("GET"))
        .and(path(format!("{}/{}/{}", ACCOUNT_PATH, name, tag)))
        .respond_with(ResponseTemplate::new(status).set_body_json(riot_error_json(status, "error")))
        .expect(times)
        .mount(server)
        .await;
}

/// Expects exactly `times` match id lookups for `puuid` with the given upstream query.
pub async fn mount_matches(
    server: &MockServer,
    puuid: &str,
    match_type: &str,
    count: &str,
    ids: &[&str],
    times: u64,
) {
    Mock::given(method("GET"))
        .and(path(format!("{}/{}/ids", MATCHES_PATH, puuid)))
        .and(query_param("type", match_type))
        .and(query_param("start", "0"))
        .and(query_param("count", count))
        .and(header("x-riot-token", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(ids))
        .expect(times)
        .mount(server)
        .await;
}

pub fn create_test_state(riot_base_url: &str) -> (AppState, Arc<MemoryCache>) {
    let store = Arc::new(MemoryCache::new());
    let state = create_test_state_with_store(riot_base_url, store.clone());
    (state, store)
}

pub fn create_test_state_with_store(riot_base_url: &str, store: Arc<dyn CacheStore>) -> AppState {
    let riot = RiotClient::new(riot_base_url, API_KEY).unwrap();
    let player_service = PlayerService::new(
        Arc::new(riot),
        CacheAside::new(store),
        CacheTtls::default(),
    );

    AppState::new(Arc::new(player_service))
}

/// All endpoints, without rate limiting.
pub fn test_router(state: AppState) -> Router {
    Router::new()
        .route("/player/{name}/{tag}", get(player_handler))
        .route("/{name}/{tag}/matches", get(matches_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Store whose every operation fails, as a Redis instance that went away would.
pub struct UnavailableStore;

#[async_trait]
impl CacheStore for UnavailableStore {
    async fn get(&self, _key: &str) -> CacheResult<Option<String>> {
        Err(CacheError::ConnectionError("connection refused".to_string()))
    }

    async fn set_with_expiration(&self, _key: &str, _value: &str, _ttl: u64) -> CacheResult<()> {
        Err(CacheError::ConnectionError("connection refused".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
