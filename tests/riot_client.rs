use riot_cache_proxy::domain::entities::MatchType;
use riot_cache_proxy::domain::{RiotApi, RiotError};
use riot_cache_proxy::infrastructure::riot::RiotClient;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "RGAPI-client-test";

#[tokio::test]
async fn test_account_by_riot_id() {
    let riot = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/riot/account/v1/accounts/by-riot-id/faker/kr1"))
        .and(header("x-riot-token", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "puuid": "abc123",
            "gameName": "Faker",
            "tagLine": "KR1",
        })))
        .expect(1)
        .mount(&riot)
        .await;

    let client = RiotClient::new(&riot.uri(), API_KEY).unwrap();
    let account = client.account_by_riot_id("faker", "kr1").await.unwrap();

    assert_eq!(account.puuid, "abc123");
    assert_eq!(account.game_name(), Some("Faker"));
    assert_eq!(account.tag_line(), Some("KR1"));
}

#[tokio::test]
async fn test_match_ids_query() {
    let riot = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lol/match/v5/matches/by-puuid/abc123/ids"))
        .and(query_param("type", "tourney"))
        .and(query_param("start", "0"))
        .and(query_param("count", "3"))
        .and(header("x-riot-token", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(["KR_3", "KR_2", "KR_1"]))
        .expect(1)
        .mount(&riot)
        .await;

    let client = RiotClient::new(&riot.uri(), API_KEY).unwrap();
    let ids = client
        .match_ids_by_puuid("abc123", MatchType::Tourney, 3)
        .await
        .unwrap();

    assert_eq!(ids, vec!["KR_3", "KR_2", "KR_1"]);
}

#[tokio::test]
async fn test_match_ids_count_clamped() {
    let riot = MockServer::start().await;
    for (count, times) in [("50", 1), ("1", 2)] {
        Mock::given(method("GET"))
            .and(path("/lol/match/v5/matches/by-puuid/abc123/ids"))
            .and(query_param("count", count))
            .respond_with(ResponseTemplate::new(200).set_body_json(Vec::<String>::new()))
            .expect(times)
            .mount(&riot)
            .await;
    }

    let client = RiotClient::new(&riot.uri(), API_KEY).unwrap();

    for requested in [1000, 0, -5] {
        let ids = client
            .match_ids_by_puuid("abc123", MatchType::Ranked, requested)
            .await
            .unwrap();
        assert!(ids.is_empty());
    }
}

#[tokio::test]
async fn test_base_url_path_prefix_kept() {
    let riot = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/proxy/riot/account/v1/accounts/by-riot-id/faker/kr1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "puuid": "abc123" })))
        .expect(1)
        .mount(&riot)
        .await;

    let client = RiotClient::new(&format!("{}/proxy/", riot.uri()), API_KEY).unwrap();

    assert!(client.account_by_riot_id("faker", "kr1").await.is_ok());
}

#[tokio::test]
async fn test_upstream_status_and_body_kept() {
    let riot = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Data not found"))
        .mount(&riot)
        .await;

    let client = RiotClient::new(&riot.uri(), API_KEY).unwrap();
    let err = client.account_by_riot_id("nobody", "na1").await.unwrap_err();

    assert_eq!(
        err,
        RiotError::Upstream {
            status: 404,
            body: "Data not found".to_string(),
        }
    );
}

#[tokio::test]
async fn test_unexpected_payload_is_decode_error() {
    let riot = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "gameName": "Faker" })))
        .mount(&riot)
        .await;

    let client = RiotClient::new(&riot.uri(), API_KEY).unwrap();
    let err = client.account_by_riot_id("faker", "kr1").await.unwrap_err();

    assert!(matches!(err, RiotError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_is_transport_error() {
    let client = RiotClient::new("http://127.0.0.1:1", API_KEY).unwrap();
    let err = client.account_by_riot_id("faker", "kr1").await.unwrap_err();

    assert!(matches!(err, RiotError::Transport(_)));
}
