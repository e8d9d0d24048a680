//! Integration tests for the PrizePicks fetcher.
//!
//! A wiremock server stands in as the proxy; plain-HTTP requests are sent to
//! it in absolute form, so it also answers for the upstream API.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use rust_decimal_macros::dec;
use serde_json::json;
use wiremock::matchers::{header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use propline_ingest::{
    ErrorKind, FeedConfig, FeedError, LogSink, PrizePicksFetcher, PropsFeed, SnapshotSource,
};

// ============================================================================
// TEST HELPERS
// ============================================================================

const API_URL: &str = "http://api.prizepicks.test/projections";

/// Config routing every request through the mock server with proxy credentials.
fn proxied_config(server: &MockServer) -> FeedConfig {
    let proxy = server.uri().replacen("http://", "http://scraper:hunter2@", 1);
    FeedConfig::default()
        .with_proxy_url(proxy)
        .with_api_url(API_URL)
        .with_timeout(Duration::from_secs(5))
}

fn capture_sink() -> (Arc<Mutex<Vec<String>>>, Arc<dyn LogSink>) {
    let lines = Arc::new(Mutex::new(Vec::new()));
    let captured = lines.clone();
    let sink: Arc<dyn LogSink> =
        Arc::new(move |message: &str| captured.lock().unwrap().push(message.to_string()));
    (lines, sink)
}

fn board() -> serde_json::Value {
    json!({
        "data": [
            {
                "id": "9001",
                "type": "projection",
                "attributes": {"line_score": 5.5, "stat_type": "Strikeouts", "description": "NYY", "odds_type": "goblin"},
                "relationships": {
                    "new_player": {"data": {"id": "p7", "type": "new_player"}},
                    "league": {"data": {"id": "2", "type": "league"}},
                    "game": {"data": {"id": "g3", "type": "game"}}
                }
            },
            {
                "id": "9002",
                "type": "projection",
                "attributes": {"line_score": 6.5, "stat_type": "Strikeouts", "description": "NYY", "odds_type": "standard"},
                "relationships": {
                    "new_player": {"data": {"id": "p7", "type": "new_player"}},
                    "league": {"data": {"id": "2", "type": "league"}},
                    "game": {"data": {"id": "g3", "type": "game"}}
                }
            },
            {
                "id": "9003",
                "type": "projection",
                "attributes": {"line_score": 7.5, "stat_type": "Strikeouts", "description": "NYY", "odds_type": "demon"},
                "relationships": {
                    "new_player": {"data": {"id": "p7", "type": "new_player"}},
                    "league": {"data": {"id": "2", "type": "league"}},
                    "game": {"data": {"id": "g3", "type": "game"}}
                }
            },
            {
                "id": "9004",
                "type": "projection",
                "attributes": {"line_score": null, "stat_type": "Hits Allowed"},
                "relationships": {"new_player": {"data": {"id": "p7", "type": "new_player"}}}
            }
        ],
        "included": [
            {"type": "new_player", "id": "p7", "attributes": {"display_name": "Gerrit Cole", "team": "NYY"}},
            {"type": "league", "id": "2", "attributes": {"name": "MLB"}},
            {"type": "game", "id": "g3", "attributes": {"name": "BOS @ NYY", "start_time": "2024-06-14T19:05:00-04:00"}},
            {"type": "team", "id": "t1", "attributes": {"abbreviation": "NYY"}}
        ],
        "links": {},
        "meta": {}
    })
}

// ============================================================================
// TEST: SUCCESSFUL FETCH
// ============================================================================

#[tokio::test]
async fn test_fetch_snapshot_through_proxy() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projections"))
        .and(query_param("per_page", "10000"))
        .and(query_param("single_stat", "true"))
        .and(header_exists("proxy-authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_json(board()))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = PrizePicksFetcher::new(proxied_config(&server)).unwrap();
    let (lines, sink) = capture_sink();

    let snapshot = fetcher.fetch_snapshot(sink.as_ref()).await;
    assert!(snapshot.is_ok(), "fetch should succeed: {:?}", snapshot.err());

    let snapshot = snapshot.unwrap();
    assert_eq!(snapshot.projections.len(), 4);
    assert_eq!(snapshot.included.len(), 4);
    assert_eq!(
        *lines.lock().unwrap(),
        vec!["Fetched 4 projections (1 players, 1 games) from PRIZEPICKS".to_string()]
    );
}

#[tokio::test]
async fn test_fetch_props_end_to_end() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(board()))
        .expect(1)
        .mount(&server)
        .await;

    let (lines, sink) = capture_sink();
    let feed = PropsFeed::prizepicks(proxied_config(&server))
        .unwrap()
        .with_sink(sink);

    let props = feed.fetch_props().await.unwrap();

    assert_eq!(props.len(), 1, "three tiers collapse to one, null line dropped");
    let prop = &props[0];
    assert_eq!(prop.id, "prizepicks_9002");
    assert_eq!(prop.player_name, "Gerrit Cole");
    assert_eq!(prop.sport, "MLB");
    assert_eq!(prop.stat_type, "Strikeouts");
    assert_eq!(prop.stat_value, dec!(6.5));
    assert_eq!(prop.game, "NYY");
    assert!(prop.start_time.is_some());
    assert!(prop.over_odds.is_none());

    let lines = lines.lock().unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], "Deduplicated 3 props to 1 (2 tier variants removed)");
}

#[tokio::test]
async fn test_malformed_entries_degrade_without_failing_fetch() {
    let server = MockServer::start().await;

    let body = json!({
        "data": [
            {
                "id": "9101",
                "attributes": {"line_score": 5.5, "stat_type": "Strikeouts", "description": "NYY"},
                "relationships": {
                    "new_player": {"data": {"id": "p7", "type": "new_player"}},
                    "league": {"data": {"id": "2", "type": "league"}}
                }
            },
            {
                "id": "9102",
                "attributes": {"line_score": 1.5, "stat_type": "Hits", "description": 7},
                "relationships": {
                    "new_player": {"data": [{"id": "p8", "type": "new_player"}]},
                    "league": {"data": {"id": "2", "type": "league"}}
                }
            },
            {"attributes": {"line_score": 0.5, "stat_type": "Walks"}}
        ],
        "included": [
            {"type": "new_player", "id": "p7", "attributes": {"display_name": "Gerrit Cole", "team": 12}},
            {"type": "new_player", "id": "p8", "attributes": {"display_name": "Aaron Judge", "team": "NYY"}},
            {"type": "game", "attributes": {"name": "BOS @ NYY"}},
            {"type": "league", "id": "2", "attributes": {"name": "MLB"}}
        ]
    });

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let (lines, sink) = capture_sink();
    let feed = PropsFeed::prizepicks(proxied_config(&server))
        .unwrap()
        .with_sink(sink);

    let props = feed.fetch_props().await;
    assert!(props.is_ok(), "fetch should succeed: {:?}", props.err());

    let props = props.unwrap();
    assert_eq!(props.len(), 2);

    assert_eq!(props[0].id, "prizepicks_9101");
    assert_eq!(props[0].player_name, "Gerrit Cole");
    assert_eq!(props[0].sport, "MLB");
    assert_eq!(props[0].game, "NYY");

    assert_eq!(props[1].id, "prizepicks_9102");
    assert_eq!(props[1].player_name, "Unknown");
    assert_eq!(props[1].sport, "MLB");
    assert_eq!(props[1].game, "Unknown Game");

    assert_eq!(
        lines.lock().unwrap()[0],
        "Fetched 2 projections (2 players, 0 games) from PRIZEPICKS"
    );
}

// ============================================================================
// TEST: FAILURES
// ============================================================================

#[tokio::test]
async fn test_non_success_status_is_upstream_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .expect(1)
        .mount(&server)
        .await;

    let (lines, sink) = capture_sink();
    let feed = PropsFeed::prizepicks(proxied_config(&server))
        .unwrap()
        .with_sink(sink);

    let error = feed.fetch_props().await.unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Upstream);
    match error {
        FeedError::Upstream {
            status,
            status_text,
        } => {
            assert_eq!(status, 503);
            assert_eq!(status_text, "Service Unavailable");
        }
        other => panic!("expected upstream error, got {:?}", other),
    }
    assert!(lines.lock().unwrap().is_empty(), "no progress on failure");
}

#[tokio::test]
async fn test_timeout_is_upstream_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(board())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = proxied_config(&server).with_timeout(Duration::from_millis(200));
    let fetcher = PrizePicksFetcher::new(config).unwrap();
    let (_lines, sink) = capture_sink();

    let error = fetcher.fetch_snapshot(sink.as_ref()).await.unwrap_err();

    assert!(
        matches!(error, FeedError::Timeout { .. }),
        "expected timeout, got {:?}",
        error
    );
    assert_eq!(error.kind(), ErrorKind::Upstream);
}

#[tokio::test]
async fn test_malformed_body_is_upstream_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>blocked</html>"))
        .mount(&server)
        .await;

    let fetcher = PrizePicksFetcher::new(proxied_config(&server)).unwrap();
    let (_lines, sink) = capture_sink();

    let error = fetcher.fetch_snapshot(sink.as_ref()).await.unwrap_err();
    assert!(matches!(error, FeedError::Decode(_)));
    assert_eq!(error.kind(), ErrorKind::Upstream);
}

#[tokio::test]
async fn test_missing_proxy_fails_before_any_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(board()))
        .expect(0)
        .mount(&server)
        .await;

    let config = FeedConfig::default().with_api_url(format!("{}/projections", server.uri()));
    let error = PropsFeed::prizepicks(config).err().unwrap();

    assert_eq!(error.kind(), ErrorKind::Configuration);
}
