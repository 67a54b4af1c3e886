mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use chrono::{SubsecRound, TimeZone, Utc};
use serde_json::json;
use shorty::api::handlers::stats_handler;

fn create_test_server(state: shorty::AppState) -> TestServer {
    let app = Router::new()
        .route("/{shortcode}/stats", get(stats_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_stats_unvisited() {
    let (state, repository) = common::create_test_state();
    let server = create_test_server(state);

    let record = common::create_test_short_url(&repository, "ab12", "https://example.com").await;

    let response = server.get("/ab12/stats").await;

    response.assert_status_ok();
    assert_eq!(
        response.header("content-type"),
        "application/json; charset=UTF-8"
    );

    let start_date = record
        .created_at
        .trunc_subsecs(0)
        .format("%Y-%m-%dT%H:%M:%SZ")
        .to_string();

    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "startDate": start_date, "redirectCount": 0 })
    );
}

#[tokio::test]
async fn test_stats_after_visit() {
    let (state, repository) = common::create_test_state();
    let server = create_test_server(state);

    common::create_test_short_url(&repository, "ab12", "https://example.com").await;
    let seen_at = Utc.with_ymd_and_hms(2030, 6, 15, 10, 20, 30).unwrap()
        + chrono::Duration::milliseconds(750);
    common::record_test_view(&repository, "ab12", seen_at).await;

    let response = server.get("/ab12/stats").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["redirectCount"], 1);
    assert_eq!(json["lastSeenDate"], "2030-06-15T10:20:30Z");
    assert!(json["startDate"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_stats_does_not_count_as_visit() {
    let (state, repository) = common::create_test_state();
    let server = create_test_server(state);

    common::create_test_short_url(&repository, "ab12", "https://example.com").await;

    server.get("/ab12/stats").await.assert_status_ok();
    let response = server.get("/ab12/stats").await;

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["redirectCount"], 0);
    assert!(json.get("lastSeenDate").is_none());
}

#[tokio::test]
async fn test_stats_not_found() {
    let (state, _repository) = common::create_test_state();
    let server = create_test_server(state);

    let response = server.get("/missing/stats").await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({
            "message": "Not Found",
            "description": "The shortcode cannot be found in the system"
        })
    );
}
