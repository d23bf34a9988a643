//! `/api/tournament-results/` filtering by player and season.

mod common;

use axum::http::StatusCode;
use common::{TestApp, ids};

#[tokio::test]
async fn list_without_params_returns_all_results() {
    let app = TestApp::new().await;
    let body = app
        .get_json("/api/tournament-results/", StatusCode::OK)
        .await;
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn filter_by_player() {
    let app = TestApp::new().await;
    let uri = format!("/api/tournament-results/?player={}", app.scenario.player);
    let body = app.get_json(&uri, StatusCode::OK).await;

    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    for row in rows {
        assert_eq!(row["player"], app.scenario.player);
    }
}

#[tokio::test]
async fn filter_by_season() {
    let app = TestApp::new().await;
    let body = app
        .get_json("/api/tournament-results/?season=2024", StatusCode::OK)
        .await;

    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    for row in rows {
        assert_eq!(row["tournament"]["id"], app.scenario.tournament_2024);
        assert_eq!(row["tournament"]["event"], app.scenario.event_2024);
    }
}

#[tokio::test]
async fn filter_by_player_and_season() {
    let app = TestApp::new().await;
    let uri = format!(
        "/api/tournament-results/?player={}&season=2024",
        app.scenario.player
    );
    let body = app.get_json(&uri, StatusCode::OK).await;

    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["player"], app.scenario.player);
    assert_eq!(rows[0]["position"], 1);
}

#[tokio::test]
async fn filters_with_no_match_return_empty_list() {
    let app = TestApp::new().await;
    let body = app
        .get_json("/api/tournament-results/?season=1999", StatusCode::OK)
        .await;
    assert!(body.as_array().unwrap().is_empty());

    let uri = format!(
        "/api/tournament-results/?player={}&season=2023",
        app.scenario.player2
    );
    let body = app.get_json(&uri, StatusCode::OK).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn empty_params_are_ignored() {
    let app = TestApp::new().await;
    let body = app
        .get_json("/api/tournament-results/?player=&season=", StatusCode::OK)
        .await;
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn non_integer_param_is_bad_request() {
    let app = TestApp::new().await;
    let body = app
        .get_json("/api/tournament-results/?player=abc", StatusCode::BAD_REQUEST)
        .await;
    assert_eq!(body["status"], 400);
    assert!(body["error"].as_str().unwrap().contains("player"));
}

#[tokio::test]
async fn results_are_ordered_by_id() {
    let app = TestApp::new().await;
    let body = app
        .get_json("/api/tournament-results/", StatusCode::OK)
        .await;
    let ids = ids(&body);
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}

#[tokio::test]
async fn result_json_shape() {
    let app = TestApp::new().await;
    let uri = format!(
        "/api/tournament-results/?player={}&season=2024",
        app.scenario.player
    );
    let body = app.get_json(&uri, StatusCode::OK).await;
    let row = &body[0];

    assert_eq!(row["amount"], "100.00");
    assert_eq!(row["score"], 72);
    assert_eq!(row["payout_type"], "Cash");
    assert_eq!(row["payout_to"], "Individual");
    assert_eq!(row["payout_status"], "Pending");
    assert_eq!(row["tournament"]["name"], "Test Tournament 2024");
    assert_eq!(row["tournament"]["gg_id"], "tournament2024");
    assert_eq!(row["tournament"]["is_net"], false);
}

#[tokio::test]
async fn get_single_result() {
    let app = TestApp::new().await;
    let all = app
        .get_json("/api/tournament-results/", StatusCode::OK)
        .await;
    let first = ids(&all)[0];

    let body = app
        .get_json(&format!("/api/tournament-results/{first}/"), StatusCode::OK)
        .await;
    assert_eq!(body["id"], first);

    let missing = app
        .get_json("/api/tournament-results/9999/", StatusCode::NOT_FOUND)
        .await;
    assert_eq!(missing["status"], 404);
}

#[tokio::test]
async fn malformed_id_is_json_bad_request() {
    let app = TestApp::new().await;
    let body = app
        .get_json("/api/tournament-results/abc/", StatusCode::BAD_REQUEST)
        .await;
    assert_eq!(body["status"], 400);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn repeated_query_param_is_json_bad_request() {
    let app = TestApp::new().await;
    let body = app
        .get_json(
            "/api/tournament-results/?player=1&player=2",
            StatusCode::BAD_REQUEST,
        )
        .await;
    assert_eq!(body["status"], 400);
}
