//! `/api/tournament-points/` filtering by player and season.

mod common;

use axum::http::StatusCode;
use common::TestApp;

#[tokio::test]
async fn list_without_params_returns_all_points() {
    let app = TestApp::new().await;
    let body = app
        .get_json("/api/tournament-points/", StatusCode::OK)
        .await;
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn filter_by_player() {
    let app = TestApp::new().await;
    let uri = format!("/api/tournament-points/?player={}", app.scenario.player);
    let body = app.get_json(&uri, StatusCode::OK).await;

    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    let points: Vec<i64> = rows.iter().map(|r| r["points"].as_i64().unwrap()).collect();
    assert_eq!(points, vec![10, 8]);
}

#[tokio::test]
async fn filter_by_season() {
    let app = TestApp::new().await;
    let body = app
        .get_json("/api/tournament-points/?season=2023", StatusCode::OK)
        .await;

    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["tournament"]["id"], app.scenario.tournament_2023);
    assert_eq!(rows[0]["points"], 8);
}

#[tokio::test]
async fn filter_by_player_and_season() {
    let app = TestApp::new().await;
    let uri = format!(
        "/api/tournament-points/?player={}&season=2024",
        app.scenario.player
    );
    let body = app.get_json(&uri, StatusCode::OK).await;

    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["position"], 1);
    assert_eq!(rows[0]["points"], 10);
}

#[tokio::test]
async fn unknown_player_returns_empty_list() {
    let app = TestApp::new().await;
    let body = app
        .get_json("/api/tournament-points/?player=9999", StatusCode::OK)
        .await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn non_integer_season_is_bad_request() {
    let app = TestApp::new().await;
    let body = app
        .get_json("/api/tournament-points/?season=twenty", StatusCode::BAD_REQUEST)
        .await;
    assert!(body["error"].as_str().unwrap().contains("season"));
}

#[tokio::test]
async fn points_carry_create_date() {
    let app = TestApp::new().await;
    let body = app
        .get_json("/api/tournament-points/", StatusCode::OK)
        .await;
    for row in body.as_array().unwrap() {
        assert!(row["create_date"].is_string());
    }
}

#[tokio::test]
async fn missing_points_row_is_not_found() {
    let app = TestApp::new().await;
    app.get_json("/api/tournament-points/424242/", StatusCode::NOT_FOUND)
        .await;
}

#[tokio::test]
async fn malformed_id_is_json_bad_request() {
    let app = TestApp::new().await;
    let body = app
        .get_json("/api/tournament-points/1.5/", StatusCode::BAD_REQUEST)
        .await;
    assert_eq!(body["status"], 400);
}
