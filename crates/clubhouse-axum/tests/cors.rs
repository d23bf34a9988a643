//! CORS preflight handling across `/api` and `/auth`.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, header};
use common::TestApp;

use clubhouse_axum::bootstrap::{AuthCookieConfig, CorsConfig};

const ORIGIN: &str = "https://club.example";

fn preflight(uri: &str, origin: &str) -> Request<Body> {
    Request::builder()
        .method(Method::OPTIONS)
        .uri(uri)
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn preflight_on_auth_routes_allows_any_origin_by_default() {
    let app = TestApp::new().await;
    let response = app.send(preflight("/auth/token/login/", ORIGIN)).await;

    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn configured_origins_allow_credentials() {
    let app = TestApp::with_config(
        CorsConfig::AllowOrigins(vec![ORIGIN.to_string()]),
        AuthCookieConfig::default(),
    )
    .await;

    for uri in ["/auth/token/login/", "/auth/users/me/", "/api/tournament-results/"] {
        let response = app.send(preflight(uri, ORIGIN)).await;
        assert!(response.status().is_success(), "preflight {uri}");
        let headers = response.headers();
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            ORIGIN
        );
        assert_eq!(
            headers
                .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
                .unwrap(),
            "true"
        );
    }
}

#[tokio::test]
async fn unlisted_origin_gets_no_allow_header() {
    let app = TestApp::with_config(
        CorsConfig::AllowOrigins(vec![ORIGIN.to_string()]),
        AuthCookieConfig::default(),
    )
    .await;

    let response = app
        .send(preflight("/auth/token/login/", "https://elsewhere.example"))
        .await;
    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}
