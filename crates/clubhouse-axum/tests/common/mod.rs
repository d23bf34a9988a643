//! Shared harness for clubhouse-axum integration tests.
//!
//! Each test gets its own in-memory database seeded with the standard
//! two-player, two-season scenario and a router over it.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use clubhouse_axum::bootstrap::{AuthCookieConfig, AxumContext, CorsConfig};
use clubhouse_axum::routes::create_router;
use clubhouse_core::AppCore;
use clubhouse_db::{SCENARIO_PASSWORD, Scenario, TestDb};

pub struct TestApp {
    pub db: TestDb,
    pub scenario: Scenario,
    pub router: Router,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_config(CorsConfig::AllowAll, AuthCookieConfig::default()).await
    }

    pub async fn with_config(cors: CorsConfig, auth_cookie: AuthCookieConfig) -> Self {
        let db = TestDb::new().await.unwrap();
        let scenario = db.seed_scenario().await.unwrap();
        let core = db.app_core();
        Self::over_core(db, scenario, core, &cors, auth_cookie)
    }

    /// Route over a caller-assembled `AppCore` sharing the seeded database.
    pub fn over_core(
        db: TestDb,
        scenario: Scenario,
        core: AppCore,
        cors: &CorsConfig,
        auth_cookie: AuthCookieConfig,
    ) -> Self {
        let ctx = AxumContext::new(Arc::new(core), auth_cookie);
        let router = create_router(ctx, cors);
        Self {
            db,
            scenario,
            router,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn get_with_cookie(&self, uri: &str, cookie: &str) -> Response<Body> {
        self.send(
            Request::get(uri)
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// GET and decode a JSON body, asserting the expected status.
    pub async fn get_json(&self, uri: &str, expected: StatusCode) -> Value {
        let response = self.get(uri).await;
        assert_eq!(response.status(), expected, "GET {uri}");
        body_json(response).await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> Response<Body> {
        self.send(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Log the scenario's first user in and return the issued token.
    pub async fn login(&self) -> String {
        let response = self
            .post_json(
                "/auth/token/login/",
                &serde_json::json!({
                    "email": "test@example.com",
                    "password": SCENARIO_PASSWORD,
                }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        body["auth_token"].as_str().unwrap().to_string()
    }
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Ids of the rows in a JSON array response, in order.
pub fn ids(body: &Value) -> Vec<i64> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|row| row["id"].as_i64().unwrap())
        .collect()
}
