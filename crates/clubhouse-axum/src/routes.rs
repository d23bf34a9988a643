//! Route definitions and router construction.
//!
//! All API paths carry a trailing slash (`/api/tournament-results/`).
//! Axum 0.8 uses brace syntax for path parameters: `{id}`.

use std::sync::Arc;

use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::middleware::promote_token_cookie;
use crate::state::AppState;

/// Build CORS layer from configuration.
///
/// Explicit origins may send credentials (the token cookie), which rules
/// out wildcard methods and headers.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::{HeaderValue, Method, header};
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
                .allow_credentials(true)
        }
    }
}

/// Read-only API routes, nested under `/api` by the caller.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/tournament-results/", get(handlers::results::list))
        .route("/tournament-results/{id}/", get(handlers::results::get))
        .route("/tournament-points/", get(handlers::points::list))
        .route("/tournament-points/{id}/", get(handlers::points::get))
        .route("/events/", get(handlers::events::list))
        .route("/events/{id}/", get(handlers::events::get))
        .route(
            "/events/{id}/tournaments/",
            get(handlers::events::tournaments),
        )
        .route("/players/{id}/", get(handlers::players::get))
}

/// Token login/logout and the current user, nested under `/auth`.
pub(crate) fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/token/login/", post(handlers::auth::login))
        .route("/token/logout/", post(handlers::auth::logout))
        .route("/users/me/", get(handlers::auth::me))
}

/// Create the application router.
///
/// Every route sits behind the token cookie middleware and the CORS layer,
/// so a valid `access_token` cookie authenticates `/api` and `/auth`
/// requests alike, cross-origin included.
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);
    let cors = build_cors_layer(cors_config);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes())
        .nest("/auth", auth_routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            promote_token_cookie,
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
