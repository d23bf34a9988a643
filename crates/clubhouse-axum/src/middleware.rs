//! Token cookie middleware.
//!
//! Browser clients keep their API token in a cookie (`access_token` by
//! default). This layer validates that cookie against the token store and,
//! when it names an active user's token, rewrites it into
//! `Authorization: Token <key>` before the request reaches routing.
//!
//! The layer never rejects: an absent, unknown, or unreadable cookie leaves
//! the request anonymous and downstream extractors decide. An
//! `Authorization` header sent by the client always takes precedence.

use axum::extract::{Request, State};
use axum::http::{HeaderValue, header};
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;
use clubhouse_core::key_prefix;
use tracing::{debug, warn};

use crate::state::AppState;

/// Promote a valid token cookie into an `Authorization` header.
pub async fn promote_token_cookie(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    if req.headers().contains_key(header::AUTHORIZATION) {
        return next.run(req).await;
    }

    let jar = CookieJar::from_headers(req.headers());
    let Some(key) = jar
        .get(&state.auth_cookie.name)
        .map(|c| c.value().trim().to_string())
        .filter(|v| !v.is_empty())
    else {
        return next.run(req).await;
    };

    match state.core.auth().authenticate(&key).await {
        Ok(Some(user)) => match HeaderValue::from_str(&format!("Token {key}")) {
            Ok(value) => {
                debug!(user_id = user.id, token = key_prefix(&key), "Authenticated via cookie");
                req.headers_mut().insert(header::AUTHORIZATION, value);
            }
            Err(_) => debug!("Token cookie is not a valid header value"),
        },
        Ok(None) => debug!(token = key_prefix(&key), "Ignoring invalid token cookie"),
        Err(e) => warn!(error = %e, "Token lookup failed; continuing anonymously"),
    }

    next.run(req).await
}
