//! Token authentication extractor.
//!
//! Handlers that require a logged-in user take an [`AuthUser`] argument.
//! The extractor reads `Authorization: Token <key>` (the `Bearer` scheme is
//! also accepted) and resolves it through the token store.

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;
use clubhouse_core::User;
use tracing::debug;

use crate::error::HttpError;
use crate::state::AppState;

/// Authorization schemes accepted for token keys.
const SCHEMES: [&str; 2] = ["Token", "Bearer"];

/// An authenticated request: the user and the key it presented.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
    pub token: String,
}

/// Extract the key from an `Authorization` header value.
///
/// Returns `None` for other schemes; `Some("")` when the scheme matches but
/// no key follows.
pub fn parse_authorization(value: &str) -> Option<&str> {
    let (scheme, rest) = value.split_once(' ').unwrap_or((value, ""));
    SCHEMES
        .iter()
        .any(|s| s.eq_ignore_ascii_case(scheme))
        .then(|| rest.trim())
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = HttpError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let key = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_authorization)
            .ok_or_else(|| {
                HttpError::Unauthorized("Authentication credentials were not provided.".into())
            })?;

        if key.is_empty() || key.contains(' ') {
            return Err(HttpError::Unauthorized("Invalid token header.".into()));
        }

        match state.core.auth().authenticate(key).await? {
            Some(user) => Ok(Self {
                user,
                token: key.to_string(),
            }),
            None => {
                debug!(path = %parts.uri.path(), "Rejected invalid token");
                Err(HttpError::Unauthorized("Invalid token.".into()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_authorization() {
        assert_eq!(parse_authorization("Token abc123"), Some("abc123"));
        assert_eq!(parse_authorization("token abc123"), Some("abc123"));
        assert_eq!(parse_authorization("Bearer abc123"), Some("abc123"));
        assert_eq!(parse_authorization("Token"), Some(""));
        assert_eq!(parse_authorization("Basic dXNlcjpwYXNz"), None);
    }
}
