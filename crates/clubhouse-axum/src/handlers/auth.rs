//! Token login, logout and the current-user profile.
//!
//! Login answers with the token in the body and also sets it as the auth
//! cookie, so browser clients are picked up by the cookie middleware on
//! subsequent requests.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::WithRejection;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::auth::AuthUser;
use crate::dto::{LoginRequest, TokenResponse, UserProfileDto};
use crate::error::HttpError;
use crate::state::AppState;

/// Exchange credentials for the user's API token.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    WithRejection(Json(req), _): WithRejection<Json<LoginRequest>, HttpError>,
) -> Result<(CookieJar, Json<TokenResponse>), HttpError> {
    let login = req
        .login()
        .ok_or_else(|| HttpError::BadRequest("Must include \"email\" or \"username\".".into()))?;

    let token = state.core.auth().login(login, &req.password).await?;
    let cookie = Cookie::build((state.auth_cookie.name.clone(), token.key.clone()))
        .path("/")
        .http_only(true)
        .secure(state.auth_cookie.secure)
        .same_site(SameSite::Lax);

    Ok((
        jar.add(cookie),
        Json(TokenResponse {
            auth_token: token.key,
        }),
    ))
}

/// Revoke the presented token and clear the cookie.
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
    jar: CookieJar,
) -> Result<(CookieJar, StatusCode), HttpError> {
    state.core.auth().logout(&auth.token).await?;
    let removal = Cookie::build(state.auth_cookie.name.clone()).path("/");
    Ok((jar.remove(removal), StatusCode::NO_CONTENT))
}

/// Profile of the authenticated user.
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<UserProfileDto>, HttpError> {
    let player = state.core.auth().current_player(&auth.user).await?;
    Ok(Json(UserProfileDto::new(auth.user, player)))
}
