//! Axum HTTP adapter for the clubhouse results API.
//!
//! Serves the tournament results and points listings, a handful of
//! supporting read endpoints, and token login/logout. A middleware layer
//! promotes an `access_token` cookie into an `Authorization` header so
//! browser clients authenticate the same way as API clients.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings; these are used by tests/
#[cfg(test)]
use async_trait as _;
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tower as _;

pub mod auth;
pub mod bootstrap;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

// Re-export primary types
pub use auth::AuthUser;
pub use bootstrap::{AuthCookieConfig, AxumContext, CorsConfig, ServerConfig, bootstrap, start_server};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
