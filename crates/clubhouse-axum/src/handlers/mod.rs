//! HTTP request handlers for the Axum web server.
//!
//! Each submodule contains handlers for a specific API area.
//! Handlers are thin wrappers that delegate to `AppCore` services.

pub mod auth;
pub mod events;
pub mod players;
pub mod points;
pub mod results;
