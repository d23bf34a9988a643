//! Core services - the application's business logic layer.
//!
//! Services orchestrate between ports (trait interfaces) and domain logic.
//! They don't know about concrete implementations.

mod app_core;
mod auth_service;
mod event_service;
mod player_service;
mod results_service;

pub use app_core::AppCore;
pub use auth_service::{AuthError, AuthService, NewUserRequest, hash_password};
pub use event_service::EventService;
pub use player_service::PlayerService;
pub use results_service::ResultsService;
