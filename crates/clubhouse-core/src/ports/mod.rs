//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Traits are minimal and CRUD-focused
//! - Filtering semantics are expressed with domain types (`ResultFilter`)

pub mod event_repository;
pub mod player_repository;
pub mod results_repository;
pub mod token_repository;
pub mod user_repository;

use std::sync::Arc;
use thiserror::Error;

pub use event_repository::EventRepository;
pub use player_repository::PlayerRepository;
pub use results_repository::ResultsRepository;
pub use token_repository::TokenRepository;
pub use user_repository::UserRepository;

/// Container for all repository trait objects.
///
/// This struct provides a consistent way to wire repositories across adapters
/// without coupling them to concrete implementations. It lives in
/// `clubhouse-core` so that `AppCore` can accept it without depending on
/// `clubhouse-db`.
#[derive(Clone)]
pub struct Repos {
    /// Events, rounds and tournaments.
    pub events: Arc<dyn EventRepository>,
    /// Tournament results and points.
    pub results: Arc<dyn ResultsRepository>,
    /// Players.
    pub players: Arc<dyn PlayerRepository>,
    /// Login accounts.
    pub users: Arc<dyn UserRepository>,
    /// API token store.
    pub tokens: Arc<dyn TokenRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(
        events: Arc<dyn EventRepository>,
        results: Arc<dyn ResultsRepository>,
        players: Arc<dyn PlayerRepository>,
        users: Arc<dyn UserRepository>,
        tokens: Arc<dyn TokenRepository>,
    ) -> Self {
        Self {
            events,
            results,
            players,
            users,
            tokens,
        }
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An entity with the same identifier already exists.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A constraint was violated (e.g., foreign key).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (HTTP status codes,
/// CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Authentication or credential handling failed.
    #[error(transparent)]
    Authentication(#[from] crate::services::AuthError),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error (unexpected condition).
    #[error("Internal error: {0}")]
    Internal(String),
}
