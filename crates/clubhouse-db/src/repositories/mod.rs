//! Repository implementations using `SQLite`.
//!
//! These implementations encapsulate all SQL queries and database access.
//! The `SqlitePool` is confined to this module and never exposed through
//! the port trait signatures.

pub(crate) mod row_mappers;
mod sqlite_event_repository;
mod sqlite_player_repository;
mod sqlite_results_repository;
mod sqlite_token_repository;
mod sqlite_user_repository;

pub use sqlite_event_repository::SqliteEventRepository;
pub use sqlite_player_repository::SqlitePlayerRepository;
pub use sqlite_results_repository::SqliteResultsRepository;
pub use sqlite_token_repository::SqliteTokenRepository;
pub use sqlite_user_repository::SqliteUserRepository;
