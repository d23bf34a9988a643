//! `SQLite` adapter for the clubhouse core ports.
//!
//! All SQL lives in this crate. Adapters obtain repositories through
//! [`CoreFactory`] and never see `sqlx` types through the port traits.

#![deny(unsafe_code)]

pub mod factory;
pub mod fixtures;
pub mod repositories;
pub mod setup;

// Re-export factory for convenient access
pub use factory::CoreFactory;

// Re-export TestDb for integration tests
#[cfg(any(test, feature = "test-utils"))]
pub use factory::{SCENARIO_PASSWORD, Scenario, TEST_BCRYPT_COST, TestDb};

pub use fixtures::{FixtureError, FixtureSummary, load_fixture, load_fixture_file};

// Re-export repository implementations
pub use repositories::{
    SqliteEventRepository, SqlitePlayerRepository, SqliteResultsRepository,
    SqliteTokenRepository, SqliteUserRepository,
};

// Re-export setup functions for convenient access
pub use setup::setup_database;

/// Pool type handed out by [`setup_database`].
pub use sqlx::SqlitePool;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
