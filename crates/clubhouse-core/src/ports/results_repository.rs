//! Results repository trait definition.
//!
//! Covers both payout results and season points. The two tables share
//! the same filtering contract, expressed through [`ResultFilter`].

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{
    NewTournamentPoints, NewTournamentResult, ResultFilter, TournamentPoints, TournamentResult,
};

/// Repository for tournament results and points.
///
/// # Filtering
///
/// `filter.player` matches the row's player id exactly; `filter.season`
/// matches the season of the event that owns the row's tournament. Both
/// are optional and combine by intersection. Rows come back ordered by id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResultsRepository: Send + Sync {
    async fn list_results(
        &self,
        filter: &ResultFilter,
    ) -> Result<Vec<TournamentResult>, RepositoryError>;

    async fn get_result(&self, id: i64) -> Result<TournamentResult, RepositoryError>;

    /// Returns `AlreadyExists` if the player already has a result in the tournament.
    async fn insert_result(
        &self,
        result: &NewTournamentResult,
    ) -> Result<TournamentResult, RepositoryError>;

    async fn list_points(
        &self,
        filter: &ResultFilter,
    ) -> Result<Vec<TournamentPoints>, RepositoryError>;

    async fn get_points(&self, id: i64) -> Result<TournamentPoints, RepositoryError>;

    /// Returns `AlreadyExists` if the player already has points in the tournament.
    async fn insert_points(
        &self,
        points: &NewTournamentPoints,
    ) -> Result<TournamentPoints, RepositoryError>;
}
