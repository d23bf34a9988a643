//! Event repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Event, NewEvent, NewRound, NewTournament, Round, Tournament};

/// Repository for events and the rounds and tournaments they contain.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// List events, optionally restricted to one season, ordered by start date.
    async fn list(&self, season: Option<i32>) -> Result<Vec<Event>, RepositoryError>;

    /// Get an event by id.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the event doesn't exist.
    async fn get(&self, id: i64) -> Result<Event, RepositoryError>;

    /// Insert a new event. Name and start date are unique together.
    async fn insert(&self, event: &NewEvent) -> Result<Event, RepositoryError>;

    /// List the rounds of an event ordered by round number.
    async fn list_rounds(&self, event_id: i64) -> Result<Vec<Round>, RepositoryError>;

    /// Insert a new round.
    async fn insert_round(&self, round: &NewRound) -> Result<Round, RepositoryError>;

    /// List the tournaments of an event.
    async fn list_tournaments(&self, event_id: i64) -> Result<Vec<Tournament>, RepositoryError>;

    /// Get a tournament by id.
    async fn get_tournament(&self, id: i64) -> Result<Tournament, RepositoryError>;

    /// Insert a new tournament.
    async fn insert_tournament(
        &self,
        tournament: &NewTournament,
    ) -> Result<Tournament, RepositoryError>;
}
