//! Event service - events, rounds and tournaments.

use std::sync::Arc;

use crate::domain::{Event, NewEvent, NewRound, NewTournament, Round, Tournament};
use crate::ports::{CoreError, EventRepository};

/// Thin facade over the `EventRepository` port.
pub struct EventService {
    repo: Arc<dyn EventRepository>,
}

impl EventService {
    pub fn new(repo: Arc<dyn EventRepository>) -> Self {
        Self { repo }
    }

    /// List events, optionally for a single season.
    pub async fn list_events(&self, season: Option<i32>) -> Result<Vec<Event>, CoreError> {
        self.repo.list(season).await.map_err(CoreError::from)
    }

    pub async fn get_event(&self, id: i64) -> Result<Event, CoreError> {
        self.repo.get(id).await.map_err(CoreError::from)
    }

    pub async fn add_event(&self, event: NewEvent) -> Result<Event, CoreError> {
        if event.name.trim().is_empty() {
            return Err(CoreError::Validation("Event name cannot be empty".to_string()));
        }
        self.repo.insert(&event).await.map_err(CoreError::from)
    }

    /// List the rounds of an event. Fails with `NotFound` for an unknown event.
    pub async fn list_rounds(&self, event_id: i64) -> Result<Vec<Round>, CoreError> {
        self.repo.get(event_id).await?;
        self.repo
            .list_rounds(event_id)
            .await
            .map_err(CoreError::from)
    }

    pub async fn add_round(&self, round: NewRound) -> Result<Round, CoreError> {
        if round.round_number < 1 {
            return Err(CoreError::Validation(format!(
                "Round number must be at least 1, got {}",
                round.round_number
            )));
        }
        self.repo.insert_round(&round).await.map_err(CoreError::from)
    }

    /// List the tournaments of an event. Fails with `NotFound` for an unknown event.
    pub async fn list_tournaments(&self, event_id: i64) -> Result<Vec<Tournament>, CoreError> {
        self.repo.get(event_id).await?;
        self.repo
            .list_tournaments(event_id)
            .await
            .map_err(CoreError::from)
    }

    pub async fn get_tournament(&self, id: i64) -> Result<Tournament, CoreError> {
        self.repo.get_tournament(id).await.map_err(CoreError::from)
    }

    pub async fn add_tournament(&self, tournament: NewTournament) -> Result<Tournament, CoreError> {
        self.repo
            .insert_tournament(&tournament)
            .await
            .map_err(CoreError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::RepositoryError;
    use crate::ports::event_repository::MockEventRepository;

    #[tokio::test]
    async fn test_list_tournaments_unknown_event() {
        let mut repo = MockEventRepository::new();
        repo.expect_get()
            .returning(|id| Err(RepositoryError::NotFound(format!("event {id}"))));
        repo.expect_list_tournaments().never();

        let service = EventService::new(Arc::new(repo));
        let err = service.list_tournaments(42).await.unwrap_err();

        assert!(matches!(
            err,
            CoreError::Repository(RepositoryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_add_round_rejects_round_zero() {
        let mut repo = MockEventRepository::new();
        repo.expect_insert_round().never();

        let service = EventService::new(Arc::new(repo));
        let err = service
            .add_round(NewRound {
                event_id: 1,
                round_number: 0,
                round_date: chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                gg_id: "r-0".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Validation(_)));
    }
}
