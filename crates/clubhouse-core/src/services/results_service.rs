//! Results service - filtered listings and recording of tournament outcomes.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{
    NewTournamentPoints, NewTournamentResult, ResultFilter, TournamentPoints, TournamentResult,
};
use crate::ports::{CoreError, ResultsRepository};

/// Service for tournament results and points.
///
/// Listing semantics are shared between the two record kinds: see
/// [`ResultFilter`].
pub struct ResultsService {
    repo: Arc<dyn ResultsRepository>,
}

impl ResultsService {
    pub fn new(repo: Arc<dyn ResultsRepository>) -> Self {
        Self { repo }
    }

    /// List results matching the filter, ordered by id.
    pub async fn list_results(
        &self,
        filter: &ResultFilter,
    ) -> Result<Vec<TournamentResult>, CoreError> {
        let rows = self.repo.list_results(filter).await?;
        debug!(
            player = ?filter.player,
            season = ?filter.season,
            count = rows.len(),
            "Listed tournament results"
        );
        Ok(rows)
    }

    /// Get a single result. Missing rows surface as `RepositoryError::NotFound`.
    pub async fn get_result(&self, id: i64) -> Result<TournamentResult, CoreError> {
        self.repo.get_result(id).await.map_err(CoreError::from)
    }

    /// List points matching the filter, ordered by id.
    pub async fn list_points(
        &self,
        filter: &ResultFilter,
    ) -> Result<Vec<TournamentPoints>, CoreError> {
        let rows = self.repo.list_points(filter).await?;
        debug!(
            player = ?filter.player,
            season = ?filter.season,
            count = rows.len(),
            "Listed tournament points"
        );
        Ok(rows)
    }

    pub async fn get_points(&self, id: i64) -> Result<TournamentPoints, CoreError> {
        self.repo.get_points(id).await.map_err(CoreError::from)
    }

    /// Record a result after validating position and amount.
    pub async fn record_result(
        &self,
        result: NewTournamentResult,
    ) -> Result<TournamentResult, CoreError> {
        validate_position(result.position)?;
        if result.amount.is_negative() {
            return Err(CoreError::Validation(format!(
                "Payout amount cannot be negative: {}",
                result.amount
            )));
        }
        self.repo
            .insert_result(&result)
            .await
            .map_err(CoreError::from)
    }

    /// Record points after validating position.
    pub async fn record_points(
        &self,
        points: NewTournamentPoints,
    ) -> Result<TournamentPoints, CoreError> {
        validate_position(points.position)?;
        self.repo
            .insert_points(&points)
            .await
            .map_err(CoreError::from)
    }
}

fn validate_position(position: i32) -> Result<(), CoreError> {
    if position < 1 {
        return Err(CoreError::Validation(format!(
            "Position must be at least 1, got {position}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Money, Tournament};
    use crate::ports::RepositoryError;
    use crate::ports::results_repository::MockResultsRepository;
    use mockall::predicate::eq;

    fn tournament() -> Tournament {
        Tournament {
            id: 1,
            event_id: 1,
            round_id: 1,
            name: "Individual Gross".to_string(),
            format: Some("Stroke".to_string()),
            is_net: false,
            gg_id: "t-1".to_string(),
        }
    }

    fn result(id: i64, player_id: i64) -> TournamentResult {
        TournamentResult {
            id,
            tournament: tournament(),
            player_id,
            team_id: None,
            position: 1,
            score: Some(72),
            amount: Money::from_cents(10_000),
            payout_type: None,
            payout_to: None,
            payout_status: None,
            flight: None,
            summary: None,
            details: None,
            create_date: None,
            payout_date: None,
        }
    }

    #[tokio::test]
    async fn test_list_results_passes_filter_through() {
        let filter = ResultFilter::all().for_player(2).for_season(2024);
        let mut repo = MockResultsRepository::new();
        repo.expect_list_results()
            .with(eq(filter))
            .times(1)
            .returning(|_| Ok(vec![result(5, 2)]));

        let service = ResultsService::new(Arc::new(repo));
        let rows = service.list_results(&filter).await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].player_id, 2);
    }

    #[tokio::test]
    async fn test_get_result_not_found() {
        let mut repo = MockResultsRepository::new();
        repo.expect_get_result()
            .returning(|id| Err(RepositoryError::NotFound(format!("result {id}"))));

        let service = ResultsService::new(Arc::new(repo));
        let err = service.get_result(99).await.unwrap_err();

        assert!(matches!(
            err,
            CoreError::Repository(RepositoryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_record_result_rejects_zero_position() {
        let mut repo = MockResultsRepository::new();
        repo.expect_insert_result().never();

        let service = ResultsService::new(Arc::new(repo));
        let err = service
            .record_result(NewTournamentResult {
                tournament_id: 1,
                player_id: 1,
                position: 0,
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn test_record_result_rejects_negative_amount() {
        let mut repo = MockResultsRepository::new();
        repo.expect_insert_result().never();

        let service = ResultsService::new(Arc::new(repo));
        let err = service
            .record_result(NewTournamentResult {
                tournament_id: 1,
                player_id: 1,
                position: 3,
                amount: Money::from_cents(-500),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn test_record_points_inserts_valid_row() {
        let mut repo = MockResultsRepository::new();
        repo.expect_insert_points().times(1).returning(|new| {
            Ok(TournamentPoints {
                id: 1,
                tournament: tournament(),
                player_id: new.player_id,
                position: new.position,
                score: new.score,
                points: new.points,
                details: None,
                create_date: chrono::NaiveDate::from_ymd_opt(2024, 5, 1)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap(),
            })
        });

        let service = ResultsService::new(Arc::new(repo));
        let row = service
            .record_points(NewTournamentPoints {
                tournament_id: 1,
                player_id: 4,
                position: 2,
                points: 90,
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(row.player_id, 4);
        assert_eq!(row.points, 90);
    }
}
