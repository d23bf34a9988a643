//! `SQLite` implementation of the `ResultsRepository` trait.
//!
//! Both listings share one filter clause: each optional value is bound
//! twice so that `NULL` disables its predicate.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use clubhouse_core::{
    NewTournamentPoints, NewTournamentResult, RepositoryError, ResultFilter, ResultsRepository,
    TournamentPoints, TournamentResult,
};

use super::row_mappers::{
    map_sqlx_error, points_select, results_select, row_to_points, row_to_result,
};

const RESULTS_FILTER: &str = "WHERE (? IS NULL OR r.player_id = ?) AND (? IS NULL OR e.season = ?)";
const POINTS_FILTER: &str = "WHERE (? IS NULL OR p.player_id = ?) AND (? IS NULL OR e.season = ?)";

/// `SQLite` implementation of the `ResultsRepository` trait.
pub struct SqliteResultsRepository {
    pool: SqlitePool,
}

impl SqliteResultsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResultsRepository for SqliteResultsRepository {
    async fn list_results(
        &self,
        filter: &ResultFilter,
    ) -> Result<Vec<TournamentResult>, RepositoryError> {
        let query = format!("{} {RESULTS_FILTER} ORDER BY r.id", results_select());
        debug!(?filter, "Querying tournament results");

        let rows = sqlx::query(&query)
            .bind(filter.player)
            .bind(filter.player)
            .bind(filter.season)
            .bind(filter.season)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter().map(row_to_result).collect()
    }

    async fn get_result(&self, id: i64) -> Result<TournamentResult, RepositoryError> {
        let query = format!("{} WHERE r.id = ?", results_select());

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or_else(|| RepositoryError::NotFound(format!("Tournament result with ID {id}")))?;

        row_to_result(&row)
    }

    async fn insert_result(
        &self,
        result: &NewTournamentResult,
    ) -> Result<TournamentResult, RepositoryError> {
        let inserted = sqlx::query(
            "INSERT INTO tournament_results \
             (tournament_id, player_id, team_id, position, score, amount_cents, \
              payout_type, payout_to, payout_status, flight, summary, details) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(result.tournament_id)
        .bind(result.player_id)
        .bind(&result.team_id)
        .bind(result.position)
        .bind(result.score)
        .bind(result.amount.cents())
        .bind(&result.payout_type)
        .bind(&result.payout_to)
        .bind(&result.payout_status)
        .bind(&result.flight)
        .bind(&result.summary)
        .bind(&result.details)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        self.get_result(inserted.last_insert_rowid()).await
    }

    async fn list_points(
        &self,
        filter: &ResultFilter,
    ) -> Result<Vec<TournamentPoints>, RepositoryError> {
        let query = format!("{} {POINTS_FILTER} ORDER BY p.id", points_select());
        debug!(?filter, "Querying tournament points");

        let rows = sqlx::query(&query)
            .bind(filter.player)
            .bind(filter.player)
            .bind(filter.season)
            .bind(filter.season)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter().map(row_to_points).collect()
    }

    async fn get_points(&self, id: i64) -> Result<TournamentPoints, RepositoryError> {
        let query = format!("{} WHERE p.id = ?", points_select());

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or_else(|| RepositoryError::NotFound(format!("Tournament points with ID {id}")))?;

        row_to_points(&row)
    }

    async fn insert_points(
        &self,
        points: &NewTournamentPoints,
    ) -> Result<TournamentPoints, RepositoryError> {
        let inserted = sqlx::query(
            "INSERT INTO tournament_points \
             (tournament_id, player_id, position, score, points, details) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(points.tournament_id)
        .bind(points.player_id)
        .bind(points.position)
        .bind(points.score)
        .bind(points.points)
        .bind(&points.details)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        self.get_points(inserted.last_insert_rowid()).await
    }
}
