//! `SQLite` implementation of the `EventRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use clubhouse_core::{
    Event, EventRepository, NewEvent, NewRound, NewTournament, RepositoryError, Round, Tournament,
};

use super::row_mappers::{
    EVENT_SELECT_COLUMNS, ROUND_SELECT_COLUMNS, TOURNAMENT_SELECT_COLUMNS, map_sqlx_error,
    row_to_event, row_to_round, row_to_tournament,
};

/// `SQLite` implementation of the `EventRepository` trait.
pub struct SqliteEventRepository {
    pool: SqlitePool,
}

impl SqliteEventRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn get_round(&self, id: i64) -> Result<Round, RepositoryError> {
        let query = format!("SELECT {ROUND_SELECT_COLUMNS} FROM rounds WHERE id = ?");
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or_else(|| RepositoryError::NotFound(format!("Round with ID {id}")))?;
        row_to_round(&row)
    }
}

#[async_trait]
impl EventRepository for SqliteEventRepository {
    async fn list(&self, season: Option<i32>) -> Result<Vec<Event>, RepositoryError> {
        let query = format!(
            "SELECT {EVENT_SELECT_COLUMNS} FROM events \
             WHERE (? IS NULL OR season = ?) \
             ORDER BY start_date, id"
        );

        let rows = sqlx::query(&query)
            .bind(season)
            .bind(season)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter().map(row_to_event).collect()
    }

    async fn get(&self, id: i64) -> Result<Event, RepositoryError> {
        let query = format!("SELECT {EVENT_SELECT_COLUMNS} FROM events WHERE id = ?");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or_else(|| RepositoryError::NotFound(format!("Event with ID {id}")))?;

        row_to_event(&row)
    }

    async fn insert(&self, event: &NewEvent) -> Result<Event, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO events (event_type, name, season, start_date, status, rounds, gg_id) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(event.event_type.as_str())
        .bind(&event.name)
        .bind(event.season)
        .bind(event.start_date)
        .bind(event.status.as_str())
        .bind(event.rounds)
        .bind(&event.gg_id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        self.get(result.last_insert_rowid()).await
    }

    async fn list_rounds(&self, event_id: i64) -> Result<Vec<Round>, RepositoryError> {
        let query = format!(
            "SELECT {ROUND_SELECT_COLUMNS} FROM rounds WHERE event_id = ? ORDER BY round_number"
        );

        let rows = sqlx::query(&query)
            .bind(event_id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter().map(row_to_round).collect()
    }

    async fn insert_round(&self, round: &NewRound) -> Result<Round, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO rounds (event_id, round_number, round_date, gg_id) VALUES (?, ?, ?, ?)",
        )
        .bind(round.event_id)
        .bind(round.round_number)
        .bind(round.round_date)
        .bind(&round.gg_id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        self.get_round(result.last_insert_rowid()).await
    }

    async fn list_tournaments(&self, event_id: i64) -> Result<Vec<Tournament>, RepositoryError> {
        let query = format!(
            "SELECT {TOURNAMENT_SELECT_COLUMNS} FROM tournaments WHERE event_id = ? ORDER BY id"
        );

        let rows = sqlx::query(&query)
            .bind(event_id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter().map(row_to_tournament).collect()
    }

    async fn get_tournament(&self, id: i64) -> Result<Tournament, RepositoryError> {
        let query = format!("SELECT {TOURNAMENT_SELECT_COLUMNS} FROM tournaments WHERE id = ?");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or_else(|| RepositoryError::NotFound(format!("Tournament with ID {id}")))?;

        row_to_tournament(&row)
    }

    async fn insert_tournament(
        &self,
        tournament: &NewTournament,
    ) -> Result<Tournament, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO tournaments (event_id, round_id, name, format, is_net, gg_id) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(tournament.event_id)
        .bind(tournament.round_id)
        .bind(&tournament.name)
        .bind(&tournament.format)
        .bind(tournament.is_net)
        .bind(&tournament.gg_id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        self.get_tournament(result.last_insert_rowid()).await
    }
}
