//! Row mapping helpers for `SQLite` queries.

use clubhouse_core::{
    Event, EventStatus, EventType, Money, Player, RepositoryError, Round, Tournament,
    TournamentPoints, TournamentResult, User,
};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, Sqlite};

pub const EVENT_SELECT_COLUMNS: &str =
    "id, event_type, name, season, start_date, status, rounds, gg_id";

pub const ROUND_SELECT_COLUMNS: &str = "id, event_id, round_number, round_date, gg_id";

pub const TOURNAMENT_SELECT_COLUMNS: &str = "id, event_id, round_id, name, format, is_net, gg_id";

pub const PLAYER_SELECT_COLUMNS: &str = "id, first_name, last_name, email, ghin, birth_date, phone_number, tee, is_member, last_season, user_id";

pub const USER_SELECT_COLUMNS: &str = "id, username, email, first_name, last_name, is_active, is_staff, is_superuser, date_joined";

/// Tournament columns for queries that join `tournaments t`, prefixed `t_`.
const JOINED_TOURNAMENT_COLUMNS: &str = "t.id AS t_id, t.event_id AS t_event_id, t.round_id AS t_round_id, t.name AS t_name, t.format AS t_format, t.is_net AS t_is_net, t.gg_id AS t_gg_id";

/// Base SELECT for results, joined to tournaments and events so the
/// season filter can be applied.
pub fn results_select() -> String {
    format!(
        "SELECT r.id, r.player_id, r.team_id, r.position, r.score, r.amount_cents, \
         r.payout_type, r.payout_to, r.payout_status, r.flight, r.summary, r.details, \
         r.create_date, r.payout_date, {JOINED_TOURNAMENT_COLUMNS} \
         FROM tournament_results r \
         JOIN tournaments t ON t.id = r.tournament_id \
         JOIN events e ON e.id = t.event_id"
    )
}

/// Base SELECT for points, with the same joins as [`results_select`].
pub fn points_select() -> String {
    format!(
        "SELECT p.id, p.player_id, p.position, p.score, p.points, p.details, p.create_date, \
         {JOINED_TOURNAMENT_COLUMNS} \
         FROM tournament_points p \
         JOIN tournaments t ON t.id = p.tournament_id \
         JOIN events e ON e.id = t.event_id"
    )
}

/// Map `SQLx` errors to `RepositoryError`, surfacing constraint failures.
pub fn map_sqlx_error(e: sqlx::Error) -> RepositoryError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return RepositoryError::AlreadyExists(db_err.message().to_string());
        }
        if db_err.is_foreign_key_violation() {
            return RepositoryError::Constraint(db_err.message().to_string());
        }
    }
    RepositoryError::Storage(e.to_string())
}

fn col<'r, T>(row: &'r SqliteRow, name: &str) -> Result<T, RepositoryError>
where
    T: sqlx::Decode<'r, Sqlite> + sqlx::Type<Sqlite>,
{
    row.try_get(name)
        .map_err(|e| RepositoryError::Storage(e.to_string()))
}

pub fn row_to_event(row: &SqliteRow) -> Result<Event, RepositoryError> {
    let event_type: String = col(row, "event_type")?;
    let status: String = col(row, "status")?;

    Ok(Event {
        id: col(row, "id")?,
        event_type: EventType::parse(&event_type).ok_or_else(|| {
            RepositoryError::Serialization(format!("unknown event type '{event_type}'"))
        })?,
        name: col(row, "name")?,
        season: col(row, "season")?,
        start_date: col(row, "start_date")?,
        status: EventStatus::parse(&status).ok_or_else(|| {
            RepositoryError::Serialization(format!("unknown event status '{status}'"))
        })?,
        rounds: col(row, "rounds")?,
        gg_id: col(row, "gg_id")?,
    })
}

pub fn row_to_round(row: &SqliteRow) -> Result<Round, RepositoryError> {
    Ok(Round {
        id: col(row, "id")?,
        event_id: col(row, "event_id")?,
        round_number: col(row, "round_number")?,
        round_date: col(row, "round_date")?,
        gg_id: col(row, "gg_id")?,
    })
}

pub fn row_to_tournament(row: &SqliteRow) -> Result<Tournament, RepositoryError> {
    Ok(Tournament {
        id: col(row, "id")?,
        event_id: col(row, "event_id")?,
        round_id: col(row, "round_id")?,
        name: col(row, "name")?,
        format: col(row, "format")?,
        is_net: col(row, "is_net")?,
        gg_id: col(row, "gg_id")?,
    })
}

fn joined_tournament(row: &SqliteRow) -> Result<Tournament, RepositoryError> {
    Ok(Tournament {
        id: col(row, "t_id")?,
        event_id: col(row, "t_event_id")?,
        round_id: col(row, "t_round_id")?,
        name: col(row, "t_name")?,
        format: col(row, "t_format")?,
        is_net: col(row, "t_is_net")?,
        gg_id: col(row, "t_gg_id")?,
    })
}

/// Parse a row produced by [`results_select`].
pub fn row_to_result(row: &SqliteRow) -> Result<TournamentResult, RepositoryError> {
    Ok(TournamentResult {
        id: col(row, "id")?,
        tournament: joined_tournament(row)?,
        player_id: col(row, "player_id")?,
        team_id: col(row, "team_id")?,
        position: col(row, "position")?,
        score: col(row, "score")?,
        amount: Money::from_cents(col(row, "amount_cents")?),
        payout_type: col(row, "payout_type")?,
        payout_to: col(row, "payout_to")?,
        payout_status: col(row, "payout_status")?,
        flight: col(row, "flight")?,
        summary: col(row, "summary")?,
        details: col(row, "details")?,
        create_date: col(row, "create_date")?,
        payout_date: col(row, "payout_date")?,
    })
}

/// Parse a row produced by [`points_select`].
pub fn row_to_points(row: &SqliteRow) -> Result<TournamentPoints, RepositoryError> {
    Ok(TournamentPoints {
        id: col(row, "id")?,
        tournament: joined_tournament(row)?,
        player_id: col(row, "player_id")?,
        position: col(row, "position")?,
        score: col(row, "score")?,
        points: col(row, "points")?,
        details: col(row, "details")?,
        create_date: col(row, "create_date")?,
    })
}

pub fn row_to_player(row: &SqliteRow) -> Result<Player, RepositoryError> {
    Ok(Player {
        id: col(row, "id")?,
        first_name: col(row, "first_name")?,
        last_name: col(row, "last_name")?,
        email: col(row, "email")?,
        ghin: col(row, "ghin")?,
        birth_date: col(row, "birth_date")?,
        phone_number: col(row, "phone_number")?,
        tee: col(row, "tee")?,
        is_member: col(row, "is_member")?,
        last_season: col(row, "last_season")?,
        user_id: col(row, "user_id")?,
    })
}

pub fn row_to_user(row: &SqliteRow) -> Result<User, RepositoryError> {
    Ok(User {
        id: col(row, "id")?,
        username: col(row, "username")?,
        email: col(row, "email")?,
        first_name: col(row, "first_name")?,
        last_name: col(row, "last_name")?,
        is_active: col(row, "is_active")?,
        is_staff: col(row, "is_staff")?,
        is_superuser: col(row, "is_superuser")?,
        date_joined: col(row, "date_joined")?,
    })
}
