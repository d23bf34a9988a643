//! JSON fixture loading.
//!
//! Reads fixtures in the `[{"model": "events.event", "pk": 1, "fields": {...}}]`
//! layout used by the club's existing data dumps. Foreign keys are named
//! after the relation (`"tournament": 3`) and mapped to `*_id` columns.
//! Objects are upserted by primary key inside a single transaction, with
//! foreign key checks deferred to commit so file order does not matter.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use clubhouse_core::{EventStatus, EventType, Money};
use serde::Deserialize;
use serde_json::{Map, Value};
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised while loading a fixture.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Failed to read fixture {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("Malformed fixture: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Object #{index}: unknown model '{label}'")]
    UnknownModel { index: usize, label: String },

    #[error("Object #{index} ({model}) has no primary key")]
    MissingPk { index: usize, model: String },

    #[error("{model} pk={pk}: missing required field '{field}'")]
    MissingField {
        model: &'static str,
        pk: i64,
        field: &'static str,
    },

    #[error("{model} pk={pk}: invalid value for '{field}': {reason}")]
    InvalidField {
        model: &'static str,
        pk: i64,
        field: &'static str,
        reason: String,
    },

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for FixtureError {
    fn from(e: sqlx::Error) -> Self {
        Self::Database(e.to_string())
    }
}

/// Counts of loaded objects, keyed by model label.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FixtureSummary {
    pub models: BTreeMap<&'static str, usize>,
}

impl FixtureSummary {
    pub fn total(&self) -> usize {
        self.models.values().sum()
    }
}

#[derive(Debug, Deserialize)]
struct FixtureObject {
    model: String,
    pk: Option<i64>,
    #[serde(default)]
    fields: Map<String, Value>,
}

#[derive(Debug, Clone, Copy)]
enum Kind {
    Text,
    Int,
    Bool,
    Date,
    DateTime,
    Money,
    Choice(fn(&str) -> bool),
}

struct Field {
    name: &'static str,
    column: &'static str,
    kind: Kind,
    required: bool,
}

const fn req(name: &'static str, column: &'static str, kind: Kind) -> Field {
    Field {
        name,
        column,
        kind,
        required: true,
    }
}

const fn opt(name: &'static str, column: &'static str, kind: Kind) -> Field {
    Field {
        name,
        column,
        kind,
        required: false,
    }
}

struct ModelSpec {
    label: &'static str,
    table: &'static str,
    fields: &'static [Field],
}

fn is_event_type(code: &str) -> bool {
    EventType::parse(code).is_some()
}

fn is_event_status(code: &str) -> bool {
    EventStatus::parse(code).is_some()
}

const MODELS: &[ModelSpec] = &[
    ModelSpec {
        label: "events.event",
        table: "events",
        fields: &[
            req("event_type", "event_type", Kind::Choice(is_event_type)),
            req("name", "name", Kind::Text),
            req("season", "season", Kind::Int),
            req("start_date", "start_date", Kind::Date),
            opt("status", "status", Kind::Choice(is_event_status)),
            opt("rounds", "rounds", Kind::Int),
            opt("gg_id", "gg_id", Kind::Text),
        ],
    },
    ModelSpec {
        label: "events.round",
        table: "rounds",
        fields: &[
            req("event", "event_id", Kind::Int),
            req("round_number", "round_number", Kind::Int),
            req("round_date", "round_date", Kind::Date),
            req("gg_id", "gg_id", Kind::Text),
        ],
    },
    ModelSpec {
        label: "events.tournament",
        table: "tournaments",
        fields: &[
            req("event", "event_id", Kind::Int),
            req("round", "round_id", Kind::Int),
            req("name", "name", Kind::Text),
            opt("format", "format", Kind::Text),
            opt("is_net", "is_net", Kind::Bool),
            req("gg_id", "gg_id", Kind::Text),
        ],
    },
    ModelSpec {
        label: "events.tournamentresult",
        table: "tournament_results",
        fields: &[
            req("tournament", "tournament_id", Kind::Int),
            req("player", "player_id", Kind::Int),
            opt("team_id", "team_id", Kind::Text),
            req("position", "position", Kind::Int),
            opt("score", "score", Kind::Int),
            opt("amount", "amount_cents", Kind::Money),
            opt("payout_type", "payout_type", Kind::Text),
            opt("payout_to", "payout_to", Kind::Text),
            opt("payout_status", "payout_status", Kind::Text),
            opt("flight", "flight", Kind::Text),
            opt("summary", "summary", Kind::Text),
            opt("details", "details", Kind::Text),
            opt("create_date", "create_date", Kind::DateTime),
            opt("payout_date", "payout_date", Kind::DateTime),
        ],
    },
    ModelSpec {
        label: "events.tournamentpoints",
        table: "tournament_points",
        fields: &[
            req("tournament", "tournament_id", Kind::Int),
            req("player", "player_id", Kind::Int),
            req("position", "position", Kind::Int),
            opt("score", "score", Kind::Int),
            opt("points", "points", Kind::Int),
            opt("details", "details", Kind::Text),
            opt("create_date", "create_date", Kind::DateTime),
        ],
    },
    ModelSpec {
        label: "register.player",
        table: "players",
        fields: &[
            req("first_name", "first_name", Kind::Text),
            req("last_name", "last_name", Kind::Text),
            req("email", "email", Kind::Text),
            opt("ghin", "ghin", Kind::Text),
            opt("birth_date", "birth_date", Kind::Date),
            opt("phone_number", "phone_number", Kind::Text),
            opt("tee", "tee", Kind::Text),
            opt("is_member", "is_member", Kind::Bool),
            opt("last_season", "last_season", Kind::Int),
            opt("user", "user_id", Kind::Int),
        ],
    },
];

/// A value ready to bind.
#[derive(Debug, Clone, PartialEq)]
enum Bound {
    Null,
    Text(String),
    Int(i64),
    Bool(bool),
}

/// Parse fixture JSON and upsert every object.
///
/// Either every object is stored or, on error, none are.
pub async fn load_fixture(pool: &SqlitePool, json: &str) -> Result<FixtureSummary, FixtureError> {
    let objects: Vec<FixtureObject> = serde_json::from_str(json)?;

    // Validate everything before touching the database
    let mut statements = Vec::with_capacity(objects.len());
    for (index, object) in objects.iter().enumerate() {
        let spec = MODELS
            .iter()
            .find(|m| m.label == object.model.to_ascii_lowercase())
            .ok_or_else(|| FixtureError::UnknownModel {
                index,
                label: object.model.clone(),
            })?;
        let pk = object.pk.ok_or_else(|| FixtureError::MissingPk {
            index,
            model: object.model.clone(),
        })?;
        statements.push((spec, pk, bind_values(spec, pk, &object.fields)?));
    }

    let mut tx = pool.begin().await?;
    sqlx::query("PRAGMA defer_foreign_keys = ON")
        .execute(&mut *tx)
        .await?;

    let mut summary = FixtureSummary::default();
    for (spec, pk, values) in statements {
        let sql = upsert_sql(spec.table, &values);
        let mut query = sqlx::query(&sql).bind(pk);
        for (_, value) in values {
            query = match value {
                Bound::Null => query.bind(None::<String>),
                Bound::Text(s) => query.bind(s),
                Bound::Int(i) => query.bind(i),
                Bound::Bool(b) => query.bind(b),
            };
        }
        query.execute(&mut *tx).await?;
        debug!(model = spec.label, pk, "Loaded fixture object");
        *summary.models.entry(spec.label).or_default() += 1;
    }

    tx.commit().await?;
    info!(objects = summary.total(), "Fixture loaded");
    Ok(summary)
}

/// Read a fixture file and load it.
pub async fn load_fixture_file(
    pool: &SqlitePool,
    path: &Path,
) -> Result<FixtureSummary, FixtureError> {
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| FixtureError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
    load_fixture(pool, &json).await
}

fn upsert_sql(table: &str, values: &[(&'static str, Bound)]) -> String {
    let columns: Vec<&str> = values.iter().map(|(c, _)| *c).collect();
    let placeholders = vec!["?"; columns.len() + 1].join(", ");
    let updates = if columns.is_empty() {
        "DO NOTHING".to_string()
    } else {
        let sets: Vec<String> = columns
            .iter()
            .map(|c| format!("{c} = excluded.{c}"))
            .collect();
        format!("DO UPDATE SET {}", sets.join(", "))
    };

    let mut all_columns = vec!["id"];
    all_columns.extend(columns);
    format!(
        "INSERT INTO {table} ({}) VALUES ({placeholders}) ON CONFLICT(id) {updates}",
        all_columns.join(", ")
    )
}

/// Convert the present fields to bindable values. Absent optional fields
/// are skipped so column defaults apply.
fn bind_values(
    spec: &ModelSpec,
    pk: i64,
    fields: &Map<String, Value>,
) -> Result<Vec<(&'static str, Bound)>, FixtureError> {
    let mut values = Vec::with_capacity(spec.fields.len());
    for field in spec.fields {
        let value = match fields.get(field.name) {
            Some(value) => value,
            None if field.required => {
                return Err(FixtureError::MissingField {
                    model: spec.label,
                    pk,
                    field: field.name,
                });
            }
            None => continue,
        };

        let invalid = |reason: String| FixtureError::InvalidField {
            model: spec.label,
            pk,
            field: field.name,
            reason,
        };

        if value.is_null() {
            if field.required {
                return Err(invalid("null is not allowed".to_string()));
            }
            values.push((field.column, Bound::Null));
            continue;
        }

        values.push((field.column, convert(field.kind, value).map_err(invalid)?));
    }
    Ok(values)
}

fn convert(kind: Kind, value: &Value) -> Result<Bound, String> {
    match kind {
        Kind::Text => value
            .as_str()
            .map(|s| Bound::Text(s.to_string()))
            .ok_or_else(|| format!("expected a string, got {value}")),
        Kind::Int => value
            .as_i64()
            .map(Bound::Int)
            .ok_or_else(|| format!("expected an integer, got {value}")),
        Kind::Bool => value
            .as_bool()
            .map(Bound::Bool)
            .ok_or_else(|| format!("expected a boolean, got {value}")),
        Kind::Choice(valid) => match value.as_str() {
            Some(code) if valid(code) => Ok(Bound::Text(code.to_string())),
            _ => Err(format!("unknown code {value}")),
        },
        Kind::Date => {
            let text = value
                .as_str()
                .ok_or_else(|| format!("expected a date string, got {value}"))?;
            let date = NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|e| e.to_string())?;
            Ok(Bound::Text(date.format("%Y-%m-%d").to_string()))
        }
        Kind::DateTime => {
            let text = value
                .as_str()
                .ok_or_else(|| format!("expected a datetime string, got {value}"))?;
            let parsed = parse_datetime(text).ok_or_else(|| format!("unrecognised datetime '{text}'"))?;
            Ok(Bound::Text(parsed.format("%Y-%m-%d %H:%M:%S").to_string()))
        }
        Kind::Money => {
            let text = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                _ => return Err(format!("expected a decimal, got {value}")),
            };
            let amount: Money = text.parse().map_err(|e: clubhouse_core::MoneyParseError| e.to_string())?;
            Ok(Bound::Int(amount.cents()))
        }
    }
}

/// Accepts RFC 3339 timestamps (converted to UTC) and naive
/// `YYYY-MM-DD[T ]HH:MM:SS[.f]` forms.
fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_utc());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::TestDb;
    use clubhouse_core::{EventRepository, ResultFilter, ResultsRepository};

    const FIXTURE: &str = r#"[
        {"model": "events.tournamentresult", "pk": 1, "fields": {
            "tournament": 1, "player": 5, "position": 1, "score": 70,
            "amount": "120.50", "payout_type": "Credit", "payout_to": "Individual",
            "payout_status": "Paid", "create_date": "2024-06-02T18:30:00Z"}},
        {"model": "events.event", "pk": 10, "fields": {
            "event_type": "W", "name": "Club Championship", "season": 2024,
            "start_date": "2024-06-01", "status": "S", "rounds": 2, "gg_id": null}},
        {"model": "events.round", "pk": 1, "fields": {
            "event": 10, "round_number": 1, "round_date": "2024-06-01", "gg_id": "r1"}},
        {"model": "events.tournament", "pk": 1, "fields": {
            "event": 10, "round": 1, "name": "Gross", "format": "Stroke",
            "is_net": false, "gg_id": "t1"}},
        {"model": "register.player", "pk": 5, "fields": {
            "first_name": "Pat", "last_name": "Green", "email": "pat@example.com",
            "ghin": "5550001", "birth_date": "1980-02-03", "is_member": true}},
        {"model": "events.tournamentpoints", "pk": 1, "fields": {
            "tournament": 1, "player": 5, "position": 1, "score": 70, "points": 25}}
    ]"#;

    #[tokio::test]
    async fn test_load_fixture_out_of_order() {
        let db = TestDb::new().await.unwrap();

        let summary = load_fixture(db.pool(), FIXTURE).await.unwrap();
        assert_eq!(summary.total(), 6);
        assert_eq!(summary.models.get("events.tournamentresult"), Some(&1));

        let event = db.event_repository().get(10).await.unwrap();
        assert_eq!(event.event_type, EventType::WeekendMajor);
        assert_eq!(event.rounds, Some(2));

        let results = db
            .results_repository()
            .list_results(&ResultFilter::all().for_season(2024).for_player(5))
            .await
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].amount, Money::from_cents(12_050));
        assert_eq!(
            results[0].create_date.map(|d| d.to_string()),
            Some("2024-06-02 18:30:00".to_string())
        );

        let points = db
            .results_repository()
            .list_points(&ResultFilter::all())
            .await
            .unwrap();
        assert_eq!(points[0].points, 25);
    }

    #[tokio::test]
    async fn test_reloading_updates_in_place() {
        let db = TestDb::new().await.unwrap();
        load_fixture(db.pool(), FIXTURE).await.unwrap();

        let renamed = FIXTURE.replace("Club Championship", "Club Championship 2024");
        load_fixture(db.pool(), &renamed).await.unwrap();

        let events = db.event_repository().list(None).await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "Club Championship 2024");
    }

    #[tokio::test]
    async fn test_unknown_model_is_rejected() {
        let db = TestDb::new().await.unwrap();
        let json = r#"[{"model": "damcup.scores", "pk": 1, "fields": {}}]"#;

        let err = load_fixture(db.pool(), json).await.unwrap_err();
        assert!(matches!(err, FixtureError::UnknownModel { index: 0, .. }));
    }

    #[tokio::test]
    async fn test_missing_required_field() {
        let db = TestDb::new().await.unwrap();
        let json = r#"[{"model": "events.round", "pk": 1, "fields": {"event": 1}}]"#;

        let err = load_fixture(db.pool(), json).await.unwrap_err();
        assert!(matches!(
            err,
            FixtureError::MissingField {
                field: "round_number",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_dangling_foreign_key_rolls_back() {
        let db = TestDb::new().await.unwrap();
        let json = r#"[
            {"model": "events.event", "pk": 1, "fields": {
                "event_type": "N", "name": "Weeknight", "season": 2024, "start_date": "2024-04-10"}},
            {"model": "events.round", "pk": 1, "fields": {
                "event": 99, "round_number": 1, "round_date": "2024-04-10", "gg_id": "x"}}
        ]"#;

        let err = load_fixture(db.pool(), json).await.unwrap_err();
        assert!(matches!(err, FixtureError::Database(_)));
        assert!(db.event_repository().list(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_event_type_code() {
        let db = TestDb::new().await.unwrap();
        let json = r#"[{"model": "events.event", "pk": 1, "fields": {
            "event_type": "Z", "name": "Bad", "season": 2024, "start_date": "2024-04-10"}}]"#;

        let err = load_fixture(db.pool(), json).await.unwrap_err();
        assert!(matches!(
            err,
            FixtureError::InvalidField {
                field: "event_type",
                ..
            }
        ));
    }

    #[test]
    fn test_parse_datetime_forms() {
        assert!(parse_datetime("2024-06-02T18:30:00Z").is_some());
        assert!(parse_datetime("2024-06-02T18:30:00.123-05:00").is_some());
        assert!(parse_datetime("2024-06-02 18:30:00").is_some());
        assert!(parse_datetime("June 2nd").is_none());
    }
}
