//! Composition utilities for building `AppCore` with `SQLite` backends.
//!
//! This module is focused purely on construction and should not contain
//! any domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use clubhouse_core::Repos;
use clubhouse_core::services::AppCore;

use crate::repositories::{
    SqliteEventRepository, SqlitePlayerRepository, SqliteResultsRepository,
    SqliteTokenRepository, SqliteUserRepository,
};

/// Factory for creating repository instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Build all `SQLite` repositories from a pool.
    ///
    /// This is the recommended way for adapters to obtain repositories.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(
            Arc::new(SqliteEventRepository::new(pool.clone())),
            Arc::new(SqliteResultsRepository::new(pool.clone())),
            Arc::new(SqlitePlayerRepository::new(pool.clone())),
            Arc::new(SqliteUserRepository::new(pool.clone())),
            Arc::new(SqliteTokenRepository::new(pool)),
        )
    }

    /// Build a complete `AppCore` instance from a pool.
    ///
    /// ```ignore
    /// use clubhouse_db::{CoreFactory, setup_database};
    ///
    /// let pool = setup_database(&db_path).await?;
    /// let core = CoreFactory::build_app_core(pool);
    /// ```
    pub fn build_app_core(pool: SqlitePool) -> AppCore {
        AppCore::new(Self::build_repos(pool))
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub use test_db::{SCENARIO_PASSWORD, Scenario, TEST_BCRYPT_COST, TestDb};

#[cfg(any(test, feature = "test-utils"))]
mod test_db {
    use chrono::NaiveDate;
    use sqlx::SqlitePool;

    use clubhouse_core::services::AppCore;
    use clubhouse_core::{
        EventRepository, EventStatus, EventType, Money, NewEvent, NewPlayer, NewRound,
        NewTournament, NewTournamentPoints, NewTournamentResult, NewUser, PlayerRepository,
        ResultsRepository, User, UserRepository, hash_password,
    };

    use super::CoreFactory;
    use crate::repositories::{
        SqliteEventRepository, SqlitePlayerRepository, SqliteResultsRepository,
        SqliteTokenRepository, SqliteUserRepository,
    };
    use crate::setup::setup_test_database;

    /// Lowest cost bcrypt accepts; keeps hashing fast in tests.
    pub const TEST_BCRYPT_COST: u32 = 4;

    /// Password of both users created by [`TestDb::seed_scenario`].
    pub const SCENARIO_PASSWORD: &str = "testpass";

    /// Ids of the rows created by [`TestDb::seed_scenario`].
    #[derive(Debug, Clone, Copy)]
    pub struct Scenario {
        pub user: i64,
        pub user2: i64,
        pub player: i64,
        pub player2: i64,
        pub event_2024: i64,
        pub event_2023: i64,
        pub tournament_2024: i64,
        pub tournament_2023: i64,
    }

    /// Test database helper.
    ///
    /// Provides an in-memory `SQLite` database with the production schema
    /// already applied.
    pub struct TestDb {
        pool: SqlitePool,
    }

    impl TestDb {
        /// Create a new in-memory test database with full schema.
        pub async fn new() -> anyhow::Result<Self> {
            Ok(Self {
                pool: setup_test_database().await?,
            })
        }

        /// Get the underlying pool.
        pub fn pool(&self) -> &SqlitePool {
            &self.pool
        }

        /// Build an `AppCore` over this database with a cheap bcrypt cost.
        pub fn app_core(&self) -> AppCore {
            CoreFactory::build_app_core(self.pool.clone()).with_bcrypt_cost(TEST_BCRYPT_COST)
        }

        pub fn event_repository(&self) -> SqliteEventRepository {
            SqliteEventRepository::new(self.pool.clone())
        }

        pub fn results_repository(&self) -> SqliteResultsRepository {
            SqliteResultsRepository::new(self.pool.clone())
        }

        pub fn player_repository(&self) -> SqlitePlayerRepository {
            SqlitePlayerRepository::new(self.pool.clone())
        }

        pub fn user_repository(&self) -> SqliteUserRepository {
            SqliteUserRepository::new(self.pool.clone())
        }

        pub fn token_repository(&self) -> SqliteTokenRepository {
            SqliteTokenRepository::new(self.pool.clone())
        }

        /// Insert an active user with a bcrypt-hashed password.
        pub async fn create_user(
            &self,
            username: &str,
            email: &str,
            password: &str,
        ) -> anyhow::Result<User> {
            let user = self
                .user_repository()
                .insert(&NewUser {
                    username: username.to_string(),
                    email: email.to_string(),
                    first_name: String::new(),
                    last_name: String::new(),
                    password_hash: hash_password(password, TEST_BCRYPT_COST)?,
                    is_active: true,
                    is_staff: false,
                    is_superuser: false,
                })
                .await?;
            Ok(user)
        }

        /// Seed two players, a 2024 and a 2023 event with one tournament each,
        /// and three results and three points rows:
        ///
        /// | row | tournament | player  | position |
        /// |-----|------------|---------|----------|
        /// | 1   | 2024       | player  | 1        |
        /// | 2   | 2023       | player  | 2        |
        /// | 3   | 2024       | player2 | 3        |
        pub async fn seed_scenario(&self) -> anyhow::Result<Scenario> {
            let user = self
                .create_user("testplayer", "test@example.com", SCENARIO_PASSWORD)
                .await?;
            let user2 = self
                .create_user("testplayer2", "test2@example.com", SCENARIO_PASSWORD)
                .await?;

            let players = self.player_repository();
            let mut new_player = NewPlayer::new("Test", "Player", "test@example.com");
            new_player.birth_date = NaiveDate::from_ymd_opt(1990, 1, 1);
            new_player.ghin = Some("1234567".to_string());
            let player = players.insert(&new_player).await?;

            let mut new_player2 = NewPlayer::new("Test2", "Player2", "test2@example.com");
            new_player2.birth_date = NaiveDate::from_ymd_opt(1991, 1, 1);
            new_player2.ghin = Some("7654321".to_string());
            let player2 = players.insert(&new_player2).await?;

            let tournament_2024 = self.seed_tournament(2024).await?;
            let tournament_2023 = self.seed_tournament(2023).await?;

            let results = self.results_repository();
            let rows = [
                (tournament_2024, player.id, 1, 72, 10_000, 10),
                (tournament_2023, player.id, 2, 75, 5_000, 8),
                (tournament_2024, player2.id, 3, 76, 2_500, 6),
            ];
            for (tournament_id, player_id, position, score, cents, _) in rows {
                results
                    .insert_result(&NewTournamentResult {
                        tournament_id,
                        player_id,
                        position,
                        score: Some(score),
                        amount: Money::from_cents(cents),
                        payout_type: Some("Cash".to_string()),
                        payout_to: Some("Individual".to_string()),
                        payout_status: Some("Pending".to_string()),
                        ..Default::default()
                    })
                    .await?;
            }
            for (tournament_id, player_id, position, score, _, points) in rows {
                results
                    .insert_points(&NewTournamentPoints {
                        tournament_id,
                        player_id,
                        position,
                        score: Some(score),
                        points,
                        details: None,
                    })
                    .await?;
            }

            let events = self.event_repository();
            let event_2024 = events.get_tournament(tournament_2024).await?.event_id;
            let event_2023 = events.get_tournament(tournament_2023).await?.event_id;

            Ok(Scenario {
                user: user.id,
                user2: user2.id,
                player: player.id,
                player2: player2.id,
                event_2024,
                event_2023,
                tournament_2024,
                tournament_2023,
            })
        }

        /// One event, round and stroke tournament for a season.
        async fn seed_tournament(&self, season: i32) -> anyhow::Result<i64> {
            let events = self.event_repository();
            let start_date = NaiveDate::from_ymd_opt(season, 5, 1)
                .ok_or_else(|| anyhow::anyhow!("invalid season {season}"))?;

            let event = events
                .insert(&NewEvent {
                    event_type: EventType::Weeknight,
                    name: format!("Test Event {season}"),
                    season,
                    start_date,
                    status: EventStatus::Scheduled,
                    rounds: Some(1),
                    gg_id: None,
                })
                .await?;
            let round = events
                .insert_round(&NewRound {
                    event_id: event.id,
                    round_number: 1,
                    round_date: start_date,
                    gg_id: format!("round{season}"),
                })
                .await?;
            let tournament = events
                .insert_tournament(&NewTournament {
                    event_id: event.id,
                    round_id: round.id,
                    name: format!("Test Tournament {season}"),
                    format: Some("Stroke".to_string()),
                    is_net: false,
                    gg_id: format!("tournament{season}"),
                })
                .await?;
            Ok(tournament.id)
        }
    }
}
