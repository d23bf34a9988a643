//! `SQLite` implementation of the `PlayerRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use clubhouse_core::{NewPlayer, Player, PlayerRepository, RepositoryError};

use super::row_mappers::{PLAYER_SELECT_COLUMNS, map_sqlx_error, row_to_player};

pub struct SqlitePlayerRepository {
    pool: SqlitePool,
}

impl SqlitePlayerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlayerRepository for SqlitePlayerRepository {
    async fn get(&self, id: i64) -> Result<Player, RepositoryError> {
        let query = format!("SELECT {PLAYER_SELECT_COLUMNS} FROM players WHERE id = ?");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or_else(|| RepositoryError::NotFound(format!("Player with ID {id}")))?;

        row_to_player(&row)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Player>, RepositoryError> {
        // email is declared COLLATE NOCASE
        let query = format!("SELECT {PLAYER_SELECT_COLUMNS} FROM players WHERE email = ?");

        let row = sqlx::query(&query)
            .bind(email.trim())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.as_ref().map(row_to_player).transpose()
    }

    async fn insert(&self, player: &NewPlayer) -> Result<Player, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO players \
             (first_name, last_name, email, ghin, birth_date, phone_number, tee, is_member, last_season, user_id) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&player.first_name)
        .bind(&player.last_name)
        .bind(player.email.trim())
        .bind(&player.ghin)
        .bind(player.birth_date)
        .bind(&player.phone_number)
        .bind(&player.tee)
        .bind(player.is_member)
        .bind(player.last_season)
        .bind(player.user_id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        self.get(result.last_insert_rowid()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;

    #[tokio::test]
    async fn test_insert_and_find_by_email() {
        let repo = SqlitePlayerRepository::new(setup_test_database().await.unwrap());

        let mut new = NewPlayer::new("Test", "Player", "test@example.com");
        new.ghin = Some("1234567".to_string());
        let player = repo.insert(&new).await.unwrap();

        assert_eq!(player.tee, "Club");
        assert!(!player.is_member);

        let found = repo.find_by_email("TEST@example.com").await.unwrap();
        assert_eq!(found, Some(player));
        assert!(repo.find_by_email("other@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_ghin_conflicts() {
        let repo = SqlitePlayerRepository::new(setup_test_database().await.unwrap());

        let mut first = NewPlayer::new("A", "One", "a@example.com");
        first.ghin = Some("1111111".to_string());
        repo.insert(&first).await.unwrap();

        let mut second = NewPlayer::new("B", "Two", "b@example.com");
        second.ghin = Some("1111111".to_string());
        let result = repo.insert(&second).await;

        assert!(matches!(result, Err(RepositoryError::AlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_players_without_ghin_do_not_conflict() {
        let repo = SqlitePlayerRepository::new(setup_test_database().await.unwrap());

        repo.insert(&NewPlayer::new("A", "One", "a@example.com"))
            .await
            .unwrap();
        repo.insert(&NewPlayer::new("B", "Two", "b@example.com"))
            .await
            .unwrap();
    }
}
