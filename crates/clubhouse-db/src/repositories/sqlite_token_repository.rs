//! `SQLite` token store.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use clubhouse_core::{AuthToken, RepositoryError, TokenRepository};

use super::row_mappers::map_sqlx_error;

pub struct SqliteTokenRepository {
    pool: SqlitePool,
}

impl SqliteTokenRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn find_for_user(&self, user_id: i64) -> Result<Option<AuthToken>, RepositoryError> {
        let row = sqlx::query("SELECT key, user_id, created FROM auth_tokens WHERE user_id = ?")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.as_ref().map(row_to_token).transpose()
    }
}

fn row_to_token(row: &sqlx::sqlite::SqliteRow) -> Result<AuthToken, RepositoryError> {
    Ok(AuthToken {
        key: row
            .try_get("key")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        user_id: row
            .try_get("user_id")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        created: row
            .try_get("created")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
    })
}

#[async_trait]
impl TokenRepository for SqliteTokenRepository {
    async fn find(&self, key: &str) -> Result<Option<AuthToken>, RepositoryError> {
        let row = sqlx::query("SELECT key, user_id, created FROM auth_tokens WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.as_ref().map(row_to_token).transpose()
    }

    async fn get_or_create(
        &self,
        user_id: i64,
        candidate_key: &str,
    ) -> Result<AuthToken, RepositoryError> {
        // user_id is UNIQUE, so a concurrent login loses the insert and
        // reads the winner's key below.
        sqlx::query("INSERT INTO auth_tokens (key, user_id) VALUES (?, ?) ON CONFLICT(user_id) DO NOTHING")
            .bind(candidate_key)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        self.find_for_user(user_id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound(format!("Token for user {user_id}")))
    }

    async fn delete(&self, key: &str) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM auth_tokens WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::TestDb;

    #[tokio::test]
    async fn test_get_or_create_is_stable_per_user() {
        let db = TestDb::new().await.unwrap();
        let user = db.create_user("token-user", "token@example.com", "secret-pass").await.unwrap();
        let repo = db.token_repository();

        let first = repo.get_or_create(user.id, "first-key").await.unwrap();
        let second = repo.get_or_create(user.id, "second-key").await.unwrap();

        assert_eq!(first.key, "first-key");
        assert_eq!(second.key, "first-key");
        assert_eq!(repo.find("first-key").await.unwrap(), Some(first));
        assert!(repo.find("second-key").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_token() {
        let db = TestDb::new().await.unwrap();
        let user = db.create_user("token-user", "token@example.com", "secret-pass").await.unwrap();
        let repo = db.token_repository();

        repo.get_or_create(user.id, "doomed").await.unwrap();
        assert!(repo.delete("doomed").await.unwrap());
        assert!(!repo.delete("doomed").await.unwrap());
        assert!(repo.find("doomed").await.unwrap().is_none());

        let fresh = repo.get_or_create(user.id, "replacement").await.unwrap();
        assert_eq!(fresh.key, "replacement");
    }

    #[tokio::test]
    async fn test_token_for_unknown_user_violates_constraint() {
        let db = TestDb::new().await.unwrap();
        let repo = db.token_repository();

        let result = repo.get_or_create(404, "orphan").await;
        assert!(matches!(result, Err(RepositoryError::Constraint(_))));
    }
}
