//! `SQLite` implementation of the `UserRepository` trait.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use clubhouse_core::{NewUser, RepositoryError, User, UserCredentials, UserRepository};

use super::row_mappers::{USER_SELECT_COLUMNS, map_sqlx_error, row_to_user};

pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn get(&self, id: i64) -> Result<User, RepositoryError> {
        let query = format!("SELECT {USER_SELECT_COLUMNS} FROM users WHERE id = ?");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or_else(|| RepositoryError::NotFound(format!("User with ID {id}")))?;

        row_to_user(&row)
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<UserCredentials>, RepositoryError> {
        let login = login.trim();
        if login.is_empty() {
            return Ok(None);
        }

        let query = format!(
            "SELECT {USER_SELECT_COLUMNS}, password_hash FROM users \
             WHERE email = ? OR username = ? \
             ORDER BY id LIMIT 1"
        );

        let row = sqlx::query(&query)
            .bind(login)
            .bind(login)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(Some(UserCredentials {
            user: row_to_user(&row)?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        }))
    }

    async fn insert(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO users \
             (username, email, first_name, last_name, password_hash, is_active, is_staff, is_superuser) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(user.username.trim())
        .bind(user.email.trim())
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.password_hash)
        .bind(user.is_active)
        .bind(user.is_staff)
        .bind(user.is_superuser)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        self.get(result.last_insert_rowid()).await
    }
}
