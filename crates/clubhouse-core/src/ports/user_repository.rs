//! User account repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewUser, User, UserCredentials};

/// Repository for login accounts.
///
/// Password hashes only cross this boundary inside [`UserCredentials`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get(&self, id: i64) -> Result<User, RepositoryError>;

    /// Look up a user by email (case-insensitive) or username.
    async fn find_by_login(&self, login: &str) -> Result<Option<UserCredentials>, RepositoryError>;

    /// Username and email are unique; duplicates yield `AlreadyExists`.
    async fn insert(&self, user: &NewUser) -> Result<User, RepositoryError>;
}
