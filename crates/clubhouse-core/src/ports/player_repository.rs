//! Player repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewPlayer, Player};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Returns `Err(RepositoryError::NotFound)` if the player doesn't exist.
    async fn get(&self, id: i64) -> Result<Player, RepositoryError>;

    /// Case-insensitive lookup by email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<Player>, RepositoryError>;

    /// Email and GHIN are unique; duplicates yield `AlreadyExists`.
    async fn insert(&self, player: &NewPlayer) -> Result<Player, RepositoryError>;
}
