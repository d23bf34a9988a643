//! Token store port.
//!
//! Each user owns at most one token. Keys are opaque strings.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::AuthToken;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Find a token by key.
    async fn find(&self, key: &str) -> Result<Option<AuthToken>, RepositoryError>;

    /// Return the user's existing token, or store `candidate_key` as a new one.
    async fn get_or_create(
        &self,
        user_id: i64,
        candidate_key: &str,
    ) -> Result<AuthToken, RepositoryError>;

    /// Delete a token. Returns whether a token was removed.
    async fn delete(&self, key: &str) -> Result<bool, RepositoryError>;
}
