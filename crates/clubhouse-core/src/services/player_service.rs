//! Player service.

use std::sync::Arc;

use crate::domain::{NewPlayer, Player};
use crate::ports::{CoreError, PlayerRepository};

pub struct PlayerService {
    repo: Arc<dyn PlayerRepository>,
}

impl PlayerService {
    pub fn new(repo: Arc<dyn PlayerRepository>) -> Self {
        Self { repo }
    }

    pub async fn get(&self, id: i64) -> Result<Player, CoreError> {
        self.repo.get(id).await.map_err(CoreError::from)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Player>, CoreError> {
        self.repo.find_by_email(email).await.map_err(CoreError::from)
    }

    /// Register a player. Email must look like an address.
    pub async fn add(&self, player: NewPlayer) -> Result<Player, CoreError> {
        if !player.email.contains('@') {
            return Err(CoreError::Validation(format!(
                "Invalid email address: {}",
                player.email
            )));
        }
        self.repo.insert(&player).await.map_err(CoreError::from)
    }
}
