//! Token authentication service.
//!
//! Resolves opaque token keys to users, issues tokens on password login and
//! revokes them on logout. Passwords are hashed with bcrypt; the hash never
//! leaves this module and the user repository.

use std::sync::Arc;

use bcrypt::DEFAULT_COST;
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::{AuthToken, NewUser, Player, User, key_prefix};
use crate::ports::{CoreError, PlayerRepository, RepositoryError, TokenRepository, UserRepository};

/// Authentication failures.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown login, wrong password, or inactive account.
    #[error("Unable to log in with provided credentials.")]
    InvalidCredentials,

    /// Password hashing or verification failed.
    #[error("Password hashing failed: {0}")]
    Hashing(String),
}

/// Input for creating a login account.
#[derive(Debug, Clone)]
pub struct NewUserRequest {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub is_staff: bool,
}

/// Hash a password with the given bcrypt cost.
pub fn hash_password(password: &str, cost: u32) -> Result<String, AuthError> {
    bcrypt::hash(password, cost).map_err(|e| AuthError::Hashing(e.to_string()))
}

/// Service for token authentication.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    tokens: Arc<dyn TokenRepository>,
    players: Arc<dyn PlayerRepository>,
    bcrypt_cost: u32,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        tokens: Arc<dyn TokenRepository>,
        players: Arc<dyn PlayerRepository>,
    ) -> Self {
        Self {
            users,
            tokens,
            players,
            bcrypt_cost: DEFAULT_COST,
        }
    }

    /// Override the bcrypt cost used for new password hashes.
    #[must_use]
    pub const fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    /// Resolve a token key to its user.
    ///
    /// Returns `Ok(None)` for an empty key, an unknown key, or a key that
    /// belongs to an inactive user. Only storage failures are errors.
    pub async fn authenticate(&self, key: &str) -> Result<Option<User>, CoreError> {
        if key.is_empty() {
            return Ok(None);
        }

        let Some(token) = self.tokens.find(key).await? else {
            debug!(token = key_prefix(key), "Unknown token");
            return Ok(None);
        };

        let user = match self.users.get(token.user_id).await {
            Ok(user) => user,
            Err(RepositoryError::NotFound(_)) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if !user.is_active {
            debug!(user_id = user.id, "Token belongs to inactive user");
            return Ok(None);
        }

        Ok(Some(user))
    }

    /// Verify a password login and return the user's token.
    ///
    /// `login` may be an email address or a username. Repeated logins return
    /// the same token until it is revoked.
    pub async fn login(&self, login: &str, password: &str) -> Result<AuthToken, CoreError> {
        let Some(credentials) = self.users.find_by_login(login).await? else {
            info!(login, "Login failed: unknown account");
            return Err(AuthError::InvalidCredentials.into());
        };

        let valid = bcrypt::verify(password, &credentials.password_hash).unwrap_or_else(|e| {
            warn!(user_id = credentials.user.id, error = %e, "Stored password hash is unreadable");
            false
        });
        if !valid || !credentials.user.is_active {
            info!(user_id = credentials.user.id, "Login failed");
            return Err(AuthError::InvalidCredentials.into());
        }

        let candidate = Uuid::new_v4().simple().to_string();
        let token = self
            .tokens
            .get_or_create(credentials.user.id, &candidate)
            .await?;

        info!(
            user_id = token.user_id,
            token = token.log_prefix(),
            "User logged in"
        );
        Ok(token)
    }

    /// Revoke a token. Revoking an unknown token is not an error.
    pub async fn logout(&self, key: &str) -> Result<(), CoreError> {
        let removed = self.tokens.delete(key).await?;
        if removed {
            info!(token = key_prefix(key), "Token revoked");
        } else {
            warn!(token = key_prefix(key), "Logout for unknown token");
        }
        Ok(())
    }

    /// Issue (or return) a token for a user without a password check.
    ///
    /// Used by administrative tooling.
    pub async fn issue_token(&self, login: &str) -> Result<AuthToken, CoreError> {
        let credentials = self
            .users
            .find_by_login(login)
            .await?
            .ok_or_else(|| RepositoryError::NotFound(format!("user '{login}'")))?;
        let candidate = Uuid::new_v4().simple().to_string();
        self.tokens
            .get_or_create(credentials.user.id, &candidate)
            .await
            .map_err(CoreError::from)
    }

    /// Create an active login account with a hashed password.
    pub async fn create_user(&self, request: NewUserRequest) -> Result<User, CoreError> {
        if request.username.trim().is_empty() {
            return Err(CoreError::Validation("Username cannot be empty".to_string()));
        }
        if !request.email.contains('@') {
            return Err(CoreError::Validation(format!(
                "Invalid email address: {}",
                request.email
            )));
        }
        if request.password.len() < 8 {
            return Err(CoreError::Validation(
                "Password must be at least 8 characters".to_string(),
            ));
        }

        let password_hash = hash_password(&request.password, self.bcrypt_cost)?;
        let user = self
            .users
            .insert(&NewUser {
                username: request.username,
                email: request.email,
                first_name: request.first_name,
                last_name: request.last_name,
                password_hash,
                is_active: true,
                is_staff: request.is_staff,
                is_superuser: false,
            })
            .await?;

        info!(user_id = user.id, username = %user.username, "Created user");
        Ok(user)
    }

    /// The player record linked to a user by email, if any.
    pub async fn current_player(&self, user: &User) -> Result<Option<Player>, CoreError> {
        self.players
            .find_by_email(&user.email)
            .await
            .map_err(CoreError::from)
    }
}
