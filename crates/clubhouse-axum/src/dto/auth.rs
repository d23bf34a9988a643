//! Login and profile DTOs.

use chrono::NaiveDate;
use clubhouse_core::{Player, User};
use serde::{Deserialize, Serialize};

/// Login body. Either `email` or `username` identifies the account.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    pub password: String,
}

impl LoginRequest {
    /// The login identifier, preferring a non-blank email.
    pub fn login(&self) -> Option<&str> {
        nonblank(self.email.as_deref()).or_else(|| nonblank(self.username.as_deref()))
    }
}

fn nonblank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub auth_token: String,
}

/// The current user, merged with their player record when one exists.
#[derive(Debug, Serialize)]
pub struct UserProfileDto {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub ghin: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub player_id: Option<i64>,
}

impl UserProfileDto {
    pub fn new(user: User, player: Option<Player>) -> Self {
        let (ghin, birth_date, player_id) = match player {
            Some(p) => (p.ghin, p.birth_date, Some(p.id)),
            None => (None, None, None),
        };
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            is_active: user.is_active,
            is_staff: user.is_staff,
            is_superuser: user.is_superuser,
            ghin,
            birth_date,
            player_id,
        }
    }
}
