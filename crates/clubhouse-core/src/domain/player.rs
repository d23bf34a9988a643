//! Club member (player) and login account types.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A golfer known to the club, member or guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub ghin: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub phone_number: Option<String>,
    pub tee: String,
    pub is_member: bool,
    pub last_season: Option<i32>,
    pub user_id: Option<i64>,
}

impl Player {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Data for creating a new player.
#[derive(Debug, Clone)]
pub struct NewPlayer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub ghin: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub phone_number: Option<String>,
    pub tee: String,
    pub is_member: bool,
    pub last_season: Option<i32>,
    pub user_id: Option<i64>,
}

impl NewPlayer {
    /// Minimal player with the default tee and no membership.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            ghin: None,
            birth_date: None,
            phone_number: None,
            tee: "Club".to_string(),
            is_member: false,
            last_season: None,
            user_id: None,
        }
    }
}

/// A login account.
///
/// The password hash is deliberately not part of this type; it only
/// travels inside [`UserCredentials`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub date_joined: NaiveDateTime,
}

/// A user together with its stored password hash.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

/// Data for persisting a new user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
}

/// Opaque per-user API token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    pub key: String,
    pub user_id: i64,
    pub created: NaiveDateTime,
}

impl AuthToken {
    /// Short prefix that is safe to put in logs.
    #[must_use]
    pub fn log_prefix(&self) -> &str {
        key_prefix(&self.key)
    }
}

/// First eight characters of a token key, for log output.
#[must_use]
pub fn key_prefix(key: &str) -> &str {
    match key.char_indices().nth(8) {
        Some((end, _)) => &key[..end],
        None => key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_prefix() {
        assert_eq!(key_prefix("0123456789abcdef"), "01234567");
        assert_eq!(key_prefix("short"), "short");
        assert_eq!(key_prefix("ééééééééé"), "éééééééé");
    }
}
