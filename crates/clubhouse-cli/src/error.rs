//! CLI-specific error types and mappings.
//!
//! Maps `CoreError` to exit codes and user-facing messages.

use clubhouse_core::{CoreError, RepositoryError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Core domain error.
    #[error("{0}")]
    Core(String),

    /// Invalid arguments or input data.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Record not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where one fits.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Core(_) => 1,
            Self::Arguments(_) => 64, // EX_USAGE
            Self::NotFound(_) => 66,  // EX_NOINPUT
            Self::Io(_) => 74,        // EX_IOERR
            Self::Database(_) => 73,  // EX_CANTCREAT
        }
    }
}

impl CliError {
    /// Classify an error bubbled up through `anyhow` from a handler.
    pub fn from_anyhow(err: anyhow::Error) -> Self {
        let err = match err.downcast::<CoreError>() {
            Ok(core) => return core.into(),
            Err(err) => err,
        };
        let err = match err.downcast::<clubhouse_db::FixtureError>() {
            Ok(fixture) => return fixture.into(),
            Err(err) => err,
        };
        Self::Core(format!("{err:#}"))
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(RepositoryError::NotFound(msg)) => Self::NotFound(msg),
            CoreError::Repository(repo_err) => Self::Database(repo_err.to_string()),
            CoreError::Authentication(auth_err) => Self::Arguments(auth_err.to_string()),
            CoreError::Validation(msg) => Self::Arguments(msg),
            CoreError::Internal(msg) => Self::Core(msg),
        }
    }
}

impl From<clubhouse_db::FixtureError> for CliError {
    fn from(err: clubhouse_db::FixtureError) -> Self {
        match err {
            clubhouse_db::FixtureError::Io { .. } => Self::Io(err.to_string()),
            clubhouse_db::FixtureError::Database(msg) => Self::Database(msg),
            other => Self::Arguments(other.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clubhouse_core::AuthError;

    #[test]
    fn test_exit_codes() {
        let not_found: CliError =
            CoreError::Repository(RepositoryError::NotFound("user".into())).into();
        assert_eq!(not_found.exit_code(), 66);

        let bad_login: CliError = CoreError::Authentication(AuthError::InvalidCredentials).into();
        assert_eq!(bad_login.exit_code(), 64);

        let storage: CliError = CoreError::Repository(RepositoryError::Storage("locked".into())).into();
        assert_eq!(storage.exit_code(), 73);
    }

    #[test]
    fn test_from_anyhow_keeps_core_classification() {
        let err = anyhow::Error::new(CoreError::Validation("position must be >= 1".into()));
        assert!(matches!(CliError::from_anyhow(err), CliError::Arguments(_)));

        let other = anyhow::anyhow!("socket closed");
        assert_eq!(CliError::from_anyhow(other).exit_code(), 1);
    }
}
