//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. Command handlers receive the composed `AppCore`
//! (and the pool, for fixture loading) and delegate work to it.

use std::path::PathBuf;

use anyhow::Result;
use clubhouse_core::paths::database_path;
use clubhouse_core::services::AppCore;
use clubhouse_db::{CoreFactory, SqlitePool, setup_database};
use tracing::debug;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Database file; `None` uses the platform default location.
    pub database_path: Option<PathBuf>,
}

impl CliConfig {
    /// Resolve the database file, falling back to the default location.
    pub fn resolve_database_path(&self) -> Result<PathBuf> {
        match &self.database_path {
            Some(path) => Ok(path.clone()),
            None => Ok(database_path()?),
        }
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The core application facade.
    pub app: AppCore,
    /// Connection pool, used directly by fixture loading.
    pub pool: SqlitePool,
    /// Database file backing the pool.
    pub database_path: PathBuf,
}

impl CliContext {
    /// Access the `AppCore`.
    pub fn app(&self) -> &AppCore {
        &self.app
    }
}

/// Open the database and assemble the CLI context.
pub async fn bootstrap(config: &CliConfig) -> Result<CliContext> {
    let database_path = config.resolve_database_path()?;
    debug!(database_path = %database_path.display(), "CLI bootstrap");

    let pool = setup_database(&database_path).await?;
    let app = CoreFactory::build_app_core(pool.clone());

    Ok(CliContext {
        app,
        pool,
        database_path,
    })
}
