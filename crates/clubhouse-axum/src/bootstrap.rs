//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clubhouse_core::paths::{data_root, database_path};
use clubhouse_core::services::AppCore;
use clubhouse_db::{CoreFactory, setup_database};
use tracing::info;

/// Default cookie carrying the API token for browser clients.
pub const DEFAULT_AUTH_COOKIE: &str = "access_token";

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8000;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Settings for the token cookie.
#[derive(Debug, Clone)]
pub struct AuthCookieConfig {
    /// Cookie name read by the middleware and set on login.
    pub name: String,
    /// Mark the cookie `Secure` when issuing it.
    pub secure: bool,
}

impl Default for AuthCookieConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_AUTH_COOKIE.to_string(),
            secure: false,
        }
    }
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// Database file; `None` uses the platform default location.
    pub database_path: Option<PathBuf>,
    /// CORS configuration.
    pub cors: CorsConfig,
    /// Name of the token cookie.
    pub auth_cookie_name: String,
    /// Issue the token cookie with the `Secure` attribute.
    pub secure_cookies: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            database_path: None,
            cors: CorsConfig::default(),
            auth_cookie_name: DEFAULT_AUTH_COOKIE.to_string(),
            secure_cookies: false,
        }
    }
}

impl ServerConfig {
    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    /// Use a specific database file.
    #[must_use]
    pub fn with_database_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.database_path = Some(path.into());
        self
    }

    pub fn auth_cookie(&self) -> AuthCookieConfig {
        AuthCookieConfig {
            name: self.auth_cookie_name.clone(),
            secure: self.secure_cookies,
        }
    }

    /// Socket address to bind.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid listen address {}:{}", self.host, self.port))
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// The core application facade.
    pub core: Arc<AppCore>,
    /// Token cookie settings.
    pub auth_cookie: AuthCookieConfig,
}

impl AxumContext {
    pub fn new(core: Arc<AppCore>, auth_cookie: AuthCookieConfig) -> Self {
        Self { core, auth_cookie }
    }
}

/// Bootstrap the Axum server: open the database and assemble `AppCore`.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    let db_path = match &config.database_path {
        Some(path) => path.clone(),
        None => {
            info!(
                target: "clubhouse.paths",
                data_root = %data_root()?.display(),
                "Using default data directory"
            );
            database_path()?
        }
    };
    info!(
        target: "clubhouse.paths",
        database_path = %db_path.display(),
        "Axum bootstrap resolved paths"
    );

    let pool = setup_database(&db_path).await?;
    let core = Arc::new(CoreFactory::build_app_core(pool));

    Ok(AxumContext::new(core, config.auth_cookie()))
}

/// Start the web server and serve until the process is stopped.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;

    let ctx = bootstrap(&config).await?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(
        cookie = %config.auth_cookie_name,
        "clubhouse API listening on http://{}",
        addr
    );

    axum::serve(listener, app).await?;
    Ok(())
}
