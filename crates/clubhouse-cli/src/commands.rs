//! Subcommands of the `clubhouse` binary.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve(ServeArgs),

    /// Show resolved data and database paths
    Paths,

    /// Manage login accounts
    #[command(subcommand)]
    User(UserCommand),

    /// Manage API tokens
    #[command(subcommand)]
    Token(TokenCommand),

    /// Load a JSON fixture (events, rounds, tournaments, results, points, players)
    Loaddata {
        /// Path to the fixture file
        file: PathBuf,
    },

    /// Print tournament results or points
    Results {
        /// Only rows for this player id
        #[arg(long)]
        player: Option<i64>,
        /// Only rows from events in this season
        #[arg(long)]
        season: Option<i32>,
        /// Show season points instead of payouts
        #[arg(long)]
        points: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Interface to bind
    #[arg(long, env = "CLUBHOUSE_HOST", default_value = "127.0.0.1")]
    pub host: String,
    /// Port to listen on
    #[arg(short, long, env = "CLUBHOUSE_PORT", default_value_t = clubhouse_axum::bootstrap::DEFAULT_PORT)]
    pub port: u16,
    /// Comma-separated list of allowed CORS origins (all origins when unset)
    #[arg(long, env = "CLUBHOUSE_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Vec<String>,
    /// Name of the token cookie
    #[arg(long, env = "CLUBHOUSE_AUTH_COOKIE", default_value = clubhouse_axum::bootstrap::DEFAULT_AUTH_COOKIE)]
    pub auth_cookie: String,
    /// Issue the token cookie with the Secure attribute
    #[arg(long, env = "CLUBHOUSE_SECURE_COOKIES")]
    pub secure_cookies: bool,
}

#[derive(Subcommand)]
pub enum UserCommand {
    /// Create a login account
    Create {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        /// Password (read from CLUBHOUSE_PASSWORD when omitted)
        #[arg(long, env = "CLUBHOUSE_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long, default_value = "")]
        first_name: String,
        #[arg(long, default_value = "")]
        last_name: String,
        /// Grant staff access
        #[arg(long)]
        staff: bool,
    },
}

#[derive(Subcommand)]
pub enum TokenCommand {
    /// Print the API token for a user, creating it if needed
    Create {
        /// Email or username
        login: String,
    },
    /// Revoke an API token
    Delete {
        key: String,
    },
}
