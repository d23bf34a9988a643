//! Serve command handler.

use anyhow::Result;
use clubhouse_axum::bootstrap::{CorsConfig, ServerConfig, start_server};
use tracing::info;

use crate::bootstrap::CliConfig;
use crate::commands::ServeArgs;

/// Build the server configuration from command-line arguments.
pub fn server_config(config: &CliConfig, args: ServeArgs) -> ServerConfig {
    let origins: Vec<String> = args
        .cors_origins
        .into_iter()
        .map(|o| o.trim().to_string())
        .filter(|o| !o.is_empty())
        .collect();

    ServerConfig {
        host: args.host,
        port: args.port,
        database_path: config.database_path.clone(),
        cors: if origins.is_empty() {
            CorsConfig::AllowAll
        } else {
            CorsConfig::AllowOrigins(origins)
        },
        auth_cookie_name: args.auth_cookie,
        secure_cookies: args.secure_cookies,
    }
}

/// Run the HTTP server until interrupted.
pub async fn execute(config: &CliConfig, args: ServeArgs) -> Result<()> {
    let server = server_config(config, args);
    info!(host = %server.host, port = server.port, "Starting clubhouse server");
    start_server(server).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(origins: &[&str]) -> ServeArgs {
        ServeArgs {
            host: "0.0.0.0".into(),
            port: 8100,
            cors_origins: origins.iter().map(ToString::to_string).collect(),
            auth_cookie: "access_token".into(),
            secure_cookies: true,
        }
    }

    #[test]
    fn test_no_origins_allows_all() {
        let server = server_config(&CliConfig::default(), args(&[" "]));
        assert!(matches!(server.cors, CorsConfig::AllowAll));
        assert!(server.secure_cookies);
        assert_eq!(server.port, 8100);
    }

    #[test]
    fn test_origins_are_restricted() {
        let server = server_config(&CliConfig::default(), args(&["https://bhmc.example"]));
        match server.cors {
            CorsConfig::AllowOrigins(origins) => assert_eq!(origins, vec!["https://bhmc.example"]),
            CorsConfig::AllowAll => panic!("expected restricted origins"),
        }
    }
}
