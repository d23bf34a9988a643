//! CLI entry point.
//!
//! Initialises logging and `.env` loading, then dispatches to handlers.
//! Commands that touch the database go through `bootstrap`.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use clubhouse_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads its env fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = CliConfig {
        database_path: cli.database,
    };

    let Some(command) = cli.command else {
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    let result = match command {
        Commands::Serve(args) => handlers::serve::execute(&config, args).await,
        Commands::Paths => handlers::paths::execute(&config),
        command => run_with_database(&config, command).await,
    };

    if let Err(err) = result {
        let err = CliError::from_anyhow(err);
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }
    Ok(())
}

async fn run_with_database(config: &CliConfig, command: Commands) -> anyhow::Result<()> {
    let ctx = bootstrap(config).await?;

    match command {
        Commands::User(cmd) => handlers::users::execute(&ctx, cmd).await,
        Commands::Token(cmd) => handlers::tokens::execute(&ctx, cmd).await,
        Commands::Loaddata { file } => handlers::loaddata::execute(&ctx, &file).await,
        Commands::Results {
            player,
            season,
            points,
        } => handlers::results::execute(&ctx, player, season, points).await,
        Commands::Serve(_) | Commands::Paths => Ok(()),
    }
}
