//! API token commands.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::commands::TokenCommand;

pub async fn execute(ctx: &CliContext, command: TokenCommand) -> Result<()> {
    match command {
        TokenCommand::Create { login } => {
            let token = ctx.app().auth().issue_token(&login).await?;
            println!("{}", token.key);
        }
        TokenCommand::Delete { key } => {
            ctx.app().auth().logout(&key).await?;
            println!("Token revoked");
        }
    }
    Ok(())
}
