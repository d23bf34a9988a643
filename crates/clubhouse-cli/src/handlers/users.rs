//! User account commands.

use anyhow::Result;
use clubhouse_core::NewUserRequest;

use crate::bootstrap::CliContext;
use crate::commands::UserCommand;

pub async fn execute(ctx: &CliContext, command: UserCommand) -> Result<()> {
    match command {
        UserCommand::Create {
            username,
            email,
            password,
            first_name,
            last_name,
            staff,
        } => {
            let user = ctx
                .app()
                .auth()
                .create_user(NewUserRequest {
                    username,
                    email,
                    first_name,
                    last_name,
                    password,
                    is_staff: staff,
                })
                .await?;
            println!("Created user {} <{}> (id {})", user.username, user.email, user.id);
        }
    }
    Ok(())
}
