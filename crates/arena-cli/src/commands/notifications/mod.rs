mod list;
mod read;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::NotificationCommands;
use crate::context::AppContext;

/// Handle `arena notifications <subcommand>`.
pub async fn handle(
    action: &NotificationCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_user().await?;
    match action {
        NotificationCommands::List(args) => list::handle(args, ctx, flags).await,
        NotificationCommands::Read(args) => read::handle(args, ctx, flags).await,
    }
}
