mod create;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TournamentCommands;
use crate::context::AppContext;

/// Handle `arena tournament <subcommand>`.
pub async fn handle(
    action: &TournamentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_user().await?;
    match action {
        TournamentCommands::Create(args) => create::handle(args, ctx, flags).await,
    }
}
