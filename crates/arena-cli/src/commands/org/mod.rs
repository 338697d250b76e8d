mod members;
mod remove;
mod set_role;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::OrgCommands;
use crate::context::AppContext;

/// Handle `arena org <subcommand>`.
pub async fn handle(action: &OrgCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    // Guarded operations read the session snapshot, so settle it first.
    ctx.require_user().await?;
    match action {
        OrgCommands::Members(args) => members::handle(args, ctx, flags).await,
        OrgCommands::SetRole(args) => set_role::handle(args, ctx, flags).await,
        OrgCommands::Remove(args) => remove::handle(args, ctx, flags).await,
    }
}
