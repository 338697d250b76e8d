mod actions;
mod can;
mod check;

use arena_core::User;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AccessCommands;
use crate::commands::shared::user_file::read_user;
use crate::context::AppContext;

/// Handle `arena access <subcommand>`.
pub async fn handle(
    action: &AccessCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AccessCommands::Check(args) => check::handle(args, ctx, flags).await,
        AccessCommands::Can(args) => can::handle(args, ctx, flags).await,
        AccessCommands::Actions => actions::handle(flags),
    }
}

/// The user to evaluate: from `--user-file` when given (no network), else
/// the current session, which may be signed out.
async fn subject(
    user_file: Option<&std::path::Path>,
    ctx: &AppContext,
) -> anyhow::Result<Option<User>> {
    match user_file {
        Some(path) => read_user(path).map(Some),
        None => ctx.current_user().await,
    }
}
