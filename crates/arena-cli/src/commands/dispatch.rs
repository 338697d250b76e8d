use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Auth { action } => commands::auth::handle(&action, ctx, flags).await,
        Commands::Access { action } => commands::access::handle(&action, ctx, flags).await,
        Commands::Org { action } => commands::org::handle(&action, ctx, flags).await,
        Commands::Tournament { action } => commands::tournament::handle(&action, ctx, flags).await,
        Commands::Notifications { action } => {
            commands::notifications::handle(&action, ctx, flags).await
        }
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
