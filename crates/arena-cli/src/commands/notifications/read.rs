use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::notifications::NotificationReadArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ReadResponse {
    id: String,
    read: bool,
}

pub async fn handle(
    args: &NotificationReadArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.session.mark_notification_read(&args.id).await?;
    output(
        &ReadResponse {
            id: args.id.clone(),
            read: true,
        },
        flags.format,
    )
}
