use arena_session::Notification;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::notifications::NotificationListArgs;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ListResponse {
    notifications: Vec<Notification>,
    unread: usize,
    count: usize,
}

pub async fn handle(
    args: &NotificationListArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut notifications = ctx.session.notifications(args.unread).await?;
    if args.unread {
        // Older backends ignore the query parameter.
        notifications.retain(|note| !note.read);
    }
    notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    notifications.truncate(effective_limit(
        args.limit,
        flags.limit,
        ctx.config.general.default_limit,
    ));

    output(
        &ListResponse {
            unread: notifications.iter().filter(|note| !note.read).count(),
            count: notifications.len(),
            notifications,
        },
        flags.format,
    )
}
