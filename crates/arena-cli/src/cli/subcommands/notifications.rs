use clap::{Args, Subcommand};

/// Notification commands.
#[derive(Clone, Debug, Subcommand)]
pub enum NotificationCommands {
    /// List notifications.
    List(NotificationListArgs),
    /// Mark a notification as read.
    Read(NotificationReadArgs),
}

#[derive(Clone, Debug, Args)]
pub struct NotificationListArgs {
    /// Only unread notifications.
    #[arg(long)]
    pub unread: bool,
    /// Max notifications to show (overrides --limit).
    #[arg(long = "max")]
    pub limit: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct NotificationReadArgs {
    pub id: String,
}
