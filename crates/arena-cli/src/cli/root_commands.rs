use clap::{Args, Subcommand, ValueEnum};

use crate::cli::subcommands::{
    AccessCommands, AuthCommands, NotificationCommands, OrgCommands, TournamentCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Session login, registration and status.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Evaluate access checks and named actions.
    Access {
        #[command(subcommand)]
        action: AccessCommands,
    },
    /// Organization membership administration.
    Org {
        #[command(subcommand)]
        action: OrgCommands,
    },
    /// Tournaments.
    Tournament {
        #[command(subcommand)]
        action: TournamentCommands,
    },
    /// Notifications for the signed-in user.
    Notifications {
        #[command(subcommand)]
        action: NotificationCommands,
    },
    /// Print the JSON schema of a wire type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    pub type_name: SchemaType,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    User,
    RoleAssignment,
    AccessCheck,
}
