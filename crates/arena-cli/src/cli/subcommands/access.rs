use std::path::PathBuf;

use arena_access::Action;
use arena_core::Scope;
use clap::{Args, Subcommand};

/// Access evaluation commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AccessCommands {
    /// Evaluate an ad-hoc access check.
    Check(AccessCheckArgs),
    /// Evaluate a named action.
    Can(AccessCanArgs),
    /// List the named actions and the roles they accept.
    Actions,
}

#[derive(Clone, Debug, Args)]
pub struct AccessCheckArgs {
    /// Scope the check applies to: platform, org or team.
    #[arg(long)]
    pub scope: Scope,
    /// Role that satisfies the check (repeatable).
    #[arg(long = "role", value_name = "ROLE")]
    pub roles: Vec<String>,
    /// Org or team id; defaults to the user's primary org/team.
    #[arg(long)]
    pub scope_id: Option<String>,
    /// Evaluate against a user profile JSON file instead of the session.
    #[arg(long)]
    pub user_file: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct AccessCanArgs {
    pub action: Action,
    /// Org or team id; defaults to the user's primary org/team.
    #[arg(long)]
    pub scope_id: Option<String>,
    /// Evaluate against a user profile JSON file instead of the session.
    #[arg(long)]
    pub user_file: Option<PathBuf>,
}
