use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};

/// Tournament commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TournamentCommands {
    /// Create a tournament for an organization.
    Create(TournamentCreateArgs),
}

#[derive(Clone, Debug, Args)]
pub struct TournamentCreateArgs {
    /// Owning organization id.
    #[arg(long = "org")]
    pub org_id: String,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub game: Option<String>,
    /// Start time, RFC 3339 (e.g. 2026-05-01T18:00:00Z).
    #[arg(long)]
    pub starts_at: Option<DateTime<Utc>>,
    #[arg(long)]
    pub max_teams: Option<u32>,
}
