use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in with email and password.
    Login(AuthLoginArgs),
    /// Create an account and sign in.
    Register(AuthRegisterArgs),
    /// End the session and clear the stored cookie.
    Logout,
    /// Show who is signed in.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    #[arg(long)]
    pub email: String,
    /// Password (falls back to `ARENA_PASSWORD`).
    #[arg(long, env = "ARENA_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Clone, Debug, Args)]
pub struct AuthRegisterArgs {
    #[arg(long)]
    pub username: String,
    #[arg(long)]
    pub email: String,
    /// Password (falls back to `ARENA_PASSWORD`).
    #[arg(long, env = "ARENA_PASSWORD", hide_env_values = true)]
    pub password: String,
}
