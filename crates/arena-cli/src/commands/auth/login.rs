use arena_core::User;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
pub(super) struct SignedInResponse {
    pub authenticated: bool,
    pub user_id: String,
    pub username: String,
    pub roles: Vec<String>,
    pub persisted: bool,
}

impl SignedInResponse {
    pub(super) fn new(user: User, persisted: bool) -> Self {
        Self {
            authenticated: true,
            roles: user.roles.iter().map(|grant| grant.to_string()).collect(),
            user_id: user.id,
            username: user.username,
            persisted,
        }
    }
}

pub async fn handle(args: &AuthLoginArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user = ctx.session.login(&args.email, &args.password).await?;
    output(
        &SignedInResponse::new(user, ctx.config.session.persist),
        flags.format,
    )
}
