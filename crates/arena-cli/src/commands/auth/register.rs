use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthRegisterArgs;
use crate::context::AppContext;
use crate::output::output;

use super::login::SignedInResponse;

pub async fn handle(
    args: &AuthRegisterArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let user = ctx
        .session
        .register(&args.username, &args.email, &args.password)
        .await?;
    output(
        &SignedInResponse::new(user, ctx.config.session.persist),
        flags.format,
    )
}
