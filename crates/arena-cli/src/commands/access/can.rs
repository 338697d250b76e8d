use arena_access::Action;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::access::AccessCanArgs;
use crate::context::AppContext;
use crate::output::output;

use super::check::AccessCheckResponse;

#[derive(Serialize)]
struct AccessCanResponse {
    action: Action,
    allowed_roles: &'static [&'static str],
    #[serde(flatten)]
    result: AccessCheckResponse,
}

pub async fn handle(args: &AccessCanArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user = super::subject(args.user_file.as_deref(), ctx).await?;
    let check = args.action.check(args.scope_id.as_deref());

    output(
        &AccessCanResponse {
            action: args.action,
            allowed_roles: args.action.rule().allowed_roles,
            result: AccessCheckResponse::evaluate(ctx.resolver(), user.as_ref(), &check),
        },
        flags.format,
    )
}
