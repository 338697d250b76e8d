use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::org::OrgRemoveArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct RemoveResponse {
    org_id: String,
    user_id: String,
    removed: bool,
}

pub async fn handle(args: &OrgRemoveArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.session.remove_member(&args.org_id, &args.user_id).await?;
    output(
        &RemoveResponse {
            org_id: args.org_id.clone(),
            user_id: args.user_id.clone(),
            removed: true,
        },
        flags.format,
    )
}
