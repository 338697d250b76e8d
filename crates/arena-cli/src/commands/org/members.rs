use arena_session::Member;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::org::OrgMembersArgs;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct MembersResponse {
    org_id: String,
    members: Vec<Member>,
    count: usize,
    total: usize,
}

pub async fn handle(args: &OrgMembersArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut members = ctx.session.list_members(&args.org_id).await?;
    let total = members.len();
    members.truncate(effective_limit(
        None,
        flags.limit,
        ctx.config.general.default_limit,
    ));

    output(
        &MembersResponse {
            org_id: args.org_id.clone(),
            count: members.len(),
            members,
            total,
        },
        flags.format,
    )
}
