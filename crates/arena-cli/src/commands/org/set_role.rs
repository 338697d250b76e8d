use anyhow::bail;
use arena_core::{Scope, roles};
use arena_session::Member;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::org::OrgSetRoleArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SetRoleResponse {
    org_id: String,
    updated: bool,
    member: Member,
}

fn ensure_org_role(role: &str) -> anyhow::Result<()> {
    if roles::scope_of(role) != Some(Scope::Org) {
        bail!(
            "'{role}' is not an org role (expected one of {}, {}, {})",
            roles::ORG_OWNER,
            roles::ORG_MANAGER,
            roles::ORG_MEMBER
        );
    }
    Ok(())
}

pub async fn handle(args: &OrgSetRoleArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ensure_org_role(&args.role)?;

    let member = ctx
        .session
        .update_member_role(&args.org_id, &args.user_id, &args.role)
        .await?;

    output(
        &SetRoleResponse {
            org_id: args.org_id.clone(),
            updated: true,
            member,
        },
        flags.format,
    )
}
