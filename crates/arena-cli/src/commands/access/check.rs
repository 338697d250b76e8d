use arena_access::{AccessResolver, Decision, resolve_scope_id};
use arena_core::{AccessCheck, Scope, User};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::access::AccessCheckArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
pub(super) struct AccessCheckResponse {
    pub allowed: bool,
    pub reason: &'static str,
    pub scope: Scope,
    /// Instance the check was evaluated against, after primary-id fallback.
    pub scope_id: Option<String>,
    pub user_id: Option<String>,
}

impl AccessCheckResponse {
    pub(super) fn evaluate(resolver: &AccessResolver, user: Option<&User>, check: &AccessCheck) -> Self {
        let decision: Decision = resolver.decide(user, check);
        let scope_id = match check.scope {
            Scope::Platform => None,
            Scope::Org | Scope::Team => user
                .and_then(|user| resolve_scope_id(user, check))
                .or(check.scope_id.as_ref())
                .map(ToString::to_string),
        };
        Self {
            allowed: decision.is_allowed(),
            reason: decision.reason(),
            scope: check.scope,
            scope_id,
            user_id: user.map(|user| user.id.clone()),
        }
    }
}

pub async fn handle(
    args: &AccessCheckArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let user = super::subject(args.user_file.as_deref(), ctx).await?;

    let mut check = AccessCheck::new(args.scope, args.roles.iter());
    if let Some(scope_id) = &args.scope_id {
        check = check.with_scope_id(scope_id);
    }
    if check.allowed_roles.is_empty() {
        tracing::warn!("no --role given; only a super-admin can pass this check");
    }

    output(
        &AccessCheckResponse::evaluate(ctx.resolver(), user.as_ref(), &check),
        flags.format,
    )
}
