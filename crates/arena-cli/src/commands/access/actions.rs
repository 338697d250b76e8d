use arena_access::Action;
use arena_core::Scope;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ActionRow {
    action: Action,
    scope: Scope,
    allowed_roles: &'static [&'static str],
}

#[derive(Debug, Serialize)]
struct ActionsResponse {
    actions: Vec<ActionRow>,
}

fn catalog() -> ActionsResponse {
    ActionsResponse {
        actions: Action::ALL
            .into_iter()
            .map(|action| {
                let rule = action.rule();
                ActionRow {
                    action,
                    scope: rule.scope,
                    allowed_roles: rule.allowed_roles,
                }
            })
            .collect(),
    }
}

pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&catalog(), flags.format)
}
