use arena_session::CredentialStore;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    state: &'static str,
    authenticated: bool,
    user_id: Option<String>,
    username: Option<String>,
    org_id: Option<String>,
    team_id: Option<String>,
    roles: Vec<String>,
    cookie_source: Option<String>,
    api: String,
    note: Option<String>,
}

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let cookie_source = if ctx.config.session.cookie().is_some() {
        Some("config".to_string())
    } else if ctx.config.session.persist {
        CredentialStore::new(&ctx.config.session.keyring_service)
            .load_with_source()
            .map(|(_, source)| source.to_string())
    } else {
        None
    };

    let (state, note) = match ctx.session.check_auth().await {
        Ok(state) => (state, None),
        Err(error) => (ctx.session.state().await, Some(error.to_string())),
    };
    let user = state.user();

    output(
        &AuthStatusResponse {
            state: state.as_str(),
            authenticated: user.is_some(),
            user_id: user.map(|u| u.id.clone()),
            username: user.map(|u| u.username.clone()),
            org_id: user.and_then(|u| u.org_id.as_ref()).map(ToString::to_string),
            team_id: user.and_then(|u| u.team_id.as_ref()).map(ToString::to_string),
            roles: user
                .map(|u| u.roles.iter().map(ToString::to_string).collect())
                .unwrap_or_default(),
            cookie_source,
            api: ctx.config.api.base_url.clone(),
            note,
        },
        flags.format,
    )
}
