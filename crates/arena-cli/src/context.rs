use anyhow::Context;
use arena_access::AccessResolver;
use arena_config::ArenaConfig;
use arena_core::User;
use arena_session::{SessionState, SessionStore};

/// Loaded configuration plus the session every command shares.
pub struct AppContext {
    pub config: ArenaConfig,
    pub session: SessionStore,
}

impl AppContext {
    pub fn init(config: ArenaConfig) -> anyhow::Result<Self> {
        let session = arena_session::from_config(&config).context("failed to build API client")?;
        Ok(Self { config, session })
    }

    pub fn resolver(&self) -> &AccessResolver {
        self.session.resolver()
    }

    /// Settle the session against the server and return the signed-in user.
    pub async fn require_user(&self) -> anyhow::Result<User> {
        match self.session.check_auth().await? {
            SessionState::Authenticated(user) => Ok(user),
            SessionState::Checking | SessionState::Anonymous => {
                anyhow::bail!("not signed in — run `arena auth login`")
            }
        }
    }

    /// Like [`AppContext::require_user`], without failing when signed out.
    pub async fn current_user(&self) -> anyhow::Result<Option<User>> {
        Ok(self.session.check_auth().await?.user().cloned())
    }
}
