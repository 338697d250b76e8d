use serde::{Deserialize, Serialize};

fn default_keyring_service() -> String {
    "arena-cli".into()
}

const fn default_persist() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Keyring service name the session cookie is stored under.
    #[serde(default = "default_keyring_service")]
    pub keyring_service: String,

    /// Persist the session cookie between CLI invocations.
    #[serde(default = "default_persist")]
    pub persist: bool,

    /// Session cookie supplied directly, bypassing the credential store.
    #[serde(default)]
    pub cookie: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            keyring_service: default_keyring_service(),
            persist: default_persist(),
            cookie: None,
        }
    }
}

impl SessionConfig {
    /// The explicit cookie, ignoring blank values.
    #[must_use]
    pub fn cookie(&self) -> Option<&str> {
        self.cookie.as_deref().map(str::trim).filter(|c| !c.is_empty())
    }
}
