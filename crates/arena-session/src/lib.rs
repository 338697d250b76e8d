//! # arena-session
//!
//! Cookie-session client for the Arena REST API.
//!
//! [`ApiClient`] talks to the backend and refreshes an expired session once,
//! single-flight, before giving up. [`SessionStore`] tracks who is signed in
//! and gates org operations through the shared
//! [`AccessResolver`](arena_access::AccessResolver) before any request is
//! sent. [`CredentialStore`] keeps the session cookie in the OS keyring (file
//! fallback) so the CLI stays signed in between runs.

pub mod client;
pub mod credentials;
pub mod error;
pub mod models;
pub mod refresh;
pub mod session;

pub use client::ApiClient;
pub use credentials::{CookieSource, CredentialStore};
pub use error::AuthError;
pub use models::{Member, NewTournament, Notification, Tournament};
pub use session::{SessionState, SessionStore};

use arena_access::AccessResolver;
use arena_config::ArenaConfig;

/// Build a session store from loaded configuration.
///
/// Restores a persisted cookie when `session.persist` is set, and honours an
/// explicit `session.cookie` over anything stored.
///
/// # Errors
///
/// Returns `AuthError` if the HTTP client cannot be built.
pub fn from_config(config: &ArenaConfig) -> Result<SessionStore, AuthError> {
    let client = ApiClient::new(&config.api)?;
    let resolver = AccessResolver::new(config.access.super_admin_roles.iter());
    let mut store = SessionStore::new(client, resolver);
    if config.session.persist {
        store = store.with_credentials(CredentialStore::new(&config.session.keyring_service));
    }
    if let Some(cookie) = config.session.cookie() {
        store.client().restore_cookies(cookie);
    }
    Ok(store)
}
