use reqwest::StatusCode;
use thiserror::Error;

use arena_access::Action;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("an account with that email or username already exists")]
    Conflict,

    #[error("session expired — run `arena auth login`")]
    SessionExpired,

    #[error("not authenticated — run `arena auth login`")]
    NotAuthenticated,

    #[error("not permitted to {action}")]
    Forbidden { action: Action },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: StatusCode, message: String },

    #[error("invalid API URL: {0}")]
    InvalidBaseUrl(String),

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("credential store error: {0}")]
    CredentialStore(String),
}

impl AuthError {
    /// Whether the error means the caller no longer holds a usable session.
    #[must_use]
    pub const fn is_session_loss(&self) -> bool {
        matches!(self, Self::SessionExpired | Self::NotAuthenticated)
    }
}
