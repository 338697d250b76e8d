//! Client-side session state and permission-gated operations.

use arena_access::{AccessResolver, Action, Decision, Deny};
use arena_core::{AccessCheck, User};
use serde::Serialize;
use tokio::sync::RwLock;

use crate::client::ApiClient;
use crate::credentials::CredentialStore;
use crate::models::{Credentials, Member, NewTournament, Notification, Registration, Tournament};
use crate::AuthError;

/// What the client currently knows about the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "user", rename_all = "snake_case")]
pub enum SessionState {
    /// Nothing has been checked against the server yet.
    Checking,
    Authenticated(User),
    Anonymous,
}

impl SessionState {
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Checking | Self::Anonymous => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Checking => "checking",
            Self::Authenticated(_) => "authenticated",
            Self::Anonymous => "anonymous",
        }
    }
}

/// Owns the API client and the session state every permission check reads.
#[derive(Debug)]
pub struct SessionStore {
    client: ApiClient,
    resolver: AccessResolver,
    credentials: Option<CredentialStore>,
    state: RwLock<SessionState>,
}

impl SessionStore {
    #[must_use]
    pub fn new(client: ApiClient, resolver: AccessResolver) -> Self {
        Self {
            client,
            resolver,
            credentials: None,
            state: RwLock::new(SessionState::Checking),
        }
    }

    /// Persist the session cookie through `credentials`, and restore any
    /// cookie it already holds into the client.
    #[must_use]
    pub fn with_credentials(self, credentials: CredentialStore) -> Self {
        if let Some(cookie) = credentials.load() {
            self.client.restore_cookies(&cookie);
        }
        Self {
            credentials: Some(credentials),
            ..self
        }
    }

    #[must_use]
    pub const fn client(&self) -> &ApiClient {
        &self.client
    }

    #[must_use]
    pub const fn resolver(&self) -> &AccessResolver {
        &self.resolver
    }

    pub async fn state(&self) -> SessionState {
        self.state.read().await.clone()
    }

    /// Snapshot of the signed-in user, if any.
    pub async fn current_user(&self) -> Option<User> {
        self.state.read().await.user().cloned()
    }

    /// Ask the server who we are and settle the state accordingly.
    ///
    /// # Errors
    ///
    /// Returns transport and server errors other than a lost session; those
    /// leave the state untouched.
    pub async fn check_auth(&self) -> Result<SessionState, AuthError> {
        match self.client.profile().await {
            Ok(user) => {
                self.authenticate(user).await;
                Ok(self.state().await)
            }
            Err(error) if error.is_session_loss() => {
                tracing::debug!(%error, "no active session");
                self.set_state(SessionState::Anonymous).await;
                Ok(SessionState::Anonymous)
            }
            Err(error) => Err(error),
        }
    }

    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the server rejects the login.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        let user = self.client.login(&credentials).await?;
        self.authenticate(user.clone()).await;
        self.persist_cookie()?;
        tracing::info!(user_id = %user.id, "logged in");
        Ok(user)
    }

    /// # Errors
    ///
    /// Returns `AuthError::Conflict` if the username or email is taken.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        let registration = Registration {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let user = self.client.register(&registration).await?;
        self.authenticate(user.clone()).await;
        self.persist_cookie()?;
        tracing::info!(user_id = %user.id, "registered");
        Ok(user)
    }

    /// End the session. Local state is cleared even when the server call fails.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::CredentialStore` if the stored cookie cannot be removed.
    pub async fn logout(&self) -> Result<(), AuthError> {
        if let Err(error) = self.client.logout().await {
            tracing::warn!(%error, "server logout failed; clearing local session anyway");
        }
        self.set_state(SessionState::Anonymous).await;
        if let Some(credentials) = &self.credentials {
            credentials.delete()?;
        }
        Ok(())
    }

    /// Re-fetch the profile, e.g. after roles changed server-side.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SessionExpired` (and clears the state) if the
    /// session cannot be refreshed.
    pub async fn refresh_profile(&self) -> Result<User, AuthError> {
        let user = self.track(self.client.profile().await).await?;
        self.authenticate(user.clone()).await;
        Ok(user)
    }

    /// Evaluate `check` against the current user.
    pub async fn is_authorized(&self, check: &AccessCheck) -> bool {
        let state = self.state.read().await;
        self.resolver.is_authorized(state.user(), check)
    }

    /// Evaluate a named action, pinned to `scope_id` when given.
    pub async fn can(&self, action: Action, scope_id: Option<&str>) -> Decision {
        let state = self.state.read().await;
        self.resolver.can(state.user(), action, scope_id)
    }

    // --- guarded operations ---

    /// # Errors
    ///
    /// Returns `AuthError::Forbidden` without a request if the current user may
    /// not view the organization.
    pub async fn list_members(&self, org_id: &str) -> Result<Vec<Member>, AuthError> {
        self.require(Action::ViewOrgDashboard, org_id).await?;
        self.track(self.client.members(org_id).await).await
    }

    /// # Errors
    ///
    /// Returns `AuthError::Forbidden` without a request if the current user may
    /// not manage the organization's members.
    pub async fn update_member_role(
        &self,
        org_id: &str,
        user_id: &str,
        role: &str,
    ) -> Result<Member, AuthError> {
        self.require(Action::ManageOrgMembers, org_id).await?;
        self.track(self.client.update_member_role(org_id, user_id, role).await)
            .await
    }

    /// # Errors
    ///
    /// Returns `AuthError::Forbidden` without a request if the current user may
    /// not manage the organization's members.
    pub async fn remove_member(&self, org_id: &str, user_id: &str) -> Result<(), AuthError> {
        self.require(Action::ManageOrgMembers, org_id).await?;
        self.track(self.client.remove_member(org_id, user_id).await)
            .await
    }

    /// # Errors
    ///
    /// Returns `AuthError::Forbidden` without a request if the current user may
    /// not create tournaments for the organization.
    pub async fn create_tournament(
        &self,
        org_id: &str,
        tournament: &NewTournament,
    ) -> Result<Tournament, AuthError> {
        self.require(Action::CreateTournament, org_id).await?;
        let created = self
            .track(self.client.create_tournament(org_id, tournament).await)
            .await?;
        tracing::info!(org_id, tournament_id = %created.id, "tournament created");
        Ok(created)
    }

    /// # Errors
    ///
    /// Returns `AuthError::NotAuthenticated` without a request when signed out.
    pub async fn notifications(&self, unread_only: bool) -> Result<Vec<Notification>, AuthError> {
        self.require_user().await?;
        self.track(self.client.notifications(unread_only).await).await
    }

    /// # Errors
    ///
    /// Returns `AuthError::NotAuthenticated` without a request when signed out.
    pub async fn mark_notification_read(&self, id: &str) -> Result<(), AuthError> {
        self.require_user().await?;
        self.track(self.client.mark_notification_read(id).await)
            .await
    }

    // --- internals ---

    async fn require(&self, action: Action, scope_id: &str) -> Result<(), AuthError> {
        match self.can(action, Some(scope_id)).await {
            Decision::Allowed(_) => Ok(()),
            Decision::Denied(Deny::Unauthenticated) => Err(AuthError::NotAuthenticated),
            Decision::Denied(reason) => {
                tracing::debug!(%action, scope_id, reason = reason.as_str(), "denied client-side");
                Err(AuthError::Forbidden { action })
            }
        }
    }

    async fn require_user(&self) -> Result<(), AuthError> {
        if self.state.read().await.user().is_some() {
            Ok(())
        } else {
            Err(AuthError::NotAuthenticated)
        }
    }

    /// Drop to `Anonymous` when a call reports the session is gone.
    async fn track<T>(&self, result: Result<T, AuthError>) -> Result<T, AuthError> {
        if let Err(error) = &result
            && error.is_session_loss()
        {
            self.set_state(SessionState::Anonymous).await;
        }
        // A refresh may have rotated the cookie.
        if result.is_ok()
            && let Err(error) = self.persist_cookie()
        {
            tracing::warn!(%error, "failed to persist refreshed session cookie");
        }
        result
    }

    async fn authenticate(&self, user: User) {
        self.set_state(SessionState::Authenticated(user)).await;
    }

    async fn set_state(&self, next: SessionState) {
        let mut state = self.state.write().await;
        tracing::debug!(from = state.as_str(), to = next.as_str(), "session state");
        *state = next;
    }

    fn persist_cookie(&self) -> Result<(), AuthError> {
        let Some(credentials) = &self.credentials else {
            return Ok(());
        };
        match self.client.session_cookies() {
            Some(cookie) => credentials.store(&cookie),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::{roles, RoleAssignment};

    #[test]
    fn state_exposes_user_only_when_authenticated() {
        let user = User::new("u-1", "kai", "kai@example.gg");
        assert_eq!(SessionState::Authenticated(user.clone()).user(), Some(&user));
        assert_eq!(SessionState::Checking.user(), None);
        assert_eq!(SessionState::Anonymous.user(), None);
    }

    #[test]
    fn state_serializes_with_tag() {
        let user = User::new("u-1", "kai", "kai@example.gg")
            .with_role(RoleAssignment::platform(roles::PLATFORM_USER));
        let value = serde_json::to_value(SessionState::Authenticated(user)).unwrap();
        assert_eq!(value["state"], "authenticated");
        assert_eq!(value["user"]["id"], "u-1");
        assert_eq!(
            serde_json::to_value(SessionState::Anonymous).unwrap(),
            serde_json::json!({"state": "anonymous"})
        );
    }
}
