//! REST client for the Arena backend.
//!
//! Authentication is a server-issued session cookie held in a shared
//! [`Jar`]. Protected requests that come back 401 go through one
//! single-flight refresh and are retried once.

use std::sync::Arc;

use arena_config::ApiConfig;
use arena_core::User;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::{Method, Response, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::AuthError;
use crate::models::{Credentials, Member, NewTournament, Notification, Registration, Tournament};
use crate::refresh::RefreshGate;

const LOGIN_PATH: &str = "auth/login";
const REGISTER_PATH: &str = "auth/register";
const PROFILE_PATH: &str = "auth/profile";
const REFRESH_PATH: &str = "auth/refresh";
const LOGOUT_PATH: &str = "auth/logout";

#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    jar: Arc<Jar>,
    base: Url,
    refresh: RefreshGate,
}

impl ApiClient {
    /// Build a client rooted at `config.base_url`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidBaseUrl` if the base URL does not parse, or
    /// `AuthError::Network` if the HTTP client cannot be constructed.
    pub fn new(config: &ApiConfig) -> Result<Self, AuthError> {
        let base = Url::parse(&config.base_url_with_slash())
            .map_err(|e| AuthError::InvalidBaseUrl(format!("{}: {e}", config.base_url)))?;
        let jar = Arc::new(Jar::default());
        let http = reqwest::Client::builder()
            .cookie_provider(Arc::clone(&jar))
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            http,
            jar,
            base,
            refresh: RefreshGate::new(),
        })
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base
    }

    /// Seed the jar from a `name=value; name2=value2` header captured earlier.
    pub fn restore_cookies(&self, header: &str) {
        for pair in header.split(';').map(str::trim).filter(|p| p.contains('=')) {
            self.jar.add_cookie_str(&format!("{pair}; Path=/"), &self.base);
        }
    }

    /// Cookies the jar would send to the API, as a single header value.
    #[must_use]
    pub fn session_cookies(&self) -> Option<String> {
        self.jar
            .cookies(&self.base)
            .and_then(|value| value.to_str().ok().map(str::to_owned))
            .filter(|value| !value.is_empty())
    }

    // --- auth endpoints (never refreshed) ---

    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` on 401.
    pub async fn login(&self, credentials: &Credentials) -> Result<User, AuthError> {
        let response = self.send(Method::POST, LOGIN_PATH, Some(credentials)).await?;
        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(AuthError::InvalidCredentials);
        }
        decode(response).await
    }

    /// # Errors
    ///
    /// Returns `AuthError::Conflict` on 409.
    pub async fn register(&self, registration: &Registration) -> Result<User, AuthError> {
        let response = self
            .send(Method::POST, REGISTER_PATH, Some(registration))
            .await?;
        if response.status() == StatusCode::CONFLICT {
            return Err(AuthError::Conflict);
        }
        decode(response).await
    }

    /// # Errors
    ///
    /// Returns `AuthError` if the server rejects the logout or is unreachable.
    pub async fn logout(&self) -> Result<(), AuthError> {
        let response = self.send(Method::POST, LOGOUT_PATH, None::<&()>).await?;
        expect_success(response).await
    }

    /// Refresh the session now, unless a concurrent caller just did.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SessionExpired` if the server refuses the refresh.
    pub async fn refresh(&self) -> Result<(), AuthError> {
        let seen = self.refresh.generation();
        self.refresh.run(seen, || self.refresh_session()).await
    }

    // --- protected endpoints ---

    /// # Errors
    ///
    /// Returns `AuthError::SessionExpired` if the session cannot be refreshed.
    pub async fn profile(&self) -> Result<User, AuthError> {
        self.call(Method::GET, PROFILE_PATH, None::<&()>).await
    }

    /// # Errors
    ///
    /// Returns `AuthError` on transport, status or decode failure.
    pub async fn members(&self, org_id: &str) -> Result<Vec<Member>, AuthError> {
        let path = format!("orgs/{}/members", urlencoding::encode(org_id));
        self.call(Method::GET, &path, None::<&()>).await
    }

    /// # Errors
    ///
    /// Returns `AuthError` on transport, status or decode failure.
    pub async fn update_member_role(
        &self,
        org_id: &str,
        user_id: &str,
        role: &str,
    ) -> Result<Member, AuthError> {
        #[derive(Serialize)]
        struct RoleUpdate<'a> {
            role: &'a str,
        }

        let path = member_path(org_id, user_id);
        self.call(Method::PATCH, &path, Some(&RoleUpdate { role }))
            .await
    }

    /// # Errors
    ///
    /// Returns `AuthError` on transport or status failure.
    pub async fn remove_member(&self, org_id: &str, user_id: &str) -> Result<(), AuthError> {
        let path = member_path(org_id, user_id);
        let response = self
            .send_with_refresh(Method::DELETE, &path, None::<&()>)
            .await?;
        expect_success(response).await
    }

    /// # Errors
    ///
    /// Returns `AuthError` on transport, status or decode failure.
    pub async fn create_tournament(
        &self,
        org_id: &str,
        tournament: &NewTournament,
    ) -> Result<Tournament, AuthError> {
        let path = format!("orgs/{}/tournaments", urlencoding::encode(org_id));
        self.call(Method::POST, &path, Some(tournament)).await
    }

    /// # Errors
    ///
    /// Returns `AuthError` on transport, status or decode failure.
    pub async fn notifications(&self, unread_only: bool) -> Result<Vec<Notification>, AuthError> {
        let path = if unread_only {
            "notifications?unread=true"
        } else {
            "notifications"
        };
        self.call(Method::GET, path, None::<&()>).await
    }

    /// # Errors
    ///
    /// Returns `AuthError` on transport or status failure.
    pub async fn mark_notification_read(&self, id: &str) -> Result<(), AuthError> {
        let path = format!("notifications/{}/read", urlencoding::encode(id));
        let response = self
            .send_with_refresh(Method::PATCH, &path, None::<&()>)
            .await?;
        expect_success(response).await
    }

    // --- plumbing ---

    async fn call<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T, AuthError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send_with_refresh(method, path, body).await?;
        decode(response).await
    }

    async fn send_with_refresh<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, AuthError>
    where
        B: Serialize + ?Sized,
    {
        let seen = self.refresh.generation();
        let response = self.send(method.clone(), path, body).await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        tracing::debug!(path, "request unauthorized; refreshing session");
        self.refresh.run(seen, || self.refresh_session()).await?;

        let retried = self.send(method, path, body).await?;
        if retried.status() == StatusCode::UNAUTHORIZED {
            tracing::warn!(path, "still unauthorized after refresh");
            return Err(AuthError::SessionExpired);
        }
        Ok(retried)
    }

    async fn refresh_session(&self) -> Result<(), AuthError> {
        let response = self.send(Method::POST, REFRESH_PATH, None::<&()>).await?;
        let status = response.status();
        if status.is_success() {
            tracing::debug!("session refreshed");
            Ok(())
        } else {
            tracing::warn!(%status, "session refresh rejected");
            Err(AuthError::SessionExpired)
        }
    }

    async fn send<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Response, AuthError>
    where
        B: Serialize + ?Sized,
    {
        let url = self
            .base
            .join(path)
            .map_err(|e| AuthError::InvalidBaseUrl(format!("{path}: {e}")))?;
        let mut request = self.http.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }
        Ok(request.send().await?)
    }
}

fn member_path(org_id: &str, user_id: &str) -> String {
    format!(
        "orgs/{}/members/{}",
        urlencoding::encode(org_id),
        urlencoding::encode(user_id)
    )
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, AuthError> {
    let status = response.status();
    let body = response.bytes().await?;
    if !status.is_success() {
        return Err(status_error(status, &body));
    }

    let value: Value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).map_err(|e| AuthError::Decode(e.to_string()))?
    };
    serde_json::from_value(unwrap_envelope(value)).map_err(|e| AuthError::Decode(e.to_string()))
}

async fn expect_success(response: Response) -> Result<(), AuthError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let body = response.bytes().await?;
    Err(status_error(status, &body))
}

fn status_error(status: StatusCode, body: &[u8]) -> AuthError {
    if status == StatusCode::UNAUTHORIZED {
        return AuthError::NotAuthenticated;
    }
    AuthError::Api {
        status,
        message: error_message(status, body),
    }
}

/// The backend's `{"message": …}` when present, else the raw body, else the
/// status reason.
fn error_message(status: StatusCode, body: &[u8]) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_slice::<Value>(body)
        && let Some(Value::String(message)) = map.get("message")
    {
        return message.clone();
    }
    let text = String::from_utf8_lossy(body).trim().to_string();
    if text.is_empty() {
        status.canonical_reason().unwrap_or("request failed").to_string()
    } else {
        text
    }
}

/// Accept both `{"data": …}` / `{"user": …}` wrappers and bare payloads.
fn unwrap_envelope(value: Value) -> Value {
    match value {
        Value::Object(mut map) => {
            for key in ["data", "user"] {
                if let Some(inner) = map.remove(key) {
                    return inner;
                }
            }
            Value::Object(map)
        }
        other => other,
    }
}
