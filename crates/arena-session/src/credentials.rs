//! Session cookie persistence between CLI invocations.
//!
//! Lookup order: OS keyring, then `ARENA_SESSION__COOKIE`, then
//! `~/.arena/session` (written `0600` when the keyring is unavailable).

use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::AuthError;

const KEYRING_USER: &str = "session-cookie";
const SESSION_FILE_NAME: &str = "session";
const COOKIE_ENV: &str = "ARENA_SESSION__COOKIE";

/// Where a loaded cookie came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookieSource {
    Keyring,
    Env,
    File,
}

impl CookieSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyring => "keyring",
            Self::Env => "env",
            Self::File => "file",
        }
    }
}

impl fmt::Display for CookieSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct CredentialStore {
    /// Keyring service name; `None` keeps everything in the file.
    service: Option<String>,
    file: Option<PathBuf>,
}

impl CredentialStore {
    /// Keyring under `service`, file fallback under the home directory.
    #[must_use]
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: Some(service.into()),
            file: default_session_path(),
        }
    }

    /// File-only store at `path`; never touches the keyring.
    #[must_use]
    pub fn file_only(path: impl Into<PathBuf>) -> Self {
        Self {
            service: None,
            file: Some(path.into()),
        }
    }

    /// Persist the cookie header. Falls back to the file if the keyring fails.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::CredentialStore` if both keyring and file storage fail.
    pub fn store(&self, cookie: &str) -> Result<(), AuthError> {
        let Some(entry) = self.entry() else {
            return self.store_file(cookie);
        };
        match entry.set_password(cookie) {
            Ok(()) => Ok(()),
            Err(error) => {
                tracing::warn!(%error, "keyring store failed; falling back to file");
                self.store_file(cookie)
            }
        }
    }

    #[must_use]
    pub fn load(&self) -> Option<String> {
        self.load_with_source().map(|(cookie, _)| cookie)
    }

    /// The stored cookie and which tier it came from.
    #[must_use]
    pub fn load_with_source(&self) -> Option<(String, CookieSource)> {
        if let Some(entry) = self.entry()
            && let Ok(cookie) = entry.get_password()
            && !cookie.trim().is_empty()
        {
            return Some((cookie, CookieSource::Keyring));
        }

        if let Ok(cookie) = std::env::var(COOKIE_ENV)
            && !cookie.trim().is_empty()
        {
            return Some((cookie, CookieSource::Env));
        }

        self.load_file().map(|cookie| (cookie, CookieSource::File))
    }

    /// Remove the cookie from keyring and file. Missing entries are fine.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::CredentialStore` if the session file cannot be removed.
    pub fn delete(&self) -> Result<(), AuthError> {
        if let Some(entry) = self.entry() {
            let _ = entry.delete_credential();
        }

        if let Some(path) = &self.file
            && path.exists()
        {
            fs::remove_file(path).map_err(|e| {
                AuthError::CredentialStore(format!("failed to delete {}: {e}", path.display()))
            })?;
        }
        Ok(())
    }

    fn entry(&self) -> Option<keyring::Entry> {
        let service = self.service.as_deref()?;
        match keyring::Entry::new(service, KEYRING_USER) {
            Ok(entry) => Some(entry),
            Err(error) => {
                tracing::debug!(%error, "keyring unavailable");
                None
            }
        }
    }

    fn store_file(&self, cookie: &str) -> Result<(), AuthError> {
        let path = self.file.as_ref().ok_or_else(|| {
            AuthError::CredentialStore("home directory not found — cannot store session".into())
        })?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AuthError::CredentialStore(format!("mkdir {}: {e}", parent.display()))
            })?;
        }
        fs::write(path, cookie)
            .map_err(|e| AuthError::CredentialStore(format!("write {}: {e}", path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(|e| {
                AuthError::CredentialStore(format!("chmod {}: {e}", path.display()))
            })?;
        }

        Ok(())
    }

    fn load_file(&self) -> Option<String> {
        let path = self.file.as_ref()?;
        fs::read_to_string(path)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }
}

fn default_session_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".arena").join(SESSION_FILE_NAME))
}
