//! Backend REST API configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_base_url() -> String {
    "http://localhost:4000/api/".into()
}

const fn default_timeout_secs() -> u64 {
    15
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Root of the REST API. Endpoint paths are joined onto it.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Whether `base_url` is an http(s) URL with a host.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        let rest = self
            .base_url
            .trim()
            .strip_prefix("https://")
            .or_else(|| self.base_url.trim().strip_prefix("http://"));
        rest.and_then(|r| r.split('/').next())
            .is_some_and(|host| !host.is_empty())
    }

    /// `base_url` with exactly one trailing slash, so relative endpoint
    /// paths join under it instead of replacing its last segment.
    #[must_use]
    pub fn base_url_with_slash(&self) -> String {
        format!("{}/", self.base_url.trim().trim_end_matches('/'))
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: format!("expected an http(s) URL, got '{}'", self.base_url),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        let config = ApiConfig::default();
        assert!(config.is_configured());
        assert_eq!(config.timeout(), Duration::from_secs(15));
    }

    #[test]
    fn not_configured_without_scheme_or_host() {
        for base_url in ["", "localhost:4000", "https://", "ftp://files.example.gg"] {
            let config = ApiConfig {
                base_url: base_url.into(),
                ..Default::default()
            };
            assert!(!config.is_configured(), "{base_url} should be rejected");
            assert!(config.validate().is_err());
        }
    }

    #[test]
    fn base_url_gets_single_trailing_slash() {
        let mut config = ApiConfig {
            base_url: "https://api.example.gg/v1".into(),
            ..Default::default()
        };
        assert_eq!(config.base_url_with_slash(), "https://api.example.gg/v1/");
        config.base_url = "https://api.example.gg/v1//".into();
        assert_eq!(config.base_url_with_slash(), "https://api.example.gg/v1/");
    }

    #[test]
    fn zero_timeout_is_invalid() {
        let config = ApiConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
