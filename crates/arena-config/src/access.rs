//! Access resolver configuration.

use arena_core::{roles, Scope};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_super_admin_roles() -> Vec<String> {
    vec![roles::PLATFORM_SUPERADMIN.to_owned()]
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AccessConfig {
    /// Platform roles that bypass every access check.
    ///
    /// Deployments whose backend issues `platform:super_admin` add it here.
    #[serde(default = "default_super_admin_roles")]
    pub super_admin_roles: Vec<String>,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            super_admin_roles: default_super_admin_roles(),
        }
    }
}

impl AccessConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.super_admin_roles.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "access.super_admin_roles".into(),
                reason: "at least one role is required".into(),
            });
        }
        if let Some(bad) = self
            .super_admin_roles
            .iter()
            .find(|role| roles::scope_of(role) != Some(Scope::Platform))
        {
            return Err(ConfigError::InvalidValue {
                field: "access.super_admin_roles".into(),
                reason: format!("'{bad}' is not a platform role"),
            });
        }
        Ok(())
    }
}
