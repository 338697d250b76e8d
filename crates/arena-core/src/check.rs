use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::scope::optional_scope_id;
use crate::{Scope, ScopeId};

/// A permission query: does the user hold one of `allowed_roles` in `scope`?
///
/// When `scope_id` is `None` the resolver falls back to the user's primary
/// org or team for that scope. Platform checks never look at `scope_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccessCheck {
    pub scope: Scope,
    pub allowed_roles: Vec<String>,
    #[serde(
        default,
        deserialize_with = "optional_scope_id",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<ScopeId>")]
    pub scope_id: Option<ScopeId>,
}

impl AccessCheck {
    pub fn new<I, R>(scope: Scope, allowed_roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        Self {
            scope,
            allowed_roles: allowed_roles.into_iter().map(Into::into).collect(),
            scope_id: None,
        }
    }

    pub fn platform<I, R>(allowed_roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        Self::new(Scope::Platform, allowed_roles)
    }

    pub fn org<I, R>(allowed_roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        Self::new(Scope::Org, allowed_roles)
    }

    pub fn team<I, R>(allowed_roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        Self::new(Scope::Team, allowed_roles)
    }

    /// Pin the check to one instance. A blank id leaves the check unpinned.
    #[must_use]
    pub fn with_scope_id(mut self, scope_id: impl AsRef<str>) -> Self {
        self.scope_id = ScopeId::new(scope_id);
        self
    }

    #[must_use]
    pub fn allows(&self, role: &str) -> bool {
        self.allowed_roles.iter().any(|allowed| allowed == role)
    }
}
