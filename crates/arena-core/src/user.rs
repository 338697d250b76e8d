use std::fmt;

use schemars::JsonSchema;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::scope::{DocumentIds, optional_scope_id};
use crate::{Scope, ScopeId};

/// One grant held by a user: a role within a scope instance.
///
/// For `Org` and `Team` grants `scope_id` names the instance. For `Platform`
/// grants it is ignored by every comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoleAssignment {
    pub scope: Scope,
    pub role: String,
    #[serde(
        default,
        deserialize_with = "optional_scope_id",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<ScopeId>")]
    pub scope_id: Option<ScopeId>,
    /// Entity type `scope_id` refers to (`Organization`, `Team`). Informational.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope_model: Option<String>,
}

impl RoleAssignment {
    #[must_use]
    pub fn platform(role: impl Into<String>) -> Self {
        Self {
            scope: Scope::Platform,
            role: role.into(),
            scope_id: None,
            scope_model: None,
        }
    }

    #[must_use]
    pub fn org(role: impl Into<String>, org_id: impl AsRef<str>) -> Self {
        Self {
            scope: Scope::Org,
            role: role.into(),
            scope_id: ScopeId::new(org_id),
            scope_model: Some("Organization".into()),
        }
    }

    #[must_use]
    pub fn team(role: impl Into<String>, team_id: impl AsRef<str>) -> Self {
        Self {
            scope: Scope::Team,
            role: role.into(),
            scope_id: ScopeId::new(team_id),
            scope_model: Some("Team".into()),
        }
    }
}

/// `org:owner@A` for instance-bound grants, the bare role otherwise.
impl fmt::Display for RoleAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.scope_id, self.scope.is_instance_bound()) {
            (Some(id), true) => write!(f, "{}@{id}", self.role),
            _ => f.write_str(&self.role),
        }
    }
}

/// The authenticated principal as returned by the profile endpoint.
///
/// `org_id` and `team_id` are the user's primary org and team. They are only
/// consulted when an access check does not name an instance itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub roles: Vec<RoleAssignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<ScopeId>")]
    pub org_id: Option<ScopeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<ScopeId>")]
    pub team_id: Option<ScopeId>,
}

/// Profile as the backend sends it.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireUser {
    #[serde(flatten)]
    ids: DocumentIds,
    #[serde(default)]
    username: String,
    #[serde(default)]
    email: String,
    #[serde(default, deserialize_with = "known_roles")]
    roles: Vec<RoleAssignment>,
    #[serde(default, deserialize_with = "optional_scope_id")]
    org_id: Option<ScopeId>,
    #[serde(default, deserialize_with = "optional_scope_id")]
    team_id: Option<ScopeId>,
}

impl<'de> Deserialize<'de> for User {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = WireUser::deserialize(deserializer)?;
        let id = wire.ids.into_id().ok_or_else(|| de::Error::missing_field("id"))?;
        Ok(Self {
            id,
            username: wire.username,
            email: wire.email,
            roles: wire.roles,
            org_id: wire.org_id,
            team_id: wire.team_id,
        })
    }
}

impl User {
    #[must_use]
    pub fn new(id: impl Into<String>, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            email: email.into(),
            roles: Vec::new(),
            org_id: None,
            team_id: None,
        }
    }

    #[must_use]
    pub fn with_role(mut self, assignment: RoleAssignment) -> Self {
        self.roles.push(assignment);
        self
    }

    #[must_use]
    pub fn with_primary_org(mut self, org_id: impl AsRef<str>) -> Self {
        self.org_id = ScopeId::new(org_id);
        self
    }

    #[must_use]
    pub fn with_primary_team(mut self, team_id: impl AsRef<str>) -> Self {
        self.team_id = ScopeId::new(team_id);
        self
    }

    /// Grants held in `scope`, in the order the backend sent them.
    pub fn roles_in(&self, scope: Scope) -> impl Iterator<Item = &RoleAssignment> {
        self.roles.iter().filter(move |assignment| assignment.scope == scope)
    }
}

/// Deserialize the `roles` array, dropping entries that do not parse
/// (unknown scope, missing role). A dropped entry can never grant access.
fn known_roles<'de, D>(deserializer: D) -> Result<Vec<RoleAssignment>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();
    let mut roles = Vec::with_capacity(raw.len());
    for value in raw {
        match serde_json::from_value::<RoleAssignment>(value) {
            Ok(assignment) => roles.push(assignment),
            Err(error) => tracing::warn!(%error, "dropping unrecognized role assignment"),
        }
    }
    Ok(roles)
}
