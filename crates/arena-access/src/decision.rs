//! Outcome of an access check, with the reason it was reached.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum Decision {
    Allowed(Allow),
    Denied(Deny),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Allow {
    /// The user holds a platform super-admin role.
    SuperAdmin,
    /// A grant matched scope, role and instance.
    RoleMatched,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Deny {
    /// No user was supplied.
    Unauthenticated,
    /// The check listed no acceptable roles.
    EmptyRoleSet,
    /// An org or team check named no instance and the user has no primary one.
    MissingScopeId,
    /// No grant matched.
    NoMatchingRole,
}

impl Decision {
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed(_))
    }

    #[must_use]
    pub const fn reason(self) -> &'static str {
        match self {
            Self::Allowed(allow) => allow.as_str(),
            Self::Denied(deny) => deny.as_str(),
        }
    }
}

impl Allow {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::RoleMatched => "role_matched",
        }
    }
}

impl Deny {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unauthenticated => "unauthenticated",
            Self::EmptyRoleSet => "empty_role_set",
            Self::MissingScopeId => "missing_scope_id",
            Self::NoMatchingRole => "no_matching_role",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.is_allowed() { "allowed" } else { "denied" };
        write!(f, "{verdict} ({})", self.reason())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_with_outcome_and_reason() {
        let json = serde_json::to_value(Decision::Denied(Deny::MissingScopeId)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"outcome": "denied", "reason": "missing_scope_id"})
        );
    }

    #[test]
    fn display_names_verdict_and_reason() {
        assert_eq!(
            Decision::Allowed(Allow::SuperAdmin).to_string(),
            "allowed (super_admin)"
        );
        assert_eq!(
            Decision::Denied(Deny::NoMatchingRole).to_string(),
            "denied (no_matching_role)"
        );
    }
}
