//! Named platform capabilities and the rules that gate them.

use std::fmt;
use std::str::FromStr;

use arena_core::{roles, AccessCheck, Scope};
use serde::Serialize;

use crate::AccessError;

/// Roles a check accepts within one scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessRule {
    pub scope: Scope,
    pub allowed_roles: &'static [&'static str],
}

impl AccessRule {
    /// Build a check, pinned to `scope_id` when given.
    #[must_use]
    pub fn check(&self, scope_id: Option<&str>) -> AccessCheck {
        let check = AccessCheck::new(self.scope, self.allowed_roles.iter().copied());
        match scope_id {
            Some(id) => check.with_scope_id(id),
            None => check,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    ManageOrganization,
    ManageOrgMembers,
    CreateTournament,
    ViewOrgDashboard,
    ManageTeam,
    ManageTeamRoster,
    ViewTeamDashboard,
    ModeratePlatform,
    BroadcastNotification,
}

const ORG_OWNERS: &[&str] = &[roles::ORG_OWNER];
const ORG_ORGANIZERS: &[&str] = &[roles::ORG_OWNER, roles::ORG_MANAGER];
const ORG_ANY: &[&str] = &[roles::ORG_OWNER, roles::ORG_MANAGER, roles::ORG_MEMBER];
const TEAM_OWNERS: &[&str] = &[roles::TEAM_OWNER];
const TEAM_STAFF: &[&str] = &[roles::TEAM_OWNER, roles::TEAM_MANAGER];
const TEAM_ANY: &[&str] = &[roles::TEAM_OWNER, roles::TEAM_MANAGER, roles::TEAM_PLAYER];
const PLATFORM_STAFF: &[&str] = &[roles::PLATFORM_STAFF];

impl Action {
    pub const ALL: [Self; 9] = [
        Self::ManageOrganization,
        Self::ManageOrgMembers,
        Self::CreateTournament,
        Self::ViewOrgDashboard,
        Self::ManageTeam,
        Self::ManageTeamRoster,
        Self::ViewTeamDashboard,
        Self::ModeratePlatform,
        Self::BroadcastNotification,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ManageOrganization => "manage-organization",
            Self::ManageOrgMembers => "manage-org-members",
            Self::CreateTournament => "create-tournament",
            Self::ViewOrgDashboard => "view-org-dashboard",
            Self::ManageTeam => "manage-team",
            Self::ManageTeamRoster => "manage-team-roster",
            Self::ViewTeamDashboard => "view-team-dashboard",
            Self::ModeratePlatform => "moderate-platform",
            Self::BroadcastNotification => "broadcast-notification",
        }
    }

    #[must_use]
    #[allow(clippy::match_same_arms)]
    pub const fn rule(self) -> AccessRule {
        let (scope, allowed_roles) = match self {
            Self::ManageOrganization => (Scope::Org, ORG_OWNERS),
            Self::ManageOrgMembers => (Scope::Org, ORG_ORGANIZERS),
            Self::CreateTournament => (Scope::Org, ORG_ORGANIZERS),
            Self::ViewOrgDashboard => (Scope::Org, ORG_ANY),
            Self::ManageTeam => (Scope::Team, TEAM_OWNERS),
            Self::ManageTeamRoster => (Scope::Team, TEAM_STAFF),
            Self::ViewTeamDashboard => (Scope::Team, TEAM_ANY),
            Self::ModeratePlatform => (Scope::Platform, PLATFORM_STAFF),
            Self::BroadcastNotification => (Scope::Platform, PLATFORM_STAFF),
        };
        AccessRule {
            scope,
            allowed_roles,
        }
    }

    #[must_use]
    pub fn check(self, scope_id: Option<&str>) -> AccessCheck {
        self.rule().check(scope_id)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == wanted)
            .ok_or_else(|| AccessError::UnknownAction(s.to_string()))
    }
}
