//! Role names issued by the backend.
//!
//! Roles are namespaced by scope (`org:owner`, `team:player`). Matching is
//! always exact; there is no inheritance between roles.

use crate::Scope;

/// Super-admin role as issued by the current auth service.
pub const PLATFORM_SUPERADMIN: &str = "platform:superadmin";
/// Legacy spelling still present in older tokens and seed data.
pub const PLATFORM_SUPER_ADMIN: &str = "platform:super_admin";
pub const PLATFORM_STAFF: &str = "platform:staff";
pub const PLATFORM_USER: &str = "platform:user";

pub const ORG_OWNER: &str = "org:owner";
pub const ORG_MANAGER: &str = "org:manager";
pub const ORG_MEMBER: &str = "org:member";

pub const TEAM_OWNER: &str = "team:owner";
pub const TEAM_MANAGER: &str = "team:manager";
pub const TEAM_PLAYER: &str = "team:player";

/// Every role name known to this client.
pub const ALL: &[&str] = &[
    PLATFORM_SUPERADMIN,
    PLATFORM_SUPER_ADMIN,
    PLATFORM_STAFF,
    PLATFORM_USER,
    ORG_OWNER,
    ORG_MANAGER,
    ORG_MEMBER,
    TEAM_OWNER,
    TEAM_MANAGER,
    TEAM_PLAYER,
];

/// Scope named by a role's prefix (`org:owner` → `Org`).
///
/// The prefix must be spelled exactly as the backend issues it. Roles are
/// compared byte for byte, so `Org:Owner` or `organization:owner` would never
/// match a grant and get `None` here.
#[must_use]
pub fn scope_of(role: &str) -> Option<Scope> {
    let (prefix, name) = role.split_once(':')?;
    if name.is_empty() || name.trim() != name {
        return None;
    }
    [Scope::Platform, Scope::Org, Scope::Team]
        .into_iter()
        .find(|scope| scope.as_str() == prefix)
}
