use arena_core::{roles, AccessCheck, Scope, ScopeId, User};

use crate::{Action, Allow, Decision, Deny, Guard};

/// Evaluates access checks against a user's role assignments.
///
/// The only configuration is the set of platform roles treated as super-admin.
/// Holding any of them passes every check, in every scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessResolver {
    super_admin_roles: Vec<String>,
}

impl Default for AccessResolver {
    fn default() -> Self {
        Self::new([roles::PLATFORM_SUPERADMIN])
    }
}

impl AccessResolver {
    pub fn new<I, R>(super_admin_roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        Self {
            super_admin_roles: super_admin_roles.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn super_admin_roles(&self) -> &[String] {
        &self.super_admin_roles
    }

    #[must_use]
    pub fn is_authorized(&self, user: Option<&User>, check: &AccessCheck) -> bool {
        self.decide(user, check).is_allowed()
    }

    /// Evaluate `check` for `user`.
    ///
    /// 1. no user: deny
    /// 2. platform super-admin grant: allow
    /// 3. resolve the instance id (explicit, else the user's primary org/team)
    /// 4. allow if some grant matches scope, role and (non-platform) instance
    #[must_use]
    pub fn decide(&self, user: Option<&User>, check: &AccessCheck) -> Decision {
        let Some(user) = user else {
            tracing::trace!(scope = %check.scope, "access denied: no user");
            return Decision::Denied(Deny::Unauthenticated);
        };

        if self.is_super_admin(user) {
            tracing::trace!(user_id = %user.id, scope = %check.scope, "access granted: super-admin");
            return Decision::Allowed(Allow::SuperAdmin);
        }

        if check.allowed_roles.is_empty() {
            return Decision::Denied(Deny::EmptyRoleSet);
        }

        let matched = match check.scope {
            Scope::Platform => user
                .roles_in(Scope::Platform)
                .any(|assignment| check.allows(&assignment.role)),
            Scope::Org | Scope::Team => {
                let Some(scope_id) = resolve_scope_id(user, check) else {
                    tracing::debug!(
                        user_id = %user.id,
                        scope = %check.scope,
                        "access denied: no scope id given and user has no primary {}",
                        check.scope,
                    );
                    return Decision::Denied(Deny::MissingScopeId);
                };
                user.roles_in(check.scope).any(|assignment| {
                    check.allows(&assignment.role) && assignment.scope_id.as_ref() == Some(scope_id)
                })
            }
        };

        let decision = if matched {
            Decision::Allowed(Allow::RoleMatched)
        } else {
            Decision::Denied(Deny::NoMatchingRole)
        };
        tracing::trace!(
            user_id = %user.id,
            scope = %check.scope,
            scope_id = ?check.scope_id,
            %decision,
            "access evaluated",
        );
        decision
    }

    /// Whether `user` holds one of the configured super-admin roles.
    #[must_use]
    pub fn is_super_admin(&self, user: &User) -> bool {
        user.roles_in(Scope::Platform).any(|assignment| {
            self.super_admin_roles
                .iter()
                .any(|role| *role == assignment.role)
        })
    }

    /// Whether `user` holds any of `roles` in `scope`, on their primary
    /// instance for org and team scopes.
    pub fn has_any_role<I, R>(&self, user: Option<&User>, scope: Scope, roles: I) -> bool
    where
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        self.is_authorized(user, &AccessCheck::new(scope, roles))
    }

    /// Whether `user` holds any of `roles` in the org `org_id`.
    pub fn has_org_role<I, R>(&self, user: Option<&User>, org_id: &str, roles: I) -> bool
    where
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        self.is_authorized(user, &AccessCheck::org(roles).with_scope_id(org_id))
    }

    /// Whether `user` holds any of `roles` in the team `team_id`.
    pub fn has_team_role<I, R>(&self, user: Option<&User>, team_id: &str, roles: I) -> bool
    where
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        self.is_authorized(user, &AccessCheck::team(roles).with_scope_id(team_id))
    }

    /// Evaluate a catalog action, optionally pinned to an org or team.
    #[must_use]
    pub fn can(&self, user: Option<&User>, action: Action, scope_id: Option<&str>) -> Decision {
        self.decide(user, &action.check(scope_id))
    }

    /// A render guard for `check`, evaluated lazily by [`Guard::render`].
    #[must_use]
    pub fn guard<'a>(&'a self, user: Option<&'a User>, check: AccessCheck) -> Guard<'a> {
        Guard::new(self, user, check)
    }
}

/// The instance id a check is evaluated against.
///
/// An explicit `check.scope_id` wins; otherwise org checks use the user's
/// primary org and team checks the primary team. Platform checks have none.
#[must_use]
pub fn resolve_scope_id<'a>(user: &'a User, check: &'a AccessCheck) -> Option<&'a ScopeId> {
    match check.scope {
        Scope::Platform => None,
        Scope::Org => check.scope_id.as_ref().or(user.org_id.as_ref()),
        Scope::Team => check.scope_id.as_ref().or(user.team_id.as_ref()),
    }
}
