use arena_core::{AccessCheck, User};

use crate::{AccessResolver, Decision};

/// Chooses between an allowed and a fallback branch for one access check.
///
/// The check is evaluated by the owning [`AccessResolver`] when the guard is
/// consumed, so a guard built before a user loads still sees the snapshot it
/// was given.
///
/// ```
/// use arena_access::AccessResolver;
/// use arena_core::{roles, AccessCheck, RoleAssignment, User};
///
/// let resolver = AccessResolver::default();
/// let user = User::new("u-1", "kai", "kai@example.gg")
///     .with_role(RoleAssignment::org(roles::ORG_MANAGER, "org-a"));
///
/// let label = resolver
///     .guard(Some(&user), AccessCheck::org([roles::ORG_OWNER, roles::ORG_MANAGER]).with_scope_id("org-a"))
///     .render(|| "New tournament", || "Ask an organizer");
/// assert_eq!(label, "New tournament");
/// ```
#[derive(Debug, Clone)]
pub struct Guard<'a> {
    resolver: &'a AccessResolver,
    user: Option<&'a User>,
    check: AccessCheck,
}

impl<'a> Guard<'a> {
    pub(crate) fn new(
        resolver: &'a AccessResolver,
        user: Option<&'a User>,
        check: AccessCheck,
    ) -> Self {
        Self {
            resolver,
            user,
            check,
        }
    }

    #[must_use]
    pub fn check(&self) -> &AccessCheck {
        &self.check
    }

    #[must_use]
    pub fn decision(&self) -> Decision {
        self.resolver.decide(self.user, &self.check)
    }

    #[must_use]
    pub fn allowed(&self) -> bool {
        self.decision().is_allowed()
    }

    /// Run exactly one of the branches.
    pub fn render<T>(self, allowed: impl FnOnce() -> T, fallback: impl FnOnce() -> T) -> T {
        if self.allowed() {
            allowed()
        } else {
            fallback()
        }
    }

    /// Run `allowed` when permitted, otherwise yield `None`.
    pub fn render_if<T>(self, allowed: impl FnOnce() -> T) -> Option<T> {
        self.render(|| Some(allowed()), || None)
    }
}
