//! # arena-access
//!
//! Decides whether a user may perform an action, given their role
//! assignments across platform, org and team scopes.
//!
//! One resolver backs every permission question in the client:
//! - [`AccessResolver::decide`] / [`AccessResolver::is_authorized`] evaluate an
//!   [`AccessCheck`](arena_core::AccessCheck)
//! - [`Guard`] picks between two render branches using the same resolver
//! - [`Action`] maps named platform capabilities to access rules
//! - `has_any_role`, `has_org_role` and `has_team_role` are shorthands that
//!   build a check and delegate
//! - `is_super_admin` tests the platform grants against the configured
//!   super-admin roles, the same test `decide` applies first
//!
//! Evaluation is pure and synchronous. Absent users, empty role sets and
//! unresolvable scope ids all deny.

pub mod action;
pub mod decision;
pub mod error;
pub mod guard;
pub mod resolver;

pub use action::{AccessRule, Action};
pub use decision::{Allow, Decision, Deny};
pub use error::AccessError;
pub use guard::Guard;
pub use resolver::{resolve_scope_id, AccessResolver};

use arena_core::{AccessCheck, User};

/// Evaluate `check` with the default super-admin role set.
#[must_use]
pub fn is_authorized(user: Option<&User>, check: &AccessCheck) -> bool {
    AccessResolver::default().is_authorized(user, check)
}

/// Like [`is_authorized`], returning the reason.
#[must_use]
pub fn decide(user: Option<&User>, check: &AccessCheck) -> Decision {
    AccessResolver::default().decide(user, check)
}
