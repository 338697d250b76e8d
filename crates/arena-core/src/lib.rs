//! # arena-core
//!
//! Shared types for the Arena esports platform client.
//!
//! This crate holds data only, no access logic and no HTTP:
//! - `Scope` and `ScopeId`: the tier of a grant and the org/team instance it binds to
//! - `RoleAssignment` and `User`: the principal as returned by the backend
//! - `AccessCheck`: the query descriptor evaluated by `arena-access`
//! - Role name constants issued by the backend
//! - Cross-cutting error types

pub mod check;
pub mod errors;
pub mod roles;
pub mod scope;
pub mod user;

pub use check::AccessCheck;
pub use errors::CoreError;
pub use scope::{DocumentIds, Scope, ScopeId};
pub use user::{RoleAssignment, User};
