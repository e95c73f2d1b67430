//! Privilege elevation and membership resolution.
//!
//! Two independent capabilities share this crate because both sit on the
//! platform's security boundary:
//!
//! - [`ScopeProvider::run_elevated`] executes caller-supplied logic with
//!   elevated privilege against a freshly opened resource scope, with
//!   unsafe-update flags guaranteed to be restored on every exit path
//! - [`MembershipResolver`] decides whether an identity belongs to a
//!   named group, falling back from the local group registries to the
//!   external directory, fail-closed on provider errors
//!
//! The role-assignment value types in [`roles`] carry the find-or-create
//! merge logic used when granting principals rights on records and
//! collections.

mod elevation;
mod error;
mod membership;
pub mod roles;

pub use elevation::ScopeProvider;
pub use error::ElevationError;
pub use membership::{GroupRegistry, MembershipResolver};
pub use roles::{RoleAssignment, RoleAssignmentSet};
