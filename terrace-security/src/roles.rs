//! Role assignment bookkeeping.
//!
//! A securable object carries at most one assignment per principal;
//! granting a role definition merges into the existing assignment
//! instead of adding a second one.

use serde::{Deserialize, Serialize};
use terrace_types::PrincipalRef;

/// The role definitions bound to one principal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub member_id: i64,
    pub role_definitions: Vec<String>,
}

/// The role assignments of a securable record or collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleAssignmentSet(Vec<RoleAssignment>);

impl RoleAssignmentSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Grants `role_definition` to the member, reusing the member's
    /// existing assignment when present. Binding the same definition
    /// twice is a no-op.
    pub fn assign(&mut self, member: &PrincipalRef, role_definition: &str) {
        match self.0.iter_mut().find(|a| a.member_id == member.id) {
            Some(existing) => {
                if !existing.role_definitions.iter().any(|r| r == role_definition) {
                    existing.role_definitions.push(role_definition.to_string());
                }
            }
            None => self.0.push(RoleAssignment {
                member_id: member.id,
                role_definitions: vec![role_definition.to_string()],
            }),
        }
    }

    /// Removes the member's assignment entirely. Returns whether an
    /// assignment existed.
    pub fn remove(&mut self, member: &PrincipalRef) -> bool {
        let before = self.0.len();
        self.0.retain(|a| a.member_id != member.id);
        self.0.len() != before
    }

    #[must_use]
    pub fn for_member(&self, member_id: i64) -> Option<&RoleAssignment> {
        self.0.iter().find(|a| a.member_id == member_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RoleAssignment> {
        self.0.iter()
    }
}
