//! Local group registry entries.

use crate::PrincipalRef;
use serde::{Deserialize, Serialize};

/// The container boundary a group (or elevation) is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeLevel {
    List,
    Site,
    SiteCollection,
}

/// A named group as the local registry materializes it.
///
/// For a directory-backed group the `members` list is not authoritative:
/// the group's true membership lives in the external directory and must
/// be queried on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    pub scope_level: ScopeLevel,
    pub members: Vec<PrincipalRef>,
    pub directory_backed: bool,
}

impl Group {
    #[must_use]
    pub fn new(name: impl Into<String>, scope_level: ScopeLevel) -> Self {
        Self {
            name: name.into(),
            scope_level,
            members: Vec::new(),
            directory_backed: false,
        }
    }

    #[must_use]
    pub fn with_members(mut self, members: Vec<PrincipalRef>) -> Self {
        self.members = members;
        self
    }

    #[must_use]
    pub fn directory_backed(mut self) -> Self {
        self.directory_backed = true;
        self
    }
}
