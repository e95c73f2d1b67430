//! The directory provider interface.

use crate::{DirectoryResult, DirectoryUser};
use serde::{Deserialize, Serialize};

/// A user or group entry as the directory exposes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryPrincipal {
    /// The sAMAccountName-style bare account name.
    pub account_name: String,
    pub display_name: String,
    /// Security identifier. Compared case-insensitively.
    pub sid: String,
}

impl DirectoryPrincipal {
    #[must_use]
    pub fn new(
        account_name: impl Into<String>,
        display_name: impl Into<String>,
        sid: impl Into<String>,
    ) -> Self {
        Self {
            account_name: account_name.into(),
            display_name: display_name.into(),
            sid: sid.into(),
        }
    }

    /// True if both principals carry the same SID, ignoring case.
    #[must_use]
    pub fn same_sid(&self, other: &DirectoryPrincipal) -> bool {
        self.sid.eq_ignore_ascii_case(&other.sid)
    }
}

/// A directory group with its membership materialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryGroup {
    pub name: String,
    pub members: Vec<DirectoryPrincipal>,
}

impl DirectoryGroup {
    #[must_use]
    pub fn new(name: impl Into<String>, members: Vec<DirectoryPrincipal>) -> Self {
        Self {
            name: name.into(),
            members,
        }
    }
}

/// Abstract access to the external directory service.
pub trait DirectoryProvider {
    /// Finds a user entry by bare account name.
    fn find_user(&self, sam_account_name: &str) -> DirectoryResult<Option<DirectoryPrincipal>>;

    /// Finds a group (with members) by its directory identity.
    fn find_group(&self, identity: &str) -> DirectoryResult<Option<DirectoryGroup>>;

    /// Loads the full profile record of a user.
    fn user_profile(&self, sam_account_name: &str) -> DirectoryResult<Option<DirectoryUser>>;
}
