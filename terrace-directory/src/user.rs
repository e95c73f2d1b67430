//! Directory user profile record.

use serde::{Deserialize, Serialize};

/// The profile attributes the directory stores for a user.
///
/// `manager_dn` holds the raw distinguished name of the user's manager
/// (`"CN=Jane Doe,OU=Staff,DC=corp"`); [`manager`](Self::manager)
/// extracts the presentation name from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryUser {
    pub logon_name: String,
    pub display_name: String,
    pub first_name: String,
    pub surname: String,
    pub mail: String,
    pub manager_dn: String,
}

impl DirectoryUser {
    /// The manager's presentation name: the leading component of the
    /// manager DN with its `CN=` tag removed. Empty when no manager is
    /// recorded.
    #[must_use]
    pub fn manager(&self) -> String {
        let leading = self.manager_dn.split(',').next().unwrap_or_default();
        leading.strip_prefix("CN=").unwrap_or(leading).to_string()
    }
}
