//! Principal references.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A reference to a user or group without owning the underlying
/// directory record.
///
/// `display_name` is the presentation name shown by the platform; for
/// directory-synced entries it doubles as the directory group name the
/// membership resolver falls back to. `parent_scope_url` identifies the
/// scope the principal was materialized in, and may be empty for
/// references decoded from stored text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrincipalRef {
    pub id: i64,
    pub login_name: String,
    pub display_name: String,
    pub parent_scope_url: String,
}

impl PrincipalRef {
    #[must_use]
    pub fn new(id: i64, login_name: impl Into<String>) -> Self {
        Self {
            id,
            login_name: login_name.into(),
            display_name: String::new(),
            parent_scope_url: String::new(),
        }
    }

    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    #[must_use]
    pub fn with_parent_scope(mut self, url: impl Into<String>) -> Self {
        self.parent_scope_url = url.into();
        self
    }
}

impl fmt::Display for PrincipalRef {
    /// The stored-text encoding of a user reference: `"<id>;#<display>"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};#{}", self.id, self.display_name)
    }
}

impl FromStr for PrincipalRef {
    type Err = Error;

    /// Parses the `"<id>;#<display>"` stored-text encoding. Only the id
    /// and display name survive a round-trip through text; the login
    /// name and parent scope must be re-resolved against the store.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id_part, display) = match s.split_once(";#") {
            Some((id, display)) => (id, display),
            None => (s, ""),
        };
        let id = id_part
            .trim()
            .parse::<i64>()
            .map_err(|_| Error::InvalidPrincipal(s.to_string()))?;
        Ok(Self::new(id, "").with_display_name(display))
    }
}
