//! Group membership resolution across two identity authorities.
//!
//! A group may be managed in the local registry of a container (or its
//! parent collection), or it may represent an organizational role whose
//! true membership lives in the external directory. Resolution tries the
//! local registries first and falls back to the directory; a locally
//! synced member entry that names a directory group is additionally
//! checked against that group's current directory membership, because
//! the synced entry may be stale.
//!
//! Directory failures are absorbed into "not a member" — fail-closed —
//! so a flaky provider degrades authorization checks instead of aborting
//! the caller's flow.

use terrace_directory::DirectoryProvider;
use terrace_types::{ClaimsDecoder, Group, sam_account_name};
use tracing::debug;

/// Local group registries of a scope and its parent collection.
///
/// Defined here, implemented by whatever owns the actual registry.
pub trait GroupRegistry {
    /// Looks up a group scoped to the immediate container.
    fn find_group(&self, name: &str) -> Option<Group>;

    /// Looks up a group scoped to the parent collection.
    fn find_site_group(&self, name: &str) -> Option<Group>;
}

/// Decides whether an identity belongs to a named group.
pub struct MembershipResolver<'a, R, D, C> {
    registry: &'a R,
    directory: &'a D,
    decoder: &'a C,
}

impl<'a, R, D, C> MembershipResolver<'a, R, D, C>
where
    R: GroupRegistry,
    D: DirectoryProvider,
    C: ClaimsDecoder,
{
    #[must_use]
    pub fn new(registry: &'a R, directory: &'a D, decoder: &'a C) -> Self {
        Self {
            registry,
            directory,
            decoder,
        }
    }

    /// True iff `identity` is a member of the named group.
    ///
    /// The group is looked up in the immediate scope's registry, then
    /// the parent collection's, then as a directory group of the same
    /// name. A group found nowhere is "not a member", never an error.
    pub fn is_member(&self, identity: &str, group_name: &str) -> bool {
        let login = self.decoder.decode(identity);
        if login.is_empty() {
            return false;
        }
        let name = group_name.trim();
        let group = self
            .registry
            .find_group(name)
            .or_else(|| self.registry.find_site_group(name));
        match group {
            Some(group) => self.group_contains(&login, &group),
            None => self.directory_group_contains(&login, name),
        }
    }

    /// True iff `identity` is a member of at least one of the named
    /// groups; stops at the first match. A failed check for one name
    /// only disqualifies that name.
    pub fn is_member_of_any(&self, identity: &str, group_names: &[&str]) -> bool {
        group_names
            .iter()
            .any(|name| self.is_member(identity, name))
    }

    fn group_contains(&self, login: &str, group: &Group) -> bool {
        if group.directory_backed {
            // local member list is not authoritative
            return self.directory_group_contains(login, &group.name);
        }
        group.members.iter().any(|member| {
            self.decoder
                .decode(&member.login_name)
                .eq_ignore_ascii_case(login)
                || self.directory_group_contains(login, &member.display_name)
        })
    }

    /// Directory-level membership by SID equivalence. Any provider
    /// failure degrades to `false`.
    fn directory_group_contains(&self, login: &str, group_name: &str) -> bool {
        if group_name.is_empty() {
            return false;
        }
        let account = sam_account_name(login);
        let user = match self.directory.find_user(account) {
            Ok(Some(user)) => user,
            Ok(None) => return false,
            Err(err) => {
                debug!(account, error = %err, "directory user lookup failed; treating as non-member");
                return false;
            }
        };
        match self.directory.find_group(group_name) {
            Ok(Some(group)) => group.members.iter().any(|member| member.same_sid(&user)),
            Ok(None) => false,
            Err(err) => {
                debug!(group = group_name, error = %err, "directory group lookup failed; treating as non-member");
                false
            }
        }
    }
}
