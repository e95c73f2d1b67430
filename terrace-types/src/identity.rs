//! Claims-encoded identity decoding.
//!
//! External identity providers hand the platform opaque, tagged login
//! strings (e.g. `"i:0#.w|corp\\jdoe"`). Before any comparison those
//! must be reduced to the plain login token. The decoder is injected as
//! a collaborator rather than reached through a global: construct one at
//! process start and pass it by reference.

/// Decodes claims-encoded identities into plain login tokens.
///
/// Implementations must be stateless and idempotent: decoding an
/// already-plain login returns it unchanged, and decoding never mutates
/// process-wide state.
pub trait ClaimsDecoder {
    fn decode(&self, identity: &str) -> String;
}

/// The standard decoder for pipe-delimited claims encodings.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardClaimsDecoder;

impl ClaimsDecoder for StandardClaimsDecoder {
    fn decode(&self, identity: &str) -> String {
        decode_claims_login(identity).to_string()
    }
}

/// Strips a claims prefix from an encoded identity by taking the
/// substring after the final `|`. Plain logins pass through unchanged,
/// so the operation is idempotent.
#[must_use]
pub fn decode_claims_login(identity: &str) -> &str {
    match identity.rsplit_once('|') {
        Some((_, login)) => login,
        None => identity,
    }
}

/// Reduces a qualified login (`DOMAIN\user`) to its bare account name,
/// the form the directory provider searches by.
#[must_use]
pub fn sam_account_name(login: &str) -> &str {
    match login.rsplit_once('\\') {
        Some((_, account)) => account,
        None => login,
    }
}
