//! Core type definitions for the Terrace helper layer.
//!
//! This crate defines the fundamental, platform-agnostic types shared by
//! the record, directory, and security crates:
//! - Weakly-typed stored field values and their wire encodings
//! - Principal references (users and groups, without owning the directory record)
//! - Claims-encoded identity decoding
//! - Local group registry entries and scope levels
//!
//! Everything here is a plain value type; the stores and providers that
//! produce these values live in their respective crates.

mod group;
mod identity;
mod principal;
mod values;

pub use group::{Group, ScopeLevel};
pub use identity::{ClaimsDecoder, StandardClaimsDecoder, decode_claims_login, sam_account_name};
pub use principal::PrincipalRef;
pub use values::{LookupValue, LookupValueCollection, RawValue};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid lookup encoding: {0}")]
    InvalidLookup(String),

    #[error("invalid principal encoding: {0}")]
    InvalidPrincipal(String),
}
