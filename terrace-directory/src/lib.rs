//! External directory authority boundary.
//!
//! Groups that represent organizational roles are not managed in the
//! local registry: their membership lives in an external directory and
//! is queried on demand. This crate defines the provider interface and
//! the value types it hands back; it owns no wire protocol.
//!
//! Directory calls are blocking, synchronous I/O. No retry is performed
//! here — callers that can degrade gracefully (the membership resolver)
//! absorb a single failed call.

mod error;
mod provider;
mod user;

pub use error::{DirectoryError, DirectoryResult};
pub use provider::{DirectoryGroup, DirectoryPrincipal, DirectoryProvider};
pub use user::DirectoryUser;
