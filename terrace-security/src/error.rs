//! Error types for elevation scopes.

use thiserror::Error;

/// Errors that can occur while opening or closing elevated scopes.
#[derive(Debug, Error)]
pub enum ElevationError {
    /// The resource scope could not be opened. Surfaced before any
    /// unsafe-update flag is touched, so no cleanup is owed.
    #[error("scope not found: {0}")]
    ScopeNotFound(String),

    /// The platform refused elevation or a scope operation failed.
    #[error("scope provider error: {0}")]
    Provider(String),
}
