//! Error types for directory lookups.

use thiserror::Error;

/// Result type for directory operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Errors that can occur while querying the directory.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The directory service could not be reached.
    #[error("directory unavailable: {0}")]
    Unavailable(String),

    /// A query was rejected or returned malformed results.
    #[error("directory query failed: {0}")]
    Query(String),
}
