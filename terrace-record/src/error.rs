//! Error types for record marshalling.

use crate::FieldKind;
use thiserror::Error;

/// Result type for record operations.
pub type RecordResult<T> = Result<T, RecordError>;

/// Errors that can occur while marshalling record fields.
#[derive(Debug, Error)]
pub enum RecordError {
    /// Field name is not part of the active schema. Always surfaced.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// An operation was applied to a field of the wrong kind.
    #[error("schema mismatch on field {field}: expected {expected:?}, got {actual:?}")]
    SchemaMismatch {
        field: String,
        expected: FieldKind,
        actual: FieldKind,
    },

    /// A principal could not be materialized during a write. The write
    /// is aborted with no partial mutation.
    #[error("could not resolve principal: {0}")]
    IdentityResolution(String),

    /// Attachment store failure.
    #[error("attachment error: {0}")]
    Attachment(String),

    /// Attachment does not exist on the record.
    #[error("attachment not found: {0}")]
    AttachmentNotFound(String),
}
