//! Collaborator traits for the backing record store.
//!
//! Trait definitions live here; implementations belong to the consumers
//! that own the actual storage. [`crate::MemoryStore`] provides the
//! in-memory implementation used in tests.

use crate::{FieldDef, FieldId, RecordError, RecordResult};
use terrace_types::{PrincipalRef, RawValue};

/// Abstract access to records and their runtime schema.
pub trait RecordStore {
    /// The record representation this store reads and writes.
    type Record;

    /// Resolves a human-facing field name to its schema definition.
    ///
    /// Fails with [`RecordError::UnknownField`] if the name is not part
    /// of the active schema.
    fn resolve_field(&self, field_name: &str) -> RecordResult<FieldDef>;

    /// Reads the raw stored value of a field, or `None` when unset.
    fn get_raw(&self, record: &Self::Record, field: &FieldId) -> Option<RawValue>;

    /// Writes a raw value into the in-memory record representation.
    fn set_raw(&self, record: &mut Self::Record, field: &FieldId, value: RawValue);

    /// Removes a field's stored value, leaving it unset.
    fn clear_raw(&self, record: &mut Self::Record, field: &FieldId);
}

/// The principal authority of a record's containing scope.
///
/// Used by *ensure*-mode user writes, which must materialize the
/// principal within the target scope before encoding a reference to it.
pub trait PrincipalResolver {
    /// Idempotently materializes the principal with the given login in
    /// this scope and returns the materialized reference.
    ///
    /// Fails with [`RecordError::IdentityResolution`] if the principal
    /// cannot be materialized.
    fn ensure_principal(&self, login_name: &str) -> RecordResult<PrincipalRef>;

    /// Looks up an already-materialized principal by its scope-local id.
    fn principal_by_id(&self, id: i64) -> Option<PrincipalRef>;
}
