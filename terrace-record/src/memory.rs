//! In-memory record store (for testing).

use crate::{
    AttachmentStore, FieldDef, FieldId, FieldKind, PrincipalResolver, RecordError, RecordResult,
    RecordStore,
};
use std::collections::BTreeMap;
use terrace_types::{PrincipalRef, RawValue};

/// An in-memory [`RecordStore`], [`PrincipalResolver`], and
/// [`AttachmentStore`] backed by ordinary maps.
///
/// Define the schema with [`define_field`](Self::define_field), provision
/// the principal pool with [`register_principal`](Self::register_principal),
/// and create records with [`MemoryRecord::new`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    fields: BTreeMap<String, FieldDef>,
    principals: BTreeMap<String, PrincipalRef>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a schema field whose display name equals its internal
    /// name, returning its stable identifier.
    pub fn define_field(&mut self, name: &str, kind: FieldKind) -> FieldId {
        self.define_field_with_display(name, kind, name)
    }

    /// Registers a schema field with a distinct display title.
    pub fn define_field_with_display(
        &mut self,
        name: &str,
        kind: FieldKind,
        display_name: &str,
    ) -> FieldId {
        let def = FieldDef::new(kind, display_name);
        let id = def.id;
        self.fields.insert(name.to_string(), def);
        id
    }

    /// Adds a principal to the pool that `ensure_principal` and
    /// `principal_by_id` resolve from.
    pub fn register_principal(&mut self, principal: PrincipalRef) {
        self.principals
            .insert(principal.login_name.to_lowercase(), principal);
    }
}

impl RecordStore for MemoryStore {
    type Record = MemoryRecord;

    fn resolve_field(&self, field_name: &str) -> RecordResult<FieldDef> {
        self.fields
            .get(field_name)
            .cloned()
            .ok_or_else(|| RecordError::UnknownField(field_name.to_string()))
    }

    fn get_raw(&self, record: &MemoryRecord, field: &FieldId) -> Option<RawValue> {
        record.values.get(field).cloned()
    }

    fn set_raw(&self, record: &mut MemoryRecord, field: &FieldId, value: RawValue) {
        record.values.insert(*field, value);
    }

    fn clear_raw(&self, record: &mut MemoryRecord, field: &FieldId) {
        record.values.remove(field);
    }
}

impl PrincipalResolver for MemoryStore {
    fn ensure_principal(&self, login_name: &str) -> RecordResult<PrincipalRef> {
        self.principals
            .get(&login_name.to_lowercase())
            .cloned()
            .ok_or_else(|| RecordError::IdentityResolution(login_name.to_string()))
    }

    fn principal_by_id(&self, id: i64) -> Option<PrincipalRef> {
        self.principals.values().find(|p| p.id == id).cloned()
    }
}

impl AttachmentStore for MemoryStore {
    fn attachment_names(&self, record: &MemoryRecord) -> Vec<String> {
        record.attachments.keys().cloned().collect()
    }

    fn attachment_prefix(&self, record: &MemoryRecord) -> String {
        record.attachment_prefix.clone()
    }

    fn read_attachment(&self, record: &MemoryRecord, name: &str) -> RecordResult<Vec<u8>> {
        record
            .attachments
            .get(name)
            .cloned()
            .ok_or_else(|| RecordError::AttachmentNotFound(name.to_string()))
    }

    fn add_attachment(
        &self,
        record: &mut MemoryRecord,
        name: &str,
        content: &[u8],
    ) -> RecordResult<()> {
        record.attachments.insert(name.to_string(), content.to_vec());
        Ok(())
    }

    fn delete_attachment(&self, record: &mut MemoryRecord, name: &str) -> RecordResult<()> {
        record
            .attachments
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| RecordError::AttachmentNotFound(name.to_string()))
    }
}

/// A record held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryRecord {
    values: BTreeMap<FieldId, RawValue>,
    attachments: BTreeMap<String, Vec<u8>>,
    attachment_prefix: String,
}

impl MemoryRecord {
    #[must_use]
    pub fn new() -> Self {
        Self {
            attachment_prefix: "memory://attachments".to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_attachment_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.attachment_prefix = prefix.into();
        self
    }
}
