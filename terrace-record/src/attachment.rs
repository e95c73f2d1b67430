//! Attachment byte-stream conveniences.
//!
//! Attachments hang off individual records as named byte streams. The
//! store owns listing, reading, and mutation; the helpers here cover the
//! copy/move flows between two records of the same store.

use crate::{RecordResult, RecordStore};

/// Abstract access to a record's attachments.
pub trait AttachmentStore: RecordStore {
    /// Names of the record's attachments, in storage order.
    fn attachment_names(&self, record: &Self::Record) -> Vec<String>;

    /// URL prefix under which the record's attachments are addressed.
    fn attachment_prefix(&self, record: &Self::Record) -> String;

    /// Reads an attachment's content.
    fn read_attachment(&self, record: &Self::Record, name: &str) -> RecordResult<Vec<u8>>;

    /// Adds an attachment to the record.
    fn add_attachment(
        &self,
        record: &mut Self::Record,
        name: &str,
        content: &[u8],
    ) -> RecordResult<()>;

    /// Deletes an attachment from the record.
    fn delete_attachment(&self, record: &mut Self::Record, name: &str) -> RecordResult<()>;
}

/// Full URLs of a record's attachments, sorted by file name.
pub fn attachment_urls<S: AttachmentStore>(store: &S, record: &S::Record) -> Vec<String> {
    let prefix = store.attachment_prefix(record);
    let mut names = store.attachment_names(record);
    names.sort();
    names
        .into_iter()
        .map(|name| join_url(&prefix, &name))
        .collect()
}

/// Copies every attachment of `from` onto `to`.
pub fn copy_attachments<S: AttachmentStore>(
    store: &S,
    from: &S::Record,
    to: &mut S::Record,
) -> RecordResult<()> {
    for name in store.attachment_names(from) {
        let content = store.read_attachment(from, &name)?;
        store.add_attachment(to, &name, &content)?;
    }
    Ok(())
}

/// Moves every attachment of `from` onto `to`, leaving `from` empty.
pub fn move_attachments<S: AttachmentStore>(
    store: &S,
    from: &mut S::Record,
    to: &mut S::Record,
) -> RecordResult<()> {
    let names = store.attachment_names(from);
    for name in &names {
        let content = store.read_attachment(from, name)?;
        store.add_attachment(to, name, &content)?;
    }
    for name in &names {
        store.delete_attachment(from, name)?;
    }
    Ok(())
}

fn join_url(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else if prefix.ends_with('/') {
        format!("{prefix}{name}")
    } else {
        format!("{prefix}/{name}")
    }
}
