use pretty_assertions::assert_eq;
use terrace_record::attachment::{attachment_urls, copy_attachments, move_attachments};
use terrace_record::{AttachmentStore, MemoryRecord, MemoryStore, RecordError};

#[test]
fn add_and_read_attachment() {
    let store = MemoryStore::new();
    let mut rec = MemoryRecord::new();

    store.add_attachment(&mut rec, "report.pdf", b"pdf-bytes").unwrap();
    assert_eq!(store.read_attachment(&rec, "report.pdf").unwrap(), b"pdf-bytes");
}

#[test]
fn read_missing_attachment_fails() {
    let store = MemoryStore::new();
    let rec = MemoryRecord::new();

    let err = store.read_attachment(&rec, "nope.txt").unwrap_err();
    assert!(matches!(err, RecordError::AttachmentNotFound(_)));
}

#[test]
fn delete_attachment_removes_it() {
    let store = MemoryStore::new();
    let mut rec = MemoryRecord::new();

    store.add_attachment(&mut rec, "a.txt", b"a").unwrap();
    store.delete_attachment(&mut rec, "a.txt").unwrap();
    assert!(store.attachment_names(&rec).is_empty());
}

#[test]
fn urls_are_sorted_and_prefixed() {
    let store = MemoryStore::new();
    let mut rec = MemoryRecord::new().with_attachment_prefix("https://portal/Lists/Docs/Attachments/3");

    store.add_attachment(&mut rec, "zeta.txt", b"z").unwrap();
    store.add_attachment(&mut rec, "alpha.txt", b"a").unwrap();

    assert_eq!(
        attachment_urls(&store, &rec),
        vec![
            "https://portal/Lists/Docs/Attachments/3/alpha.txt".to_string(),
            "https://portal/Lists/Docs/Attachments/3/zeta.txt".to_string(),
        ]
    );
}

#[test]
fn copy_preserves_source_and_bytes() {
    let store = MemoryStore::new();
    let mut from = MemoryRecord::new();
    let mut to = MemoryRecord::new();

    store.add_attachment(&mut from, "a.txt", b"alpha").unwrap();
    store.add_attachment(&mut from, "b.txt", b"beta").unwrap();

    copy_attachments(&store, &from, &mut to).unwrap();

    assert_eq!(store.attachment_names(&from).len(), 2);
    assert_eq!(store.read_attachment(&to, "a.txt").unwrap(), b"alpha");
    assert_eq!(store.read_attachment(&to, "b.txt").unwrap(), b"beta");
}

#[test]
fn move_empties_the_source() {
    let store = MemoryStore::new();
    let mut from = MemoryRecord::new();
    let mut to = MemoryRecord::new();

    store.add_attachment(&mut from, "a.txt", b"alpha").unwrap();
    store.add_attachment(&mut from, "b.txt", b"beta").unwrap();

    move_attachments(&store, &mut from, &mut to).unwrap();

    assert!(store.attachment_names(&from).is_empty());
    assert_eq!(store.attachment_names(&to).len(), 2);
    assert_eq!(store.read_attachment(&to, "b.txt").unwrap(), b"beta");
}

#[test]
fn copy_with_no_attachments_is_a_no_op() {
    let store = MemoryStore::new();
    let from = MemoryRecord::new();
    let mut to = MemoryRecord::new();

    copy_attachments(&store, &from, &mut to).unwrap();
    assert!(store.attachment_names(&to).is_empty());
}
