//! Property-based tests for marshalling round-trips and the permissive
//! decoding contract.

use proptest::prelude::*;
use terrace_record::{FieldKind, FieldMarshaller, MemoryRecord, MemoryStore};
use terrace_types::{LookupValue, LookupValueCollection};
use std::str::FromStr;

fn display_text_strategy() -> impl Strategy<Value = String> {
    // the ";#" wire encoding reserves the delimiter pair
    prop::string::string_regex("[a-zA-Z0-9 _.-]{0,24}").unwrap()
}

proptest! {
    /// Set then get returns the original integer for any value.
    #[test]
    fn integer_roundtrip(value in -1_000_000_000i64..1_000_000_000) {
        let mut store = MemoryStore::new();
        store.define_field("Count", FieldKind::Integer);
        let m = FieldMarshaller::new(&store);
        let mut rec = MemoryRecord::new();

        m.set_integer(&mut rec, "Count", value).unwrap();
        prop_assert_eq!(m.get_integer(&rec, "Count", 0).unwrap(), value);
    }

    /// Text never fails to decode, whatever was stored.
    #[test]
    fn arbitrary_text_decodes_to_itself(value in ".{0,64}") {
        let mut store = MemoryStore::new();
        store.define_field("Title", FieldKind::Text);
        let m = FieldMarshaller::new(&store);
        let mut rec = MemoryRecord::new();

        m.set_text(&mut rec, "Title", value.clone()).unwrap();
        prop_assert_eq!(m.get_text(&rec, "Title", "").unwrap(), value);
    }

    /// Integer decoding of arbitrary text never fails; unparseable
    /// input collapses to zero.
    #[test]
    fn integer_from_arbitrary_text_never_errors(value in ".{0,32}") {
        let mut store = MemoryStore::new();
        store.define_field("Count", FieldKind::Integer);
        let m = FieldMarshaller::new(&store);
        let mut rec = MemoryRecord::new();

        m.set_text(&mut rec, "Count", value.clone()).unwrap();
        let decoded = m.get_integer(&rec, "Count", 7).unwrap();
        match value.trim().parse::<i64>() {
            Ok(n) => prop_assert_eq!(decoded, n),
            Err(_) => prop_assert_eq!(decoded, 0),
        }
    }

    /// The lookup collection wire encoding round-trips for any entries
    /// whose display text avoids the delimiter pair.
    #[test]
    fn lookup_collection_wire_roundtrip(
        entries in prop::collection::vec((0i64..10_000, display_text_strategy()), 0..6)
    ) {
        let collection: LookupValueCollection = entries
            .into_iter()
            .map(|(id, text)| LookupValue::new(id, text))
            .collect();
        let encoded = collection.to_string();
        let reparsed = LookupValueCollection::from_str(&encoded).unwrap();
        prop_assert_eq!(reparsed, collection);
    }
}
