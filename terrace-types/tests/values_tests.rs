use pretty_assertions::assert_eq;
use std::str::FromStr;
use terrace_types::{LookupValue, LookupValueCollection, PrincipalRef, RawValue};

// ── LookupValue encoding ─────────────────────────────────────────

#[test]
fn lookup_value_display_encoding() {
    let v = LookupValue::new(5, "Contracts");
    assert_eq!(v.to_string(), "5;#Contracts");
}

#[test]
fn lookup_value_parse_id_and_text() {
    let v = LookupValue::from_str("5;#Contracts").unwrap();
    assert_eq!(v.lookup_id, 5);
    assert_eq!(v.display_text, "Contracts");
}

#[test]
fn lookup_value_parse_bare_id() {
    let v = LookupValue::from_str("42").unwrap();
    assert_eq!(v.lookup_id, 42);
    assert_eq!(v.display_text, "");
}

#[test]
fn lookup_value_parse_rejects_garbage() {
    assert!(LookupValue::from_str("abc;#Contracts").is_err());
    assert!(LookupValue::from_str("not-a-lookup").is_err());
}

#[test]
fn lookup_value_roundtrip_through_text() {
    let v = LookupValue::new(17, "Legal & Finance");
    let parsed = LookupValue::from_str(&v.to_string()).unwrap();
    assert_eq!(parsed, v);
}

#[test]
fn lookup_value_zero() {
    let v = LookupValue::zero();
    assert_eq!(v.lookup_id, 0);
    assert_eq!(v.display_text, "");
}

// ── LookupValueCollection ────────────────────────────────────────

#[test]
fn collection_preserves_storage_order() {
    let c: LookupValueCollection = vec![
        LookupValue::new(2, "Beta"),
        LookupValue::new(1, "Alpha"),
    ]
    .into();
    assert_eq!(c.get(0).unwrap().lookup_id, 2);
    assert_eq!(c.get(1).unwrap().lookup_id, 1);
}

#[test]
fn collection_permits_duplicate_ids() {
    let c = LookupValueCollection::from_str("1;#A;#1;#A").unwrap();
    assert_eq!(c.len(), 2);
    assert_eq!(c.get(0), c.get(1));
}

#[test]
fn collection_parse_multiple_entries() {
    let c = LookupValueCollection::from_str("1;#Alpha;#2;#Beta").unwrap();
    assert_eq!(c.len(), 2);
    assert_eq!(c.get(0).unwrap().display_text, "Alpha");
    assert_eq!(c.get(1).unwrap().display_text, "Beta");
}

#[test]
fn collection_parse_empty_string() {
    let c = LookupValueCollection::from_str("").unwrap();
    assert!(c.is_empty());
}

#[test]
fn collection_parse_rejects_dangling_entry() {
    assert!(LookupValueCollection::from_str("1;#A;#2").is_err());
}

#[test]
fn collection_display_roundtrip_with_duplicates() {
    let c = LookupValueCollection::from_str("3;#X;#3;#X;#9;#Y").unwrap();
    let reparsed = LookupValueCollection::from_str(&c.to_string()).unwrap();
    assert_eq!(reparsed, c);
}

#[test]
fn collection_contains_id() {
    let c = LookupValueCollection::from_str("1;#Alpha;#2;#Beta").unwrap();
    assert!(c.contains_id(2));
    assert!(!c.contains_id(3));
}

#[test]
fn collection_contains_text_is_case_insensitive() {
    let c = LookupValueCollection::from_str("1;#Alpha;#2;#Beta").unwrap();
    assert!(c.contains_text("ALPHA"));
    assert!(c.contains_text("beta"));
    assert!(!c.contains_text("Gamma"));
}

// ── PrincipalRef ─────────────────────────────────────────────────

#[test]
fn principal_display_encoding() {
    let p = PrincipalRef::new(7, "corp\\jdoe").with_display_name("Jane Doe");
    assert_eq!(p.to_string(), "7;#Jane Doe");
}

#[test]
fn principal_parse_keeps_id_and_display() {
    let p = PrincipalRef::from_str("7;#Jane Doe").unwrap();
    assert_eq!(p.id, 7);
    assert_eq!(p.display_name, "Jane Doe");
    assert_eq!(p.login_name, "");
}

#[test]
fn principal_parse_rejects_garbage() {
    assert!(PrincipalRef::from_str("jane").is_err());
}

#[test]
fn principal_builders() {
    let p = PrincipalRef::new(3, "corp\\asmith")
        .with_display_name("Alex Smith")
        .with_parent_scope("https://portal/sites/hr");
    assert_eq!(p.parent_scope_url, "https://portal/sites/hr");
    assert_eq!(p.display_name, "Alex Smith");
}

// ── RawValue serialization ───────────────────────────────────────

#[test]
fn raw_value_serde_roundtrip() {
    let values = vec![
        RawValue::Text("hello".into()),
        RawValue::Number(2.5),
        RawValue::Boolean(true),
        RawValue::Lookup(LookupValue::new(1, "A")),
        RawValue::UserMulti(vec![PrincipalRef::new(1, "corp\\a")]),
        RawValue::MultiChoice(vec!["Red".into(), "Blue".into()]),
    ];
    for v in values {
        let json = serde_json::to_string(&v).unwrap();
        let parsed: RawValue = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, v);
    }
}

#[test]
fn raw_value_uses_snake_case_tags() {
    let json = serde_json::to_string(&RawValue::MultiChoice(vec!["A".into()])).unwrap();
    assert!(json.contains("multi_choice"));
}
