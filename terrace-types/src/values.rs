//! Weakly-typed stored field values and their wire encodings.
//!
//! A record store hands back `RawValue`s keyed by resolved field
//! identifiers; the marshaller in `terrace-record` is the only place
//! that crosses from these into strongly-typed domain values.
//!
//! Lookup values carry the platform's legacy `"<id>;#<text>"` string
//! encoding, because older stores persist composites as delimited text
//! rather than structured values.

use crate::{Error, PrincipalRef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Delimiter between the id and text halves of an encoded lookup entry,
/// and between entries of an encoded collection.
const LOOKUP_DELIMITER: &str = ";#";

/// A raw stored field value as the backing record store sees it.
///
/// Absence is represented by `Option::None` at the store boundary,
/// never by a variant here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum RawValue {
    Text(String),
    Number(f64),
    Boolean(bool),
    DateTime(DateTime<Utc>),
    Lookup(LookupValue),
    LookupMulti(LookupValueCollection),
    User(PrincipalRef),
    UserMulti(Vec<PrincipalRef>),
    MultiChoice(Vec<String>),
}

/// A reference to another record: its id plus the display text that was
/// current when the reference was stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupValue {
    pub lookup_id: i64,
    pub display_text: String,
}

impl LookupValue {
    #[must_use]
    pub fn new(lookup_id: i64, display_text: impl Into<String>) -> Self {
        Self {
            lookup_id,
            display_text: display_text.into(),
        }
    }

    /// The zero value used when a lookup field is absent or undecodable.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }
}

impl fmt::Display for LookupValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.lookup_id, LOOKUP_DELIMITER, self.display_text)
    }
}

impl FromStr for LookupValue {
    type Err = Error;

    /// Parses the `"<id>;#<text>"` encoding. A bare integer is accepted
    /// as an id with empty display text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id_part, text) = match s.split_once(LOOKUP_DELIMITER) {
            Some((id, text)) => (id, text),
            None => (s, ""),
        };
        let lookup_id = id_part
            .trim()
            .parse::<i64>()
            .map_err(|_| Error::InvalidLookup(s.to_string()))?;
        Ok(Self::new(lookup_id, text))
    }
}

/// An ordered sequence of lookup values.
///
/// Storage order is preserved and duplicate ids are permitted when
/// present in storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LookupValueCollection(Vec<LookupValue>);

impl LookupValueCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: LookupValue) {
        self.0.push(value);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&LookupValue> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LookupValue> {
        self.0.iter()
    }

    /// True if any entry references the given id.
    #[must_use]
    pub fn contains_id(&self, lookup_id: i64) -> bool {
        self.0.iter().any(|v| v.lookup_id == lookup_id)
    }

    /// True if any entry's display text matches, ignoring ASCII case.
    #[must_use]
    pub fn contains_text(&self, display_text: &str) -> bool {
        self.0
            .iter()
            .any(|v| v.display_text.eq_ignore_ascii_case(display_text))
    }
}

impl From<Vec<LookupValue>> for LookupValueCollection {
    fn from(values: Vec<LookupValue>) -> Self {
        Self(values)
    }
}

impl FromIterator<LookupValue> for LookupValueCollection {
    fn from_iter<I: IntoIterator<Item = LookupValue>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for LookupValueCollection {
    type Item = LookupValue;
    type IntoIter = std::vec::IntoIter<LookupValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a LookupValueCollection {
    type Item = &'a LookupValue;
    type IntoIter = std::slice::Iter<'a, LookupValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for LookupValueCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for value in &self.0 {
            if !first {
                write!(f, "{LOOKUP_DELIMITER}")?;
            }
            write!(f, "{value}")?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for LookupValueCollection {
    type Err = Error;

    /// Parses `"<id>;#<text>;#<id>;#<text>…"`, the flattened encoding
    /// used for multi-valued lookup storage. An empty string decodes to
    /// an empty collection.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::new());
        }
        let parts: Vec<&str> = s.split(LOOKUP_DELIMITER).collect();
        if parts.len() % 2 != 0 {
            return Err(Error::InvalidLookup(s.to_string()));
        }
        let mut values = Vec::with_capacity(parts.len() / 2);
        for pair in parts.chunks_exact(2) {
            let lookup_id = pair[0]
                .trim()
                .parse::<i64>()
                .map_err(|_| Error::InvalidLookup(s.to_string()))?;
            values.push(LookupValue::new(lookup_id, pair[1]));
        }
        Ok(Self(values))
    }
}
