//! Typed reads and writes over the untyped field store.
//!
//! Reads never fail merely because a field is unset: scalar getters take
//! a caller-supplied default and multi-valued getters return an empty
//! collection. A value that is present but does not convert yields the
//! kind's zero value — deliberately permissive, matching the platform's
//! long-standing behavior for dirty legacy data.

use crate::{FieldKind, PrincipalResolver, RecordError, RecordResult, RecordStore};
use chrono::{DateTime, Utc};
use std::str::FromStr;
use terrace_types::{LookupValue, LookupValueCollection, PrincipalRef, RawValue};

/// Translates between raw stored values and strongly-typed domain
/// values, given only a field name.
pub struct FieldMarshaller<'a, S: RecordStore> {
    store: &'a S,
}

impl<'a, S: RecordStore> FieldMarshaller<'a, S> {
    #[must_use]
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    fn raw(&self, record: &S::Record, field_name: &str) -> RecordResult<Option<RawValue>> {
        let def = self.store.resolve_field(field_name)?;
        Ok(self.store.get_raw(record, &def.id))
    }

    // ── Reads ────────────────────────────────────────────────────

    /// Reads a field as text. Any stored kind renders to its display
    /// string; an unset field yields `default`.
    pub fn get_text(
        &self,
        record: &S::Record,
        field_name: &str,
        default: &str,
    ) -> RecordResult<String> {
        Ok(match self.raw(record, field_name)? {
            Some(raw) => decode_text(&raw),
            None => default.to_string(),
        })
    }

    /// Reads an integer field. Unset yields `default`; a stored value
    /// that does not convert yields `0`.
    pub fn get_integer(
        &self,
        record: &S::Record,
        field_name: &str,
        default: i64,
    ) -> RecordResult<i64> {
        Ok(match self.raw(record, field_name)? {
            Some(raw) => decode_integer(&raw),
            None => default,
        })
    }

    /// Reads a floating-point field. Unset yields `default`; a stored
    /// value that does not convert yields `0.0`.
    pub fn get_real(
        &self,
        record: &S::Record,
        field_name: &str,
        default: f64,
    ) -> RecordResult<f64> {
        Ok(match self.raw(record, field_name)? {
            Some(raw) => decode_real(&raw),
            None => default,
        })
    }

    /// Reads a boolean field. Unset yields `default`; a stored value
    /// that does not convert yields `false`.
    pub fn get_boolean(
        &self,
        record: &S::Record,
        field_name: &str,
        default: bool,
    ) -> RecordResult<bool> {
        Ok(match self.raw(record, field_name)? {
            Some(raw) => decode_boolean(&raw),
            None => default,
        })
    }

    /// Reads a timestamp field. Unset yields `default`; a stored value
    /// that does not parse yields the minimum timestamp.
    pub fn get_date_time(
        &self,
        record: &S::Record,
        field_name: &str,
        default: DateTime<Utc>,
    ) -> RecordResult<DateTime<Utc>> {
        Ok(match self.raw(record, field_name)? {
            Some(raw) => decode_date_time(&raw),
            None => default,
        })
    }

    /// Reads a single-valued lookup field. Unset or undecodable yields
    /// the zero lookup value (`lookup_id = 0`, empty text).
    pub fn get_lookup(&self, record: &S::Record, field_name: &str) -> RecordResult<LookupValue> {
        Ok(match self.raw(record, field_name)? {
            Some(raw) => decode_lookup(&raw),
            None => LookupValue::zero(),
        })
    }

    /// Reads just the display text of a lookup field.
    pub fn get_lookup_text(&self, record: &S::Record, field_name: &str) -> RecordResult<String> {
        Ok(self.get_lookup(record, field_name)?.display_text)
    }

    /// Reads just the referenced id of a lookup field.
    pub fn get_lookup_id(&self, record: &S::Record, field_name: &str) -> RecordResult<i64> {
        Ok(self.get_lookup(record, field_name)?.lookup_id)
    }

    /// Reads a multi-valued lookup field in storage order, duplicates
    /// preserved. Unset yields an empty collection.
    pub fn get_lookup_multi(
        &self,
        record: &S::Record,
        field_name: &str,
    ) -> RecordResult<LookupValueCollection> {
        Ok(match self.raw(record, field_name)? {
            Some(raw) => decode_lookup_multi(&raw),
            None => LookupValueCollection::new(),
        })
    }

    /// Reads a user field. An unset field is `None` — there is no
    /// default principal.
    pub fn get_user(
        &self,
        record: &S::Record,
        field_name: &str,
    ) -> RecordResult<Option<PrincipalRef>> {
        Ok(self.raw(record, field_name)?.as_ref().and_then(decode_user))
    }

    /// Reads a multi-valued user field in storage order.
    pub fn get_user_multi(
        &self,
        record: &S::Record,
        field_name: &str,
    ) -> RecordResult<Vec<PrincipalRef>> {
        Ok(match self.raw(record, field_name)? {
            Some(raw) => decode_user_multi(&raw),
            None => Vec::new(),
        })
    }

    /// Reads the individual choices of a multi-choice field.
    pub fn get_choices(&self, record: &S::Record, field_name: &str) -> RecordResult<Vec<String>> {
        Ok(match self.raw(record, field_name)? {
            Some(raw) => decode_choices(&raw),
            None => Vec::new(),
        })
    }

    /// Reads a multi-choice field joined into a single string with the
    /// caller's separator. No separator follows the final element.
    pub fn get_multi_choice(
        &self,
        record: &S::Record,
        field_name: &str,
        separator: &str,
    ) -> RecordResult<String> {
        Ok(self.get_choices(record, field_name)?.join(separator))
    }

    /// Returns the human-facing display title of a field.
    pub fn display_name(&self, field_name: &str) -> RecordResult<String> {
        Ok(self.store.resolve_field(field_name)?.display_name)
    }

    // ── Writes ───────────────────────────────────────────────────

    fn set(&self, record: &mut S::Record, field_name: &str, value: RawValue) -> RecordResult<()> {
        let def = self.store.resolve_field(field_name)?;
        self.store.set_raw(record, &def.id, value);
        Ok(())
    }

    pub fn set_text(
        &self,
        record: &mut S::Record,
        field_name: &str,
        value: impl Into<String>,
    ) -> RecordResult<()> {
        self.set(record, field_name, RawValue::Text(value.into()))
    }

    pub fn set_integer(
        &self,
        record: &mut S::Record,
        field_name: &str,
        value: i64,
    ) -> RecordResult<()> {
        self.set(record, field_name, RawValue::Number(value as f64))
    }

    pub fn set_real(
        &self,
        record: &mut S::Record,
        field_name: &str,
        value: f64,
    ) -> RecordResult<()> {
        self.set(record, field_name, RawValue::Number(value))
    }

    pub fn set_boolean(
        &self,
        record: &mut S::Record,
        field_name: &str,
        value: bool,
    ) -> RecordResult<()> {
        self.set(record, field_name, RawValue::Boolean(value))
    }

    pub fn set_date_time(
        &self,
        record: &mut S::Record,
        field_name: &str,
        value: DateTime<Utc>,
    ) -> RecordResult<()> {
        self.set(record, field_name, RawValue::DateTime(value))
    }

    /// Writes an optional timestamp; `None` clears the field.
    pub fn set_date_time_opt(
        &self,
        record: &mut S::Record,
        field_name: &str,
        value: Option<DateTime<Utc>>,
    ) -> RecordResult<()> {
        match value {
            Some(dt) => self.set_date_time(record, field_name, dt),
            None => {
                let def = self.store.resolve_field(field_name)?;
                self.store.clear_raw(record, &def.id);
                Ok(())
            }
        }
    }

    pub fn set_lookup(
        &self,
        record: &mut S::Record,
        field_name: &str,
        lookup_id: i64,
        display_text: &str,
    ) -> RecordResult<()> {
        self.set_lookup_value(record, field_name, LookupValue::new(lookup_id, display_text))
    }

    pub fn set_lookup_value(
        &self,
        record: &mut S::Record,
        field_name: &str,
        value: LookupValue,
    ) -> RecordResult<()> {
        self.set(record, field_name, RawValue::Lookup(value))
    }

    pub fn set_lookup_multi(
        &self,
        record: &mut S::Record,
        field_name: &str,
        values: LookupValueCollection,
    ) -> RecordResult<()> {
        self.set(record, field_name, RawValue::LookupMulti(values))
    }

    pub fn set_multi_choice(
        &self,
        record: &mut S::Record,
        field_name: &str,
        choices: &[String],
    ) -> RecordResult<()> {
        self.set(record, field_name, RawValue::MultiChoice(choices.to_vec()))
    }

    /// Writes a user reference directly, using the principal's own
    /// context.
    pub fn set_user(
        &self,
        record: &mut S::Record,
        field_name: &str,
        principal: &PrincipalRef,
    ) -> RecordResult<()> {
        self.set(record, field_name, RawValue::User(principal.clone()))
    }

    /// Materializes the principal within the target scope, then writes
    /// a reference to the materialized principal.
    ///
    /// If the principal cannot be materialized the write fails with
    /// [`RecordError::IdentityResolution`] and the record is untouched.
    pub fn set_user_ensured(
        &self,
        record: &mut S::Record,
        field_name: &str,
        principal: &PrincipalRef,
        resolver: &impl PrincipalResolver,
    ) -> RecordResult<()> {
        let def = self.store.resolve_field(field_name)?;
        let ensured = resolver.ensure_principal(&principal.login_name)?;
        self.store.set_raw(record, &def.id, RawValue::User(ensured));
        Ok(())
    }

    /// Writes a user reference resolved by scope-local id.
    pub fn set_user_by_id(
        &self,
        record: &mut S::Record,
        field_name: &str,
        id: i64,
        resolver: &impl PrincipalResolver,
    ) -> RecordResult<()> {
        let def = self.store.resolve_field(field_name)?;
        let principal = resolver
            .principal_by_id(id)
            .ok_or_else(|| RecordError::IdentityResolution(format!("no principal with id {id}")))?;
        self.store.set_raw(record, &def.id, RawValue::User(principal));
        Ok(())
    }

    pub fn set_user_multi(
        &self,
        record: &mut S::Record,
        field_name: &str,
        principals: &[PrincipalRef],
    ) -> RecordResult<()> {
        self.set(record, field_name, RawValue::UserMulti(principals.to_vec()))
    }

    // ── Multi-value membership probes ────────────────────────────

    /// True iff at least one decoded lookup value matches `predicate`.
    ///
    /// Unlike the permissive getters, this validates the field's kind:
    /// applying it to a non-lookup field fails with
    /// [`RecordError::SchemaMismatch`]. An unset field is `false`.
    pub fn contains_in_multi(
        &self,
        record: &S::Record,
        field_name: &str,
        predicate: impl Fn(&LookupValue) -> bool,
    ) -> RecordResult<bool> {
        let def = self.store.resolve_field(field_name)?;
        if !matches!(def.kind, FieldKind::Lookup | FieldKind::LookupMulti) {
            return Err(RecordError::SchemaMismatch {
                field: field_name.to_string(),
                expected: FieldKind::LookupMulti,
                actual: def.kind,
            });
        }
        let values = match self.store.get_raw(record, &def.id) {
            Some(raw) => decode_lookup_multi(&raw),
            None => return Ok(false),
        };
        Ok(values.iter().any(predicate))
    }

    /// True iff the multi-valued lookup field references `lookup_id`.
    pub fn contains_lookup_id(
        &self,
        record: &S::Record,
        field_name: &str,
        lookup_id: i64,
    ) -> RecordResult<bool> {
        self.contains_in_multi(record, field_name, |v| v.lookup_id == lookup_id)
    }

    /// True iff the multi-valued lookup field carries `display_text`,
    /// compared case-insensitively.
    pub fn contains_lookup_text(
        &self,
        record: &S::Record,
        field_name: &str,
        display_text: &str,
    ) -> RecordResult<bool> {
        self.contains_in_multi(record, field_name, |v| {
            v.display_text.eq_ignore_ascii_case(display_text)
        })
    }
}

// ── Decoding rules ───────────────────────────────────────────────

fn decode_text(raw: &RawValue) -> String {
    match raw {
        RawValue::Text(s) => s.clone(),
        RawValue::Number(n) => format_number(*n),
        RawValue::Boolean(b) => b.to_string(),
        RawValue::DateTime(dt) => dt.to_rfc3339(),
        RawValue::Lookup(v) => v.to_string(),
        RawValue::LookupMulti(c) => c.to_string(),
        RawValue::User(p) => p.to_string(),
        RawValue::UserMulti(ps) => ps
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(";#"),
        RawValue::MultiChoice(cs) => cs.join(";#"),
    }
}

/// Integral doubles render without a fractional part.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

fn decode_integer(raw: &RawValue) -> i64 {
    match raw {
        RawValue::Number(n) => *n as i64,
        RawValue::Text(s) => s.trim().parse().unwrap_or(0),
        RawValue::Boolean(b) => i64::from(*b),
        _ => 0,
    }
}

fn decode_real(raw: &RawValue) -> f64 {
    match raw {
        RawValue::Number(n) => *n,
        RawValue::Text(s) => s.trim().parse().unwrap_or(0.0),
        RawValue::Boolean(b) => f64::from(u8::from(*b)),
        _ => 0.0,
    }
}

fn decode_boolean(raw: &RawValue) -> bool {
    match raw {
        RawValue::Boolean(b) => *b,
        RawValue::Text(s) => s.trim().eq_ignore_ascii_case("true"),
        RawValue::Number(n) => *n != 0.0,
        _ => false,
    }
}

fn decode_date_time(raw: &RawValue) -> DateTime<Utc> {
    match raw {
        RawValue::DateTime(dt) => *dt,
        RawValue::Text(s) => DateTime::parse_from_rfc3339(s.trim())
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or(DateTime::<Utc>::MIN_UTC),
        _ => DateTime::<Utc>::MIN_UTC,
    }
}

fn decode_lookup(raw: &RawValue) -> LookupValue {
    match raw {
        RawValue::Lookup(v) => v.clone(),
        RawValue::Text(s) => LookupValue::from_str(s).unwrap_or_default(),
        _ => LookupValue::zero(),
    }
}

fn decode_lookup_multi(raw: &RawValue) -> LookupValueCollection {
    match raw {
        RawValue::LookupMulti(c) => c.clone(),
        RawValue::Lookup(v) => vec![v.clone()].into(),
        RawValue::Text(s) => LookupValueCollection::from_str(s).unwrap_or_default(),
        _ => LookupValueCollection::new(),
    }
}

fn decode_user(raw: &RawValue) -> Option<PrincipalRef> {
    match raw {
        RawValue::User(p) => Some(p.clone()),
        RawValue::Text(s) => PrincipalRef::from_str(s).ok(),
        _ => None,
    }
}

fn decode_user_multi(raw: &RawValue) -> Vec<PrincipalRef> {
    match raw {
        RawValue::UserMulti(ps) => ps.clone(),
        RawValue::User(p) => vec![p.clone()],
        RawValue::Text(s) => LookupValueCollection::from_str(s)
            .map(|c| {
                c.into_iter()
                    .map(|v| PrincipalRef::new(v.lookup_id, "").with_display_name(v.display_text))
                    .collect()
            })
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

fn decode_choices(raw: &RawValue) -> Vec<String> {
    match raw {
        RawValue::MultiChoice(cs) => cs.clone(),
        RawValue::Text(s) => s
            .split(";#")
            .filter(|part| !part.is_empty())
            .map(ToString::to_string)
            .collect(),
        _ => Vec::new(),
    }
}
