// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Records and their identifiers
//!
//! Records are schema-less JSON objects. The only field the store cares about
//! is `id`, which is always compared by its string form: a record stored with
//! `"id": 7` and one stored with `"id": "7"` carry the same identity.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A schema-less record: field name to JSON value, in insertion order
pub type Record = Map<String, Value>;

/// Name of the identity field every record carries
pub const ID_FIELD: &str = "id";

/// Normalized (string) record identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Normalize any JSON value into an identifier
    pub fn of(value: &Value) -> Self {
        Self(coerce_to_string(value))
    }

    /// Identifier of a stored table entry; `None` for non-objects or entries without `id`
    pub fn of_entry(entry: &Value) -> Option<Self> {
        entry.as_object().and_then(Self::of_record)
    }

    pub fn of_record(record: &Record) -> Option<Self> {
        record.get(ID_FIELD).map(Self::of)
    }

    /// The caller-supplied id of `data`, if it carries a present one.
    ///
    /// `null`, `false`, `0` and `""` count as absent, so the store assigns an id instead.
    pub fn supplied(data: &Record) -> Option<Self> {
        match data.get(ID_FIELD)? {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            other => Some(Self::of(other)),
        }
    }

    /// Non-negative integer prefix of the identifier, as decimal digits
    /// without leading zeros. Parsed leniently: `"12"`, `"012"` and `"12abc"`
    /// all give `"12"`. Negative and non-numeric ids give `None`.
    pub fn leading_digits(&self) -> Option<&str> {
        let s = self.0.trim_start();
        let digits = match s.as_bytes().first() {
            Some(b'-') => return None,
            Some(b'+') => &s[1..],
            _ => s,
        };
        let end = digits
            .bytes()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(digits.len());
        if end == 0 {
            return None;
        }
        match digits[..end].trim_start_matches('0') {
            "" => Some("0"),
            significant => Some(significant),
        }
    }

    /// Whether a stored table entry carries this identifier
    pub fn matches(&self, entry: &Value) -> bool {
        Self::of_entry(entry).as_ref() == Some(self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&String> for RecordId {
    fn from(s: &String) -> Self {
        Self(s.clone())
    }
}

impl From<&RecordId> for RecordId {
    fn from(id: &RecordId) -> Self {
        id.clone()
    }
}

impl From<&Value> for RecordId {
    fn from(value: &Value) -> Self {
        Self::of(value)
    }
}

impl From<u64> for RecordId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        Self(n.to_string())
    }
}

impl From<RecordId> for Value {
    fn from(id: RecordId) -> Self {
        Value::String(id.0)
    }
}

/// Next auto-assigned identifier for a table.
///
/// One more than the largest integer-prefixed id among the entries, or `"1"`
/// when none has one. Entries without a numeric id are ignored. Ids are
/// compared as digit strings, so arbitrarily long ids never wrap around.
pub fn next_id(entries: &[Value]) -> RecordId {
    let ids: Vec<RecordId> = entries.iter().filter_map(RecordId::of_entry).collect();
    let max = ids
        .iter()
        .filter_map(RecordId::leading_digits)
        .max_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)))
        .unwrap_or("0");
    RecordId(increment_digits(max))
}

/// Add one to a decimal digit string
fn increment_digits(digits: &str) -> String {
    let mut out: Vec<u8> = digits.bytes().collect();
    for digit in out.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return String::from_utf8_lossy(&out).into_owned();
        }
    }
    out.insert(0, b'1');
    String::from_utf8_lossy(&out).into_owned()
}

/// String form of a JSON value, as loosely-typed string coercion renders it.
///
/// Integral floats drop their fraction (`1.0` gives `"1"`). Magnitudes of
/// `1e21` and above or below `1e-6` use exponent form (`1e+21`, `1e-7`).
/// Arrays are comma-joined and objects collapse to `[object Object]`.
pub fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                return n.to_string();
            }
            match n.as_f64() {
                Some(f) if f == 0.0 => "0".to_string(),
                Some(f) => coerce_float(f),
                None => n.to_string(),
            }
        }
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => coerce_to_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Shortest round-trip rendering, switching to exponent form outside `[1e-6, 1e21)`
fn coerce_float(f: f64) -> String {
    let scientific = format!("{:e}", f);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return f.to_string();
    };
    match exponent.parse::<i32>() {
        Ok(exp) if exp >= 21 => format!("{}e+{}", mantissa, exp),
        Ok(exp) if exp < -6 => format!("{}e{}", mantissa, exp),
        _ => f.to_string(),
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
