//! Core types for patronage-core.
//!
//! This module defines the data that flows through the pipeline: the
//! [`RawRow`] read from the delimited source, the typed [`FieldValue`], and
//! the [`NormalizedRecord`] handed to a sink.

use chrono::NaiveDateTime;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// ISO-8601 combined date-time without a zone suffix. Seconds are always
/// written so the output re-parses with the same format.
pub const ISO_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// One row of the tabular source with every value still as text.
///
/// Columns keep the header order. A row shorter than the header still lists
/// every column; the trailing ones carry no value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    fields: Vec<(String, Option<String>)>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column. Order of calls is the column order.
    pub fn push(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.push((column.into(), Some(value.into())));
    }

    /// Append a column the row has no value for.
    pub fn push_missing(&mut self, column: impl Into<String>) {
        self.fields.push((column.into(), None));
    }

    /// Value of the first column named `column`. `None` if the column is
    /// absent or has no value in this row.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .and_then(|(_, value)| value.as_deref())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn into_fields(self) -> Vec<(String, Option<String>)> {
        self.fields
    }
}

impl<K, V> FromIterator<(K, V)> for RawRow
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), Some(v.into())))
                .collect(),
        }
    }
}

/// A single normalized value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Passed through unchanged from the source.
    Text(String),
    /// Pass-through column the source row had no value for.
    Null,
    /// Naive calendar timestamp, minute precision.
    Timestamp(NaiveDateTime),
    Float(f64),
    Integer(i64),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            FieldValue::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            FieldValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{s}"),
            FieldValue::Null => Ok(()),
            FieldValue::Timestamp(ts) => write!(f, "{}", ts.format(ISO_DATETIME_FORMAT)),
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::Integer(v) => write!(f, "{v}"),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Text(s) => serializer.serialize_str(s),
            FieldValue::Null => serializer.serialize_none(),
            FieldValue::Timestamp(ts) => {
                serializer.collect_str(&ts.format(ISO_DATETIME_FORMAT))
            }
            FieldValue::Float(v) => serializer.serialize_f64(*v),
            FieldValue::Integer(v) => serializer.serialize_i64(*v),
        }
    }
}

/// A row after coercion. Same columns, same order as the [`RawRow`] it was
/// built from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedRecord {
    fields: Vec<(String, FieldValue)>,
}

impl NormalizedRecord {
    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<K: Into<String>> FromIterator<(K, FieldValue)> for NormalizedRecord {
    fn from_iter<T: IntoIterator<Item = (K, FieldValue)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl Serialize for NormalizedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
