//! Normalizer — coerces a [`RawRow`] into a [`NormalizedRecord`].
//!
//! Six columns are recognized. The three date columns go through
//! [`parse_ugly_date`], the coordinates become floats and `Price` becomes an
//! integer once its thousands separators are removed. Every other column is
//! passed through as text, or as null when the row had no value for it.

use crate::date::parse_ugly_date;
use crate::error::NormalizeError;
use crate::types::{FieldValue, NormalizedRecord, RawRow};

pub const ACCOUNT_CREATED: &str = "Account_Created";
pub const LAST_LOGIN: &str = "Last_Login";
pub const TRANSACTION_DATE: &str = "Transaction_date";
pub const LONGITUDE: &str = "Longitude";
pub const LATITUDE: &str = "Latitude";
pub const PRICE: &str = "Price";

/// How a recognized column is coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Coercion {
    Date,
    Float,
    GroupedInteger,
}

/// Recognized columns in the order they are checked.
const COERCED_FIELDS: [(&str, Coercion); 6] = [
    (ACCOUNT_CREATED, Coercion::Date),
    (LAST_LOGIN, Coercion::Date),
    (TRANSACTION_DATE, Coercion::Date),
    (LONGITUDE, Coercion::Float),
    (LATITUDE, Coercion::Float),
    (PRICE, Coercion::GroupedInteger),
];

/// Parse a float literal, ignoring surrounding whitespace.
pub fn parse_float(field: &'static str, raw: &str) -> Result<f64, NormalizeError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| NormalizeError::malformed_number(field, raw))
}

/// Strip every `,` and parse what is left as an integer.
///
/// Stripping does not look at digit grouping: `"12,34"` is `1234`.
pub fn parse_grouped_integer(field: &'static str, raw: &str) -> Result<i64, NormalizeError> {
    let cleaned: String = raw.chars().filter(|c| *c != ',').collect();
    cleaned
        .trim()
        .parse::<i64>()
        .map_err(|_| NormalizeError::malformed_number(field, raw))
}

fn coerce(field: &'static str, coercion: Coercion, raw: &str) -> Result<FieldValue, NormalizeError> {
    match coercion {
        Coercion::Date => parse_ugly_date(raw).map(FieldValue::Timestamp),
        Coercion::Float => parse_float(field, raw).map(FieldValue::Float),
        Coercion::GroupedInteger => parse_grouped_integer(field, raw).map(FieldValue::Integer),
    }
}

/// Normalize one row.
///
/// Fails with [`NormalizeError::MissingField`] if any recognized column is
/// absent, otherwise with the first coercion error in [`COERCED_FIELDS`]
/// order.
pub fn normalize_row(row: RawRow) -> Result<NormalizedRecord, NormalizeError> {
    let mut coerced: Vec<(&'static str, FieldValue)> = Vec::with_capacity(COERCED_FIELDS.len());
    for (field, coercion) in COERCED_FIELDS {
        let raw = row
            .get(field)
            .ok_or(NormalizeError::MissingField { field })?;
        coerced.push((field, coerce(field, coercion, raw)?));
    }

    Ok(row
        .into_fields()
        .into_iter()
        .map(|(column, raw)| {
            let value = coerced
                .iter()
                .find(|(field, _)| *field == column)
                .map(|(_, value)| value.clone())
                .unwrap_or_else(|| raw.map_or(FieldValue::Null, FieldValue::Text));
            (column, value)
        })
        .collect())
}

// ---------------------------------------------------------------------------
// RecordNormalizer
// ---------------------------------------------------------------------------

/// Lazy, forward-only adapter from raw rows to normalized records.
///
/// One source row is consumed per `next()`. The first error is yielded once
/// and the iterator then stays exhausted; build a new one to start over.
pub struct RecordNormalizer<I> {
    rows: I,
    position: usize,
    failed: bool,
}

impl<I> RecordNormalizer<I>
where
    I: Iterator<Item = Result<RawRow, NormalizeError>>,
{
    pub fn new(rows: I) -> Self {
        Self {
            rows,
            position: 0,
            failed: false,
        }
    }

    /// Number of rows pulled from the source so far.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<I> Iterator for RecordNormalizer<I>
where
    I: Iterator<Item = Result<RawRow, NormalizeError>>,
{
    type Item = Result<NormalizedRecord, NormalizeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let row = self.rows.next()?;
        self.position += 1;

        let result = row.and_then(normalize_row);
        match &result {
            Ok(_) => tracing::trace!(row = self.position, "row normalized"),
            Err(e) => {
                tracing::debug!(row = self.position, error = %e, "normalization stopped");
                self.failed = true;
            }
        }
        Some(result)
    }
}

impl<I> std::iter::FusedIterator for RecordNormalizer<I> where
    I: std::iter::FusedIterator<Item = Result<RawRow, NormalizeError>>
{
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
