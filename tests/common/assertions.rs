//! Domain-specific assertion macros for patronage harnesses.
//!
//! These add context to failures so it is clear which column broke which
//! rule.

use chrono::{Datelike, NaiveDateTime, Timelike};
use patronage_core::{FieldValue, NormalizedRecord};

/// Assert that a record's column holds a timestamp with the given
/// `(year, month, day, hour, minute)`.
///
/// ```rust
/// assert_timestamp!(record, "Last_Login", (2015, 1, 2, 3, 4));
/// ```
#[macro_export]
macro_rules! assert_timestamp {
    ($record:expr, $column:expr, $expected:expr) => {{
        let record: &patronage_core::NormalizedRecord = &$record;
        let column: &str = $column;
        match record.get(column) {
            Some(patronage_core::FieldValue::Timestamp(ts)) => {
                assert_eq!($crate::common::ymdhm(ts), $expected, "column {:?}", column)
            }
            other => panic!(
                "assert_timestamp! failed: column {:?} is {:?}, expected a timestamp",
                column, other
            ),
        }
    }};
}

/// `(year, month, day, hour, minute)` of a timestamp.
pub fn ymdhm(ts: &NaiveDateTime) -> (i32, u32, u32, u32, u32) {
    (ts.year(), ts.month(), ts.day(), ts.hour(), ts.minute())
}

/// Assert that only the six recognized columns carry non-text values.
pub fn assert_only_recognized_columns_coerced(record: &NormalizedRecord) {
    const RECOGNIZED: [&str; 6] = [
        "Account_Created",
        "Last_Login",
        "Transaction_date",
        "Longitude",
        "Latitude",
        "Price",
    ];
    for (column, value) in record.iter() {
        let coerced = !matches!(value, FieldValue::Text(_) | FieldValue::Null);
        assert_eq!(
            coerced,
            RECOGNIZED.contains(&column),
            "column {column:?} has value {value:?}"
        );
    }
}
