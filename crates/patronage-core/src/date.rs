//! Parser for the `M/D/YY H:MM` timestamps found in the transaction exports.
//!
//! `strftime`-style parsers cannot express the pivot-year rule together with
//! one-or-two digit components, so the string is matched with a regex and the
//! pieces are assembled by hand.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

use crate::error::NormalizeError;

static UGLY_DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<month>[0-9]{1,2})/(?P<day>[0-9]{1,2})/(?P<year>[0-9]{2}) (?P<hour>[0-9]{1,2}):(?P<minute>[0-9]{2})")
        .expect("Invalid ugly date regex")
});

/// Two-digit years up to this value land in the 2000s, the rest in the 1900s.
pub const PIVOT_YEAR: i32 = 68;

/// Map a two-digit year onto a four-digit one.
pub fn calibrate_year(two_digit: i32) -> i32 {
    if two_digit <= PIVOT_YEAR {
        2000 + two_digit
    } else {
        1900 + two_digit
    }
}

/// Parse `M/D/YY H:MM` into a naive timestamp with zero seconds.
///
/// Only the start of the string has to match; anything after the minutes is
/// ignored.
pub fn parse_ugly_date(input: &str) -> Result<NaiveDateTime, NormalizeError> {
    let caps = UGLY_DATE_REGEX
        .captures(input)
        .ok_or_else(|| NormalizeError::malformed_date(input))?;

    let component = |name: &str| -> Result<u32, NormalizeError> {
        caps[name]
            .parse()
            .map_err(|_| NormalizeError::malformed_date(input))
    };

    let year = calibrate_year(component("year")? as i32);
    let (month, day) = (component("month")?, component("day")?);
    let (hour, minute) = (component("hour")?, component("minute")?);

    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .ok_or_else(|| NormalizeError::malformed_date(input))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
