//! Error taxonomy for the normalization pipeline.
//!
//! None of these are retried or skipped. The first one aborts the run.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NormalizeError {
    /// Input does not match `M/D/YY H:MM`, or matches it but names an
    /// impossible calendar date or time.
    #[error("malformed date: cannot parse date for {value:?}")]
    MalformedDate { value: String },

    /// A numeric column is not a valid literal after its cleanup rule.
    #[error("malformed number in {field}: {value:?}")]
    MalformedNumber { field: &'static str, value: String },

    /// A required column is absent from the row.
    #[error("missing field: {field}")]
    MissingField { field: &'static str },

    /// The delimited-text reader failed (I/O, invalid UTF-8, bad quoting).
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
}

impl NormalizeError {
    pub(crate) fn malformed_date(value: &str) -> Self {
        NormalizeError::MalformedDate {
            value: value.to_string(),
        }
    }

    pub(crate) fn malformed_number(field: &'static str, value: &str) -> Self {
        NormalizeError::MalformedNumber {
            field,
            value: value.to_string(),
        }
    }
}
