//! Row source — turns delimited text with a header line into [`RawRow`]s.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter};

use crate::error::NormalizeError;
use crate::normalizer::RecordNormalizer;
use crate::types::RawRow;

/// Iterator of [`RawRow`]s read from CSV text.
///
/// Headers are read when the source is built. Every row lists every header
/// column: a row shorter than the header leaves its trailing columns without
/// a value, and values past the header width are dropped.
pub struct RowSource<R> {
    headers: Option<Vec<String>>,
    records: StringRecordsIntoIter<R>,
    header_error: Option<csv::Error>,
}

impl<R: Read> RowSource<R> {
    pub fn new(reader: R) -> Self {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let (headers, header_error) = match reader.headers() {
            Ok(headers) => (Some(clean_headers(headers)), None),
            Err(e) => (None, Some(e)),
        };

        Self {
            headers,
            records: reader.into_records(),
            header_error,
        }
    }

    /// Column names from the header line, once it has been read successfully.
    pub fn headers(&self) -> Option<&[String]> {
        self.headers.as_deref()
    }
}

fn clean_headers(headers: &StringRecord) -> Vec<String> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            if idx == 0 {
                name.trim_start_matches('\u{feff}').to_string()
            } else {
                name.to_string()
            }
        })
        .collect()
}

impl<R: Read> Iterator for RowSource<R> {
    type Item = Result<RawRow, NormalizeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(e) = self.header_error.take() {
            return Some(Err(e.into()));
        }
        let headers = self.headers.as_ref()?;
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(e) => return Some(Err(e.into())),
        };

        if record.len() > headers.len() {
            tracing::debug!(
                line = ?record.position().map(|p| p.line()),
                extra = record.len() - headers.len(),
                "ignoring values past the header width"
            );
        }

        let mut row = RawRow::new();
        for (idx, name) in headers.iter().enumerate() {
            match record.get(idx) {
                Some(value) => row.push(name.as_str(), value),
                None => row.push_missing(name.as_str()),
            }
        }
        Some(Ok(row))
    }
}

/// Read CSV from `reader` and normalize it lazily, one row per pull.
pub fn normalize_reader<R: Read>(reader: R) -> RecordNormalizer<RowSource<R>> {
    RecordNormalizer::new(RowSource::new(reader))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
