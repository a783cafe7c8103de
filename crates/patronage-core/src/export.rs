//! Export — the `{"records": [...]}` document written in text mode.

use std::io::Write;

use serde::Serialize;

use crate::types::NormalizedRecord;

/// Top-level JSON object holding every record in input order.
#[derive(Debug, Default, Serialize)]
pub struct RecordsDocument {
    pub records: Vec<NormalizedRecord>,
}

impl RecordsDocument {
    pub fn new(records: Vec<NormalizedRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serialize to `writer`, compact or pretty-printed, followed by a newline.
    pub fn write_to<W: Write>(&self, mut writer: W, pretty: bool) -> std::io::Result<()> {
        if pretty {
            serde_json::to_writer_pretty(&mut writer, self)?;
        } else {
            serde_json::to_writer(&mut writer, self)?;
        }
        writer.write_all(b"\n")?;
        writer.flush()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
