//! patronage — normalize CSV transaction exports.
//!
//! The binary is a thin [`clap`] wrapper around the three command functions
//! here, which only need a reader, a writer or a [`RecordStore`], so the
//! integration harnesses drive them directly.
//!
//! ```text
//! convert   CSV ──► normalize (all rows) ──► {"records": [...]}
//! import    CSV ──► normalize (row by row) ──► RecordStore::insert
//! drop-all                                   RecordStore::drop_all
//! ```

use std::io::{Read, Write};

use anyhow::Context;
use patronage_core::{normalize_reader, NormalizedRecord, RecordsDocument};
use patronage_store::RecordStore;

/// Normalize every row of `input` and write one records document to the
/// writer produced by `open_output`.
///
/// The writer is only requested once every row normalized, so a failing run
/// leaves no partial output behind. Returns the number of records written.
pub fn convert<R, W, F>(input: R, open_output: F, pretty: bool) -> anyhow::Result<usize>
where
    R: Read,
    W: Write,
    F: FnOnce() -> anyhow::Result<W>,
{
    let records = normalize_reader(input)
        .enumerate()
        .map(|(idx, record)| record.with_context(|| format!("row {}", idx + 1)))
        .collect::<anyhow::Result<Vec<NormalizedRecord>>>()?;

    let document = RecordsDocument::new(records);
    let output = open_output()?;
    document
        .write_to(output, pretty)
        .context("writing records document")?;

    tracing::info!(records = document.len(), "convert finished");
    Ok(document.len())
}

/// Normalize `input` lazily and insert each record as soon as it is ready.
///
/// Records before a failing row stay in the store. Returns how many were
/// inserted.
pub fn import<R, S>(input: R, store: &mut S) -> anyhow::Result<usize>
where
    R: Read,
    S: RecordStore + ?Sized,
{
    let mut inserted = 0;
    for (idx, record) in normalize_reader(input).enumerate() {
        let record = record.with_context(|| {
            format!("row {} (after {inserted} records were imported)", idx + 1)
        })?;
        store
            .insert(&record)
            .with_context(|| format!("inserting row {}", idx + 1))?;
        inserted += 1;
    }

    tracing::info!(records = inserted, "import finished");
    Ok(inserted)
}

/// Empty the store and report progress to `report`. Returns how many
/// records it held.
///
/// The count in the report is the one [`RecordStore::drop_all`] returns, so
/// the store is asked only once.
pub fn drop_all<S, W>(store: &mut S, mut report: W) -> anyhow::Result<u64>
where
    S: RecordStore + ?Sized,
    W: Write,
{
    writeln!(report, "Removing objects from collection ...")?;
    let removed = store.drop_all().context("dropping collection")?;
    tracing::info!(records = removed, "collection dropped");
    writeln!(report, "... Done, {removed} objects removed")?;
    report.flush()?;
    Ok(removed)
}
