//! patronage-core — the record normalization pipeline.
//!
//! # Architecture
//!
//! ```text
//! RowSource ──► RecordNormalizer ──► sink
//!   (csv)          (lazy)            ├── RecordsDocument (JSON text)
//!                                    └── RecordStore (patronage-store)
//! ```
//!
//! Nothing here knows about storage backends. Sinks pull records one at a
//! time and stop at the first error.

pub mod config;
pub mod date;
pub mod error;
pub mod export;
pub mod normalizer;
pub mod source;
pub mod types;

pub use date::parse_ugly_date;
pub use error::NormalizeError;
pub use export::RecordsDocument;
pub use normalizer::{normalize_row, RecordNormalizer};
pub use source::{normalize_reader, RowSource};
pub use types::{FieldValue, NormalizedRecord, RawRow};
