//! patronage-store — destinations for normalized records.
//!
//! The import commands only see [`RecordStore`]. [`MemoryStore`] backs the
//! tests; [`MongoStore`] talks to a MongoDB server.

pub mod memory;
pub mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

use patronage_core::NormalizedRecord;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("mongodb: {0}")]
    Backend(#[from] mongodb::error::Error),

    #[error("cannot encode field {field} for storage: {reason}")]
    Encode { field: String, reason: String },
}

/// Capability interface of a record destination.
///
/// Whether [`RecordStore::drop_all`] is atomic with respect to a concurrent
/// importer is up to the backend and not guaranteed.
pub trait RecordStore {
    /// Persist one record.
    fn insert(&mut self, record: &NormalizedRecord) -> Result<(), StoreError>;

    /// Number of records currently stored.
    fn count(&self) -> Result<u64, StoreError>;

    /// Remove every record. Returns how many were present beforehand.
    fn drop_all(&mut self) -> Result<u64, StoreError>;
}
