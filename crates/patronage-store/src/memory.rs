//! In-memory [`RecordStore`], kept in insertion order.

use patronage_core::NormalizedRecord;

use crate::{RecordStore, StoreError};

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    records: Vec<NormalizedRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[NormalizedRecord] {
        &self.records
    }
}

impl RecordStore for MemoryStore {
    fn insert(&mut self, record: &NormalizedRecord) -> Result<(), StoreError> {
        self.records.push(record.clone());
        Ok(())
    }

    fn count(&self) -> Result<u64, StoreError> {
        Ok(self.records.len() as u64)
    }

    fn drop_all(&mut self) -> Result<u64, StoreError> {
        let removed = self.records.len() as u64;
        self.records.clear();
        Ok(removed)
    }
}
