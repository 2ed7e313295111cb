//! Progress record persistence contract.

use crate::error::Result;
use crate::types::ProgressRecord;
use std::collections::HashMap;

/// Key-value persistence contract for progress records.
///
/// The engine never assumes a storage technology, only this shape, keyed
/// by item id. Writes are last-write-wins; the engine assumes a single
/// writer per item.
pub trait ProgressStore {
    /// Fetch the record for `id`, or `Ok(None)` if the item has never
    /// been reviewed.
    fn get(&self, id: &str) -> Result<Option<ProgressRecord>>;

    /// Insert or replace the record keyed by its id.
    fn set(&mut self, record: ProgressRecord) -> Result<()>;

    /// Snapshot of every stored record, in no particular order.
    fn all(&self) -> Result<Vec<ProgressRecord>>;
}

/// In-memory store, used in tests and as the default backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: HashMap<String, ProgressRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ProgressStore for MemoryStore {
    fn get(&self, id: &str) -> Result<Option<ProgressRecord>> {
        Ok(self.records.get(id).cloned())
    }

    fn set(&mut self, record: ProgressRecord) -> Result<()> {
        self.records.insert(record.id.clone(), record);
        Ok(())
    }

    fn all(&self) -> Result<Vec<ProgressRecord>> {
        Ok(self.records.values().cloned().collect())
    }
}
