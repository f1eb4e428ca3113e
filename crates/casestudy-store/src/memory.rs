//! In-memory record store

use async_trait::async_trait;
use dashmap::DashMap;

use crate::error::StoreError;
use crate::record::{CaseStudyRecord, RecordId};
use crate::RecordStore;

/// Concurrent in-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: DashMap<RecordId, CaseStudyRecord>,
}

impl MemoryStore {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn get(&self, id: &RecordId) -> Result<Option<CaseStudyRecord>, StoreError> {
        Ok(self.records.get(id).map(|r| r.value().clone()))
    }

    async fn put(&self, record: CaseStudyRecord) -> Result<(), StoreError> {
        self.records.insert(record.id.clone(), record);
        Ok(())
    }

    async fn delete(&self, id: &RecordId) -> Result<bool, StoreError> {
        Ok(self.records.remove(id).is_some())
    }

    async fn list(&self) -> Result<Vec<RecordId>, StoreError> {
        let mut ids: Vec<_> = self.records.iter().map(|r| r.key().clone()).collect();
        ids.sort();
        Ok(ids)
    }
}
