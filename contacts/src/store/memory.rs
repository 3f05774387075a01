//! インメモリストア
//!
//! プロセス終了とともに破棄される。挿入順を保持する。

use async_trait::async_trait;
use contacts_common::types::{Record, RecordFilter, RecordPatch};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{ContactStore, RecordId, StoreResult};

#[derive(Debug, Clone)]
struct StoredRecord {
    id: RecordId,
    record: Record,
}

/// インメモリのレコードストア
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Arc<RwLock<Vec<StoredRecord>>>,
}

impl MemoryStore {
    /// 空のストアを作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactStore for MemoryStore {
    async fn insert(&self, record: Record) -> StoreResult<RecordId> {
        let id = Uuid::new_v4();
        self.records.write().await.push(StoredRecord { id, record });
        Ok(id)
    }

    async fn find_one(&self, filter: &RecordFilter) -> StoreResult<Option<Record>> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .find(|stored| filter.matches(&stored.record))
            .map(|stored| stored.record.clone()))
    }

    async fn find_many(&self, filter: &RecordFilter) -> StoreResult<Vec<Record>> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|stored| filter.matches(&stored.record))
            .map(|stored| stored.record.clone())
            .collect())
    }

    async fn replace_one(&self, filter: &RecordFilter, record: Record) -> StoreResult<u64> {
        let mut records = self.records.write().await;
        match records
            .iter_mut()
            .find(|stored| filter.matches(&stored.record))
        {
            Some(stored) => {
                stored.record = record;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn update_many(&self, filter: &RecordFilter, patch: &RecordPatch) -> StoreResult<u64> {
        let mut records = self.records.write().await;
        let mut matched = 0;
        for stored in records
            .iter_mut()
            .filter(|stored| filter.matches(&stored.record))
        {
            patch.apply(&mut stored.record);
            matched += 1;
        }
        Ok(matched)
    }

    async fn delete_one(&self, filter: &RecordFilter) -> StoreResult<u64> {
        let mut records = self.records.write().await;
        match records
            .iter()
            .position(|stored| filter.matches(&stored.record))
        {
            Some(idx) => {
                let removed = records.remove(idx);
                tracing::trace!(record_id = %removed.id, "Removed record from memory store");
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
