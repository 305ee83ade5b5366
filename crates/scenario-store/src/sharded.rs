//! Lock-sharded store
//!
//! Provides [`ShardedScenarioStore`], keyed by canonical name on a DashMap.

use crate::record::ScenarioRecord;
use crate::store::{ScenarioStore, StoreError};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use scenario_name::ScenarioName;
use std::sync::atomic::{AtomicU64, Ordering};

/// Scenario store sharded by canonical name
///
/// Names are independent keys, so writers only contend when their names
/// hash to the same shard. The check-and-insert runs under the shard's write
/// lock through the entry API.
///
/// Each record carries an insertion sequence number so `list()` returns
/// records in creation order.
#[derive(Debug, Default)]
pub struct ShardedScenarioStore {
    records: DashMap<ScenarioName, Sequenced>,
    next_seq: AtomicU64,
}

#[derive(Debug, Clone)]
struct Sequenced {
    seq: u64,
    record: ScenarioRecord,
}

impl ShardedScenarioStore {
    /// Create empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create empty store with room for `capacity` records
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: DashMap::with_capacity(capacity),
            next_seq: AtomicU64::new(0),
        }
    }
}

impl ScenarioStore for ShardedScenarioStore {
    fn exists(&self, name: &ScenarioName) -> bool {
        self.records.contains_key(name)
    }

    fn insert(&self, record: ScenarioRecord) -> Result<(), StoreError> {
        match self.records.entry(record.name().clone()) {
            Entry::Occupied(existing) => Err(StoreError::AlreadyExists {
                name: existing.key().clone(),
            }),
            Entry::Vacant(slot) => {
                let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
                slot.insert(Sequenced { seq, record });
                Ok(())
            }
        }
    }

    fn get(&self, name: &ScenarioName) -> Option<ScenarioRecord> {
        self.records.get(name).map(|entry| entry.record.clone())
    }

    fn list(&self) -> Vec<ScenarioRecord> {
        let mut all: Vec<Sequenced> = self
            .records
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        all.sort_by_key(|s| s.seq);
        all.into_iter().map(|s| s.record).collect()
    }

    fn remove(&self, name: &ScenarioName) -> Result<ScenarioRecord, StoreError> {
        self.records
            .remove(name)
            .map(|(_, removed)| removed.record)
            .ok_or_else(|| StoreError::NotFound { name: name.clone() })
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
