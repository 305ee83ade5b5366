//! Insertion-ordered store behind one reader-writer lock

use crate::record::ScenarioRecord;
use crate::store::{ScenarioStore, StoreError};
use indexmap::map::Entry;
use indexmap::IndexMap;
use parking_lot::RwLock;
use scenario_name::ScenarioName;

/// Scenario store with a single exclusive-write / shared-read lock
///
/// Simpler than [`ShardedScenarioStore`](crate::ShardedScenarioStore): every
/// write serializes on one lock. Records keep their insertion order;
/// removal shifts later records down rather than swapping.
#[derive(Debug, Default)]
pub struct OrderedScenarioStore {
    records: RwLock<IndexMap<ScenarioName, ScenarioRecord>>,
}

impl OrderedScenarioStore {
    /// Create empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScenarioStore for OrderedScenarioStore {
    fn exists(&self, name: &ScenarioName) -> bool {
        self.records.read().contains_key(name)
    }

    fn insert(&self, record: ScenarioRecord) -> Result<(), StoreError> {
        let mut records = self.records.write();
        match records.entry(record.name().clone()) {
            Entry::Occupied(existing) => Err(StoreError::AlreadyExists {
                name: existing.key().clone(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }

    fn get(&self, name: &ScenarioName) -> Option<ScenarioRecord> {
        self.records.read().get(name).cloned()
    }

    fn list(&self) -> Vec<ScenarioRecord> {
        self.records.read().values().cloned().collect()
    }

    fn remove(&self, name: &ScenarioName) -> Result<ScenarioRecord, StoreError> {
        self.records
            .write()
            .shift_remove(name)
            .ok_or_else(|| StoreError::NotFound { name: name.clone() })
    }

    fn len(&self) -> usize {
        self.records.read().len()
    }
}
