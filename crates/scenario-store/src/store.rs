//! Store contract
//!
//! Provides the [`ScenarioStore`] trait implemented by every backend.

use crate::record::ScenarioRecord;
use scenario_name::ScenarioName;
use std::sync::Arc;

/// Keyed collection of scenario records
///
/// The store is the single source of truth for existence. `insert` is an
/// atomic check-and-set: concurrent inserts of one canonical name produce
/// exactly one success. Callers never get a separate exists-then-insert
/// path to race on.
pub trait ScenarioStore: Send + Sync {
    /// Whether a record with this canonical name exists
    fn exists(&self, name: &ScenarioName) -> bool;

    /// Insert a new record
    ///
    /// # Errors
    /// Returns [`StoreError::AlreadyExists`] if the canonical name is taken.
    /// The existing record is left untouched.
    fn insert(&self, record: ScenarioRecord) -> Result<(), StoreError>;

    /// Fetch a record by canonical name
    fn get(&self, name: &ScenarioName) -> Option<ScenarioRecord>;

    /// Snapshot of all records
    ///
    /// Ordering is implementation-defined; callers needing a specific order
    /// must sort.
    fn list(&self) -> Vec<ScenarioRecord>;

    /// Remove a record, returning it
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] if no such record exists.
    fn remove(&self, name: &ScenarioName) -> Result<ScenarioRecord, StoreError>;

    /// Number of stored records
    fn len(&self) -> usize;

    /// Whether the store is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: ScenarioStore + ?Sized> ScenarioStore for Box<S> {
    fn exists(&self, name: &ScenarioName) -> bool {
        (**self).exists(name)
    }

    fn insert(&self, record: ScenarioRecord) -> Result<(), StoreError> {
        (**self).insert(record)
    }

    fn get(&self, name: &ScenarioName) -> Option<ScenarioRecord> {
        (**self).get(name)
    }

    fn list(&self) -> Vec<ScenarioRecord> {
        (**self).list()
    }

    fn remove(&self, name: &ScenarioName) -> Result<ScenarioRecord, StoreError> {
        (**self).remove(name)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

impl<S: ScenarioStore + ?Sized> ScenarioStore for Arc<S> {
    fn exists(&self, name: &ScenarioName) -> bool {
        (**self).exists(name)
    }

    fn insert(&self, record: ScenarioRecord) -> Result<(), StoreError> {
        (**self).insert(record)
    }

    fn get(&self, name: &ScenarioName) -> Option<ScenarioRecord> {
        (**self).get(name)
    }

    fn list(&self) -> Vec<ScenarioRecord> {
        (**self).list()
    }

    fn remove(&self, name: &ScenarioName) -> Result<ScenarioRecord, StoreError> {
        (**self).remove(name)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// Store errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Canonical name already registered
    #[error("Scenario ({name}) already exists.")]
    AlreadyExists {
        /// Canonical scenario name
        name: ScenarioName,
    },

    /// No record under this canonical name
    #[error("Scenario ({name}) not found.")]
    NotFound {
        /// Canonical scenario name
        name: ScenarioName,
    },
}

impl StoreError {
    /// Canonical name the error refers to
    #[inline]
    #[must_use]
    pub fn name(&self) -> &ScenarioName {
        match self {
            Self::AlreadyExists { name } | Self::NotFound { name } => name,
        }
    }
}
