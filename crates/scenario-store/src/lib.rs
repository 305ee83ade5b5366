//! Scenario Store
//!
//! Keyed collection of scenario records, unique by canonical name.
//!
//! # Overview
//!
//! - **ScenarioRecord**: an immutable registered scenario
//! - **ScenarioStore**: the store contract; insert is an atomic check-and-set
//! - **ShardedScenarioStore**: lock-sharded by canonical name (dashmap)
//! - **OrderedScenarioStore**: single reader-writer lock, insertion ordered
//!
//! # Example
//!
//! ```rust
//! use scenario_name::ScenarioName;
//! use scenario_store::{ResourceRef, ScenarioRecord, ScenarioStore, ShardedScenarioStore};
//!
//! let store = ShardedScenarioStore::new();
//! let name: ScenarioName = "localhost:scenario_0001".parse().unwrap();
//! let record = ScenarioRecord::new(name.clone(), ResourceRef::new("/scenarios/objects", &name));
//!
//! store.insert(record.clone()).unwrap();
//! assert!(store.exists(&name));
//! assert!(store.insert(record).is_err());
//! ```

#![warn(missing_docs)]

pub mod ordered;
pub mod record;
pub mod sharded;
pub mod store;

// Re-exports
pub use ordered::OrderedScenarioStore;
pub use record::{ResourceRef, ScenarioRecord};
pub use sharded::ShardedScenarioStore;
pub use store::{ScenarioStore, StoreError};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for store operations
    pub use crate::{
        OrderedScenarioStore, ResourceRef, ScenarioRecord, ScenarioStore, ShardedScenarioStore,
        StoreError,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
