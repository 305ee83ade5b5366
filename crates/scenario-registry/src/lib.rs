//! Scenario Registry
//!
//! The service that owns the scenario namespace:
//! - Decodes create requests and extracts the scenario name
//! - Validates and canonicalizes names (default host applied)
//! - Inserts into the store with atomic duplicate detection
//! - Derives stable resource references
//! - Maps every failure onto a typed error with a fixed status and reason
//!
//! # Example
//!
//! ```rust
//! use scenario_registry::{RegistryConfig, RegistryService};
//!
//! let registry = RegistryService::from_config(&RegistryConfig::default());
//!
//! let created = registry.create_scenario(br#"{"scenario": "scenario_0001"}"#).unwrap();
//! assert_eq!(
//!     created.value().resource_ref().as_str(),
//!     "/scenarios/objects/localhost:scenario_0001"
//! );
//!
//! let again = registry.create_scenario(br#"{"scenario": "scenario_0001"}"#).unwrap_err();
//! assert_eq!(again.status(), 422);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod config;
pub mod error;
pub mod reply;
pub mod request;
pub mod service;

// Re-exports for convenience
pub use config::{ConfigError, RegistryConfig, StoreKind, DEFAULT_RESOURCE_PREFIX};
pub use error::{ErrorKind, RegistryError, NAME_NOT_SUPPLIED, NO_JSON_BODY};
pub use reply::{DeletedScenario, Reply, ScenarioListing, JSON_CONTENT_TYPE};
pub use request::{decode_body, scenario_field, CreateScenarioRequest, SCENARIO_FIELD};
pub use service::{Created, RegistryService};

pub use scenario_name::{HostName, ScenarioName};
pub use scenario_store::{ResourceRef, ScenarioRecord, ScenarioStore};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the registry
    pub use crate::{
        Created, ErrorKind, RegistryConfig, RegistryError, RegistryService, Reply,
        ScenarioListing, ScenarioName, ScenarioRecord, ScenarioStore,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
