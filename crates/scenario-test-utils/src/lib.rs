//! Testing utilities for the scenario registry workspace
//!
//! Shared fixtures, request bodies and tracing setup.

#![allow(missing_docs)]

use scenario_name::ScenarioName;
use scenario_registry::{RegistryConfig, RegistryService, StoreKind};
use scenario_store::{ResourceRef, ScenarioRecord};
use std::sync::Once;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Prefix the original REST API mounts scenario objects under
pub const STUBO_V2_PREFIX: &str = "/stubo/api/v2/scenarios/objects";

static TRACING: Once = Once::new();

/// Install a test-friendly fmt subscriber once per process
///
/// Honors `RUST_LOG`; defaults to `warn`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_test_writer())
            .try_init();
    });
}

/// JSON create body for `name`
pub fn create_body(name: &str) -> Vec<u8> {
    serde_json::json!({ "scenario": name }).to_string().into_bytes()
}

/// Registry with default configuration and the given backend
pub fn registry(store: StoreKind) -> RegistryService {
    init_tracing();
    RegistryService::from_config(&RegistryConfig::new().with_store(store))
}

/// Registry using the original service's resource prefix
pub fn stubo_registry() -> RegistryService {
    init_tracing();
    RegistryService::from_config(&RegistryConfig::new().with_resource_prefix(STUBO_V2_PREFIX))
}

/// Registry built from a TOML document
pub fn registry_from_toml(source: &str) -> anyhow::Result<RegistryService> {
    init_tracing();
    let config = RegistryConfig::from_toml_str(source)?;
    Ok(RegistryService::from_config(&config))
}

/// Record under the default prefix for a canonical name
pub fn record(canonical: &str) -> anyhow::Result<ScenarioRecord> {
    let name: ScenarioName = canonical.parse()?;
    let resource_ref = ResourceRef::new(scenario_registry::DEFAULT_RESOURCE_PREFIX, &name);
    Ok(ScenarioRecord::new(name, resource_ref))
}

/// Every store backend, for tests that must hold for all of them
pub const ALL_STORES: [StoreKind; 2] = [StoreKind::Sharded, StoreKind::Ordered];
