//! Scenario Registry Service
//!
//! Orchestrates decoding, validation and store access. Holds no scenario
//! state of its own: every existence question goes to the store.

use crate::config::{RegistryConfig, StoreKind};
use crate::error::RegistryError;
use crate::reply::{DeletedScenario, Reply, ScenarioListing};
use crate::request::CreateScenarioRequest;
use scenario_name::{NameValidator, ScenarioName};
use scenario_store::{
    OrderedScenarioStore, ResourceRef, ScenarioRecord, ScenarioStore, ShardedScenarioStore,
};
use std::fmt;

/// Successful creation, status 201
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Created<T>(T);

impl<T> Created<T> {
    /// Status code for a created resource
    pub const STATUS: u16 = 201;

    /// Created value
    #[inline]
    #[must_use]
    pub fn value(&self) -> &T {
        &self.0
    }

    /// Unwrap the created value
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> T {
        self.0
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> u16 {
        Self::STATUS
    }
}

/// Scenario registry
///
/// Safe to share across request handlers behind an `Arc`; the only critical
/// section is the store's check-and-insert.
pub struct RegistryService<S = Box<dyn ScenarioStore>> {
    validator: NameValidator,
    resource_prefix: String,
    store: S,
}

impl RegistryService {
    /// Build a registry with the store backend named in `config`
    #[must_use]
    pub fn from_config(config: &RegistryConfig) -> Self {
        let store: Box<dyn ScenarioStore> = match config.store {
            StoreKind::Sharded => Box::new(ShardedScenarioStore::new()),
            StoreKind::Ordered => Box::new(OrderedScenarioStore::new()),
        };
        Self::with_store(config, store)
    }
}

impl<S: ScenarioStore> RegistryService<S> {
    /// Build a registry over an existing store
    #[must_use]
    pub fn with_store(config: &RegistryConfig, store: S) -> Self {
        Self {
            validator: NameValidator::new(config.default_host.clone()),
            resource_prefix: config.resource_prefix.trim_end_matches('/').to_string(),
            store,
        }
    }

    /// Underlying store
    #[inline]
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Name validator in use
    #[inline]
    #[must_use]
    pub fn validator(&self) -> &NameValidator {
        &self.validator
    }

    /// Resource reference for a canonical name
    #[inline]
    #[must_use]
    pub fn resource_ref(&self, name: &ScenarioName) -> ResourceRef {
        ResourceRef::new(&self.resource_prefix, name)
    }

    /// Create a scenario from a raw request body
    ///
    /// # Errors
    /// - [`RegistryError::MalformedInput`] for an empty or non-object body
    /// - [`RegistryError::MissingField`] if `scenario` is absent
    /// - [`RegistryError::InvalidName`] if the name fails validation
    /// - [`RegistryError::AlreadyExists`] if the canonical name is taken
    pub fn create_scenario(&self, body: &[u8]) -> Result<Created<ScenarioRecord>, RegistryError> {
        let request = CreateScenarioRequest::decode(body).map_err(rejected)?;
        tracing::debug!("Decoded create request for {:?}", request.name);
        self.create_named(&request.name)
    }

    /// Create a scenario from an already-extracted raw name
    ///
    /// # Errors
    /// As [`create_scenario`](Self::create_scenario), minus the decode
    /// failures.
    pub fn create_named(&self, raw_name: &str) -> Result<Created<ScenarioRecord>, RegistryError> {
        let name = self.resolve(raw_name)?;
        let record = ScenarioRecord::new(name.clone(), self.resource_ref(&name));

        self.store
            .insert(record.clone())
            .map_err(|e| rejected(e.into()))?;

        tracing::info!("Created scenario {}", name);
        Ok(Created(record))
    }

    /// All registered scenarios with their count
    #[must_use]
    pub fn list_scenarios(&self) -> ScenarioListing {
        let listing = ScenarioListing::new(self.store.list());
        tracing::debug!("Listed {} scenarios", listing.count);
        listing
    }

    /// Look up one scenario by `host:local` or bare local name
    ///
    /// # Errors
    /// [`RegistryError::InvalidName`] or [`RegistryError::NotFound`].
    pub fn get_scenario(&self, name: &str) -> Result<ScenarioRecord, RegistryError> {
        let name = self.resolve(name)?;
        self.store
            .get(&name)
            .ok_or_else(|| rejected(RegistryError::NotFound { name }))
    }

    /// Delete one scenario, freeing its name for re-creation
    ///
    /// # Errors
    /// [`RegistryError::InvalidName`] or [`RegistryError::NotFound`].
    pub fn delete_scenario(&self, name: &str) -> Result<ScenarioRecord, RegistryError> {
        let name = self.resolve(name)?;
        let removed = self.store.remove(&name).map_err(|e| rejected(e.into()))?;

        tracing::info!("Deleted scenario {}", name);
        Ok(removed)
    }

    /// Validate and canonicalize a raw name
    fn resolve(&self, raw: &str) -> Result<ScenarioName, RegistryError> {
        self.validator
            .validate(raw)
            .map_err(|e| rejected(e.into()))
    }

    /// Create, answering with a [`Reply`]
    #[must_use]
    pub fn handle_create(&self, body: &[u8]) -> Reply {
        match self.create_scenario(body) {
            Ok(created) => Reply::created(created.value()),
            Err(err) => Reply::from_error(&err),
        }
    }

    /// List, answering with a [`Reply`]
    #[must_use]
    pub fn handle_list(&self) -> Reply {
        Reply::ok(&self.list_scenarios())
    }

    /// Lookup, answering with a [`Reply`]
    #[must_use]
    pub fn handle_get(&self, name: &str) -> Reply {
        self.get_scenario(name).into()
    }

    /// Delete, answering with a [`Reply`]
    #[must_use]
    pub fn handle_delete(&self, name: &str) -> Reply {
        self.delete_scenario(name).map(DeletedScenario::from).into()
    }
}

impl<S: ScenarioStore> fmt::Debug for RegistryService<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryService")
            .field("default_host", self.validator.default_host())
            .field("resource_prefix", &self.resource_prefix)
            .field("scenarios", &self.store.len())
            .finish()
    }
}

fn rejected(err: RegistryError) -> RegistryError {
    match &err {
        RegistryError::MalformedInput { detail } => {
            tracing::warn!(status = err.status(), "Rejected scenario request: {} ({})", err, detail);
        }
        _ => tracing::warn!(status = err.status(), "Rejected scenario request: {}", err),
    }
    err
}
