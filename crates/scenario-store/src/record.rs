//! Scenario records and resource references

use chrono::{DateTime, Utc};
use scenario_name::ScenarioName;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// REST path addressing a scenario: `{prefix}/{host}:{local}`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceRef(String);

impl ResourceRef {
    /// Derive the reference for `name` under `prefix`
    ///
    /// A trailing `/` on the prefix is ignored.
    #[must_use]
    pub fn new(prefix: &str, name: &ScenarioName) -> Self {
        Self(format!("{}/{}", prefix.trim_end_matches('/'), name))
    }

    /// Reference as string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ResourceRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ResourceRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A registered scenario
///
/// Never mutated after creation. Serializes as the wire shape the transport
/// returns: `{"name", "scenarioRef", "createdAt"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioRecord {
    name: ScenarioName,
    #[serde(rename = "scenarioRef")]
    resource_ref: ResourceRef,
    created_at: DateTime<Utc>,
}

impl ScenarioRecord {
    /// Create record stamped with the current time
    #[inline]
    #[must_use]
    pub fn new(name: ScenarioName, resource_ref: ResourceRef) -> Self {
        Self::at(name, resource_ref, Utc::now())
    }

    /// Create record with an explicit creation time
    #[inline]
    #[must_use]
    pub fn at(name: ScenarioName, resource_ref: ResourceRef, created_at: DateTime<Utc>) -> Self {
        Self {
            name,
            resource_ref,
            created_at,
        }
    }

    /// Canonical name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &ScenarioName {
        &self.name
    }

    /// Resource reference
    #[inline]
    #[must_use]
    pub fn resource_ref(&self) -> &ResourceRef {
        &self.resource_ref
    }

    /// Creation timestamp
    #[inline]
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> ScenarioName {
        s.parse().unwrap()
    }

    #[test]
    fn resource_ref_joins_prefix_and_canonical_name() {
        let r = ResourceRef::new("/scenarios/objects", &name("localhost:scenario_0001"));
        assert_eq!(r.as_str(), "/scenarios/objects/localhost:scenario_0001");
    }

    #[test]
    fn resource_ref_ignores_trailing_slash() {
        let r = ResourceRef::new("/stubo/api/v2/scenarios/objects/", &name("h:s"));
        assert_eq!(r.as_str(), "/stubo/api/v2/scenarios/objects/h:s");
    }

    #[test]
    fn record_wire_shape() {
        let n = name("hostname:scenario_name_x");
        let record = ScenarioRecord::new(n.clone(), ResourceRef::new("/scenarios/objects", &n));
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["name"], "hostname:scenario_name_x");
        assert_eq!(
            value["scenarioRef"],
            "/scenarios/objects/hostname:scenario_name_x"
        );
        assert!(value["createdAt"].is_string());
    }
}
