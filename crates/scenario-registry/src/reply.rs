//! Transport-neutral replies
//!
//! A [`Reply`] carries everything a transport needs to answer a request:
//! status, reason phrase, content type and JSON body. The status for each
//! error comes from [`ErrorKind::status`](crate::ErrorKind::status).

use crate::error::RegistryError;
use scenario_name::ScenarioName;
use scenario_store::{ResourceRef, ScenarioRecord};
use serde::Serialize;
use serde_json::{json, Value};

/// Content type of every registry reply
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Envelope for list results: `{"scenarios": [...], "count": N}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioListing {
    pub scenarios: Vec<ScenarioRecord>,
    pub count: usize,
}

impl ScenarioListing {
    #[must_use]
    pub fn new(scenarios: Vec<ScenarioRecord>) -> Self {
        let count = scenarios.len();
        Self { scenarios, count }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Canonical names in listing order
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.scenarios.iter().map(|r| r.name().canonical()).collect()
    }
}

/// Body returned after a delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedScenario {
    pub name: ScenarioName,
    pub scenario_ref: ResourceRef,
    pub deleted: bool,
}

impl From<ScenarioRecord> for DeletedScenario {
    fn from(record: ScenarioRecord) -> Self {
        Self {
            name: record.name().clone(),
            scenario_ref: record.resource_ref().clone(),
            deleted: true,
        }
    }
}

/// Status, reason and JSON body for one registry operation
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub reason: String,
    pub content_type: &'static str,
    pub body: Value,
}

impl Reply {
    /// Serialize `payload` as the body
    ///
    /// Falls back to a 500 reply if the payload cannot be represented as
    /// JSON.
    pub fn json<T: Serialize>(status: u16, reason: impl Into<String>, payload: &T) -> Self {
        match serde_json::to_value(payload) {
            Ok(body) => Self {
                status,
                reason: reason.into(),
                content_type: JSON_CONTENT_TYPE,
                body,
            },
            Err(e) => {
                tracing::error!("Failed to serialize reply body: {}", e);
                Self::internal(e.to_string())
            }
        }
    }

    /// 201 with the created record
    #[must_use]
    pub fn created(record: &ScenarioRecord) -> Self {
        Self::json(201, "Created", record)
    }

    /// 200 with any payload
    pub fn ok<T: Serialize>(payload: &T) -> Self {
        Self::json(200, "OK", payload)
    }

    /// Error reply; the reason is the error's exact message
    #[must_use]
    pub fn from_error(err: &RegistryError) -> Self {
        let status = err.status();
        let reason = err.reason();
        Self {
            status,
            body: json!({ "error": { "status": status, "reason": reason } }),
            reason,
            content_type: JSON_CONTENT_TYPE,
        }
    }

    fn internal(detail: String) -> Self {
        Self {
            status: 500,
            reason: "Internal Server Error".to_string(),
            content_type: JSON_CONTENT_TYPE,
            body: json!({ "error": { "status": 500, "reason": detail } }),
        }
    }

    /// 2xx status
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl<T: Serialize> From<Result<T, RegistryError>> for Reply {
    fn from(result: Result<T, RegistryError>) -> Self {
        match result {
            Ok(payload) => Self::ok(&payload),
            Err(err) => Self::from_error(&err),
        }
    }
}
