//! Request body decoding
//!
//! Two stages, each with its own failure: raw bytes to a JSON object
//! ([`RegistryError::MalformedInput`]), then extraction of the `scenario`
//! field ([`RegistryError::MissingField`]).

use crate::error::RegistryError;
use scenario_name::NameError;
use serde_json::{Map, Value};

/// Body field carrying the scenario name
pub const SCENARIO_FIELD: &str = "scenario";

/// Decode a raw body into a JSON object
///
/// # Errors
/// [`RegistryError::MalformedInput`] if the body is empty or whitespace,
/// is not valid JSON, or is valid JSON but not an object.
pub fn decode_body(body: &[u8]) -> Result<Map<String, Value>, RegistryError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(RegistryError::malformed("empty body"));
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(RegistryError::malformed(format!(
            "expected a JSON object, got {}",
            json_type(&other)
        ))),
        Err(e) => Err(RegistryError::malformed(e.to_string())),
    }
}

/// Extract the scenario name from a decoded body
///
/// A `null` value counts as not supplied. Non-string values are rejected as
/// invalid names, echoing their JSON text and type.
///
/// # Errors
/// - [`RegistryError::MissingField`] if the field is absent or `null`
/// - [`RegistryError::InvalidName`] if the field is not a string
pub fn scenario_field(body: &Map<String, Value>) -> Result<&str, RegistryError> {
    match body.get(SCENARIO_FIELD) {
        None | Some(Value::Null) => Err(RegistryError::MissingField),
        Some(Value::String(name)) => Ok(name.as_str()),
        Some(other) => Err(NameError::WrongType {
            raw: other.to_string(),
            found: json_type(other),
        }
        .into()),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Decoded create request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateScenarioRequest {
    /// Raw scenario name as supplied, not yet validated
    pub name: String,
}

impl CreateScenarioRequest {
    /// Run both decode stages over a raw body
    ///
    /// # Errors
    /// See [`decode_body`] and [`scenario_field`].
    pub fn decode(body: &[u8]) -> Result<Self, RegistryError> {
        let map = decode_body(body)?;
        let name = scenario_field(&map)?;
        Ok(Self {
            name: name.to_string(),
        })
    }
}
