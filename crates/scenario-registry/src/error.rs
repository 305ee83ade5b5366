//! Error types for the scenario registry
//!
//! Every failure is terminal and caused either by caller data or by a
//! definite namespace conflict. The `Display` text of each variant is the
//! reason string handed to the transport, and callers match on it.

use scenario_name::{NameError, ScenarioName};
use scenario_store::StoreError;

/// Reason for an absent or unparsable request body
pub const NO_JSON_BODY: &str = "No JSON body found";

/// Reason for a body without the scenario field
pub const NAME_NOT_SUPPLIED: &str = "Scenario name not supplied";

/// Main registry error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Body absent, empty, or not a JSON object
    #[error("No JSON body found")]
    MalformedInput {
        /// What the decoder saw; logged, never part of the reason
        detail: String,
    },

    /// Well-formed body without a `scenario` field
    #[error("Scenario name not supplied")]
    MissingField,

    /// Name failed validation
    #[error(transparent)]
    InvalidName(#[from] NameError),

    /// Canonical name already registered
    #[error("Scenario ({name}) already exists.")]
    AlreadyExists { name: ScenarioName },

    /// No scenario under this canonical name
    #[error("Scenario ({name}) not found.")]
    NotFound { name: ScenarioName },
}

impl RegistryError {
    /// Malformed body with decoder detail
    #[inline]
    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::MalformedInput {
            detail: detail.into(),
        }
    }

    /// Error classification
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedInput { .. } => ErrorKind::MalformedInput,
            Self::MissingField => ErrorKind::MissingField,
            Self::InvalidName(_) => ErrorKind::InvalidName,
            Self::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            Self::NotFound { .. } => ErrorKind::NotFound,
        }
    }

    /// Transport status code for this error
    #[inline]
    #[must_use]
    pub fn status(&self) -> u16 {
        self.kind().status()
    }

    /// Human-readable reason; identical to `Display`
    #[inline]
    #[must_use]
    pub fn reason(&self) -> String {
        self.to_string()
    }

    /// Whether retrying the same call could succeed
    ///
    /// Always false: every variant stems from caller data or a settled
    /// namespace state.
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        false
    }
}

impl From<StoreError> for RegistryError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::AlreadyExists { name } => Self::AlreadyExists { name },
            StoreError::NotFound { name } => Self::NotFound { name },
        }
    }
}

/// Error classification with its fixed status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// 415
    MalformedInput,
    /// 400
    MissingField,
    /// 400
    InvalidName,
    /// 422
    AlreadyExists,
    /// 404
    NotFound,
}

impl ErrorKind {
    /// Status code the transport must answer with
    #[must_use]
    pub fn status(self) -> u16 {
        match self {
            Self::MalformedInput => 415,
            Self::MissingField | Self::InvalidName => 400,
            Self::AlreadyExists => 422,
            Self::NotFound => 404,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> ScenarioName {
        s.parse().unwrap()
    }

    #[test]
    fn fixed_reasons() {
        assert_eq!(RegistryError::malformed("empty").reason(), NO_JSON_BODY);
        assert_eq!(RegistryError::MissingField.reason(), NAME_NOT_SUPPLIED);
    }

    #[test]
    fn status_table() {
        assert_eq!(RegistryError::malformed("x").status(), 415);
        assert_eq!(RegistryError::MissingField.status(), 400);
        assert_eq!(
            RegistryError::from(NameError::Blank { raw: String::new() }).status(),
            400
        );
        assert_eq!(
            RegistryError::AlreadyExists { name: name("h:a") }.status(),
            422
        );
        assert_eq!(RegistryError::NotFound { name: name("h:a") }.status(), 404);
    }

    #[test]
    fn invalid_name_forwards_validator_message() {
        let err = RegistryError::from(NameError::IllegalCharacters {
            raw: "@foo".to_string(),
        });

        assert_eq!(err.kind(), ErrorKind::InvalidName);
        assert!(err
            .reason()
            .contains("name is blank or contains illegal characters"));
        assert!(err.reason().contains("@foo"));
    }

    #[test]
    fn store_errors_keep_name() {
        let err: RegistryError = StoreError::AlreadyExists {
            name: name("localhost:scenario_0001"),
        }
        .into();

        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
        assert!(err.reason().contains("already exists"));
        assert!(err.reason().contains("localhost:scenario_0001"));
    }

    #[test]
    fn nothing_is_retryable() {
        assert!(!RegistryError::MissingField.is_retryable());
        assert!(!RegistryError::NotFound { name: name("h:a") }.is_retryable());
    }
}
