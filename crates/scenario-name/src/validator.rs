//! Validation of raw scenario names
//!
//! Provides [`NameValidator`], the pure function from caller input to a
//! canonical [`ScenarioName`].

use crate::name::{check_segment, split_qualified, HostName, ScenarioName};

/// Validator for caller-supplied scenario names
///
/// Holds only the default host; validation has no side effects, so the same
/// input always produces the same result.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NameValidator {
    default_host: HostName,
}

impl NameValidator {
    /// Create validator with the given fallback host
    #[inline]
    #[must_use]
    pub fn new(default_host: HostName) -> Self {
        Self { default_host }
    }

    /// Host applied to unqualified names
    #[inline]
    #[must_use]
    pub fn default_host(&self) -> &HostName {
        &self.default_host
    }

    /// Validate a raw name, qualifying it with the default host if needed
    ///
    /// Splitting happens on the first `:`. Both segments must be non-blank
    /// and match `[A-Za-z0-9_]+`.
    ///
    /// # Errors
    /// - [`NameError::Blank`] if the host or local segment is blank
    /// - [`NameError::IllegalCharacters`] if either segment has characters
    ///   outside the whitelist; the error echoes `raw` verbatim
    pub fn validate(&self, raw: &str) -> Result<ScenarioName, NameError> {
        let (host, local) = split_qualified(raw);

        let host = match host {
            Some(segment) => HostName::checked(segment, raw)?,
            None => self.default_host.clone(),
        };
        check_segment(local, raw)?;

        Ok(ScenarioName::from_checked(host, local))
    }
}

/// Name validation errors
///
/// Blank and illegal-character failures share one reason phrase so callers
/// can match on it regardless of which rule fired.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    /// Host or local segment is empty or whitespace
    #[error("Scenario name is blank or contains illegal characters: '{raw}'")]
    Blank {
        /// Input as supplied
        raw: String,
    },

    /// A segment contains characters outside `[A-Za-z0-9_]`
    #[error("Scenario name is blank or contains illegal characters: '{raw}'")]
    IllegalCharacters {
        /// Input as supplied
        raw: String,
    },

    /// Supplied value was not a string at all
    #[error("Scenario name is blank or contains illegal characters: '{raw}' (expected a string, found {found})")]
    WrongType {
        /// Textual form of the supplied value
        raw: String,
        /// Type that was found instead
        found: &'static str,
    },

    /// Canonical form expected but no host segment present
    #[error("scenario name '{raw}' is not host-qualified")]
    Unqualified {
        /// Input as supplied
        raw: String,
    },
}

impl NameError {
    /// The raw input that failed validation
    #[inline]
    #[must_use]
    pub fn raw(&self) -> &str {
        match self {
            Self::Blank { raw }
            | Self::IllegalCharacters { raw }
            | Self::WrongType { raw, .. }
            | Self::Unqualified { raw } => raw,
        }
    }
}
