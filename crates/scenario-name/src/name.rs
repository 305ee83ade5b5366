//! ScenarioName - host-qualified scenario identifiers
//!
//! Provides [`ScenarioName`] and [`HostName`] along with the pure helpers
//! used to split and default a raw qualified name.

use crate::validator::NameError;
use crate::{DEFAULT_HOST, HOST_SEPARATOR};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Character whitelist shared by hosts and local names: `[A-Za-z0-9_]`
#[inline]
#[must_use]
pub fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Split a raw name on the first separator
///
/// Returns `(host, local)`. The host is `None` when the input carries no
/// separator at all; `":x"` yields `Some("")` so an empty host is still seen
/// by validation.
///
/// # Examples
/// - `"scenario_0001"` → `(None, "scenario_0001")`
/// - `"hostname:scenario_x"` → `(Some("hostname"), "scenario_x")`
/// - `"a:b:c"` → `(Some("a"), "b:c")`
#[inline]
#[must_use]
pub fn split_qualified(raw: &str) -> (Option<&str>, &str) {
    match raw.split_once(HOST_SEPARATOR) {
        Some((host, local)) => (Some(host), local),
        None => (None, raw),
    }
}

/// Resolve an optional host segment against a fallback
#[inline]
#[must_use]
pub fn with_default_host<'a>(host: Option<&'a str>, default: &'a str) -> &'a str {
    host.unwrap_or(default)
}

/// Outer scope of a scenario name
///
/// Same character rules as the local name. Always non-blank.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HostName(String);

impl HostName {
    /// Validate and wrap a host segment
    ///
    /// # Errors
    /// Returns [`NameError`] if the host is blank or has characters outside
    /// `[A-Za-z0-9_]`.
    pub fn new(host: impl Into<String>) -> Result<Self, NameError> {
        let host = host.into();
        check_segment(&host, &host)?;
        Ok(Self(host))
    }

    /// The built-in fallback host, `localhost`
    #[inline]
    #[must_use]
    pub fn localhost() -> Self {
        Self(DEFAULT_HOST.to_string())
    }

    /// Host as string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate a host segment, reporting failures against the full raw name
    pub(crate) fn checked(segment: &str, raw: &str) -> Result<Self, NameError> {
        check_segment(segment, raw)?;
        Ok(Self(segment.to_string()))
    }
}

impl Default for HostName {
    fn default() -> Self {
        Self::localhost()
    }
}

impl Display for HostName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for HostName {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HostName> for String {
    fn from(host: HostName) -> Self {
        host.0
    }
}

/// Fully-qualified scenario identifier
///
/// The canonical form `host:local` is what the store keys on and what
/// resource references embed.
///
/// # Example
/// ```
/// use scenario_name::{HostName, ScenarioName};
///
/// let name = ScenarioName::new(HostName::localhost(), "scenario_0001").unwrap();
/// assert_eq!(name.canonical(), "localhost:scenario_0001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ScenarioName {
    host: HostName,
    local: String,
}

impl ScenarioName {
    /// Create a name from a validated host and a local part
    ///
    /// # Errors
    /// Returns [`NameError`] if the local part is blank or has illegal
    /// characters.
    pub fn new(host: HostName, local: impl Into<String>) -> Result<Self, NameError> {
        let local = local.into();
        check_segment(&local, &local)?;
        Ok(Self { host, local })
    }

    /// Assemble from parts that have already passed validation
    pub(crate) fn from_checked(host: HostName, local: &str) -> Self {
        Self {
            host,
            local: local.to_string(),
        }
    }

    /// Host scope
    #[inline]
    #[must_use]
    pub fn host(&self) -> &HostName {
        &self.host
    }

    /// Local name within the host
    #[inline]
    #[must_use]
    pub fn local(&self) -> &str {
        &self.local
    }

    /// Canonical `host:local` form
    #[must_use]
    pub fn canonical(&self) -> String {
        format!("{}{}{}", self.host, HOST_SEPARATOR, self.local)
    }

    /// Same local name under another host
    #[inline]
    #[must_use]
    pub fn with_host(&self, host: HostName) -> Self {
        Self {
            host,
            local: self.local.clone(),
        }
    }
}

impl Display for ScenarioName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.host, HOST_SEPARATOR, self.local)
    }
}

/// Parses the canonical form only; the host must be present
impl FromStr for ScenarioName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match split_qualified(s) {
            (Some(host), local) => {
                let host = HostName::checked(host, s)?;
                check_segment(local, s)?;
                Ok(Self::from_checked(host, local))
            }
            (None, _) => Err(NameError::Unqualified { raw: s.to_string() }),
        }
    }
}

impl TryFrom<String> for ScenarioName {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ScenarioName> for String {
    fn from(name: ScenarioName) -> Self {
        name.canonical()
    }
}

/// Blank and character checks for one segment; errors echo `raw`
pub(crate) fn check_segment(segment: &str, raw: &str) -> Result<(), NameError> {
    if segment.trim().is_empty() {
        return Err(NameError::Blank {
            raw: raw.to_string(),
        });
    }
    if !segment.chars().all(is_name_char) {
        return Err(NameError::IllegalCharacters {
            raw: raw.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_unqualified() {
        assert_eq!(split_qualified("scenario_0001"), (None, "scenario_0001"));
    }

    #[test]
    fn split_on_first_separator() {
        assert_eq!(split_qualified("a:b:c"), (Some("a"), "b:c"));
        assert_eq!(split_qualified(":x"), (Some(""), "x"));
    }

    #[test]
    fn default_host_only_fills_missing() {
        assert_eq!(with_default_host(None, "localhost"), "localhost");
        assert_eq!(with_default_host(Some("edge"), "localhost"), "edge");
    }

    #[test]
    fn host_name_rules() {
        assert!(HostName::new("hostname").is_ok());
        assert!(HostName::new("host_01").is_ok());
        assert!(matches!(HostName::new(""), Err(NameError::Blank { .. })));
        assert!(matches!(
            HostName::new("my-host.local"),
            Err(NameError::IllegalCharacters { .. })
        ));
    }

    #[test]
    fn scenario_name_canonical() {
        let name = ScenarioName::new(HostName::localhost(), "scenario_0001").unwrap();

        assert_eq!(name.canonical(), "localhost:scenario_0001");
        assert_eq!(name.to_string(), name.canonical());
        assert_eq!(name.local(), "scenario_0001");
    }

    #[test]
    fn scenario_name_rejects_bad_local() {
        assert!(ScenarioName::new(HostName::localhost(), "   ").is_err());
        assert!(ScenarioName::new(HostName::localhost(), "a:b").is_err());
    }

    #[test]
    fn from_str_requires_host() {
        let parsed: ScenarioName = "hostname:scenario_name_x".parse().unwrap();
        assert_eq!(parsed.host().as_str(), "hostname");
        assert_eq!(parsed.local(), "scenario_name_x");

        let err = "scenario_name_x".parse::<ScenarioName>().unwrap_err();
        assert!(matches!(err, NameError::Unqualified { .. }));
    }

    #[test]
    fn with_host_keeps_local() {
        let name: ScenarioName = "a:first".parse().unwrap();
        let moved = name.with_host(HostName::new("b").unwrap());

        assert_eq!(moved.canonical(), "b:first");
    }

    #[test]
    fn serde_uses_canonical_string() {
        let name: ScenarioName = "localhost:s1".parse().unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"localhost:s1\"");

        let back: ScenarioName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, name);

        assert!(serde_json::from_str::<ScenarioName>("\"localhost:@bad\"").is_err());
    }
}
