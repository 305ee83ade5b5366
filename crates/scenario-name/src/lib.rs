//! Scenario Names
//!
//! Host-qualified scenario identifiers and the rules that govern them.
//!
//! # Overview
//!
//! - **ScenarioName**: `host:local` identifier, canonical and globally unique
//! - **HostName**: the outer scope of a scenario name
//! - **NameValidator**: turns raw caller input into a [`ScenarioName`],
//!   applying the default host when none is supplied
//!
//! # Example
//!
//! ```rust
//! use scenario_name::{HostName, NameValidator};
//!
//! let validator = NameValidator::new(HostName::localhost());
//!
//! let name = validator.validate("scenario_0001").unwrap();
//! assert_eq!(name.to_string(), "localhost:scenario_0001");
//!
//! let qualified = validator.validate("hostname:scenario_name_x").unwrap();
//! assert_eq!(qualified.host().as_str(), "hostname");
//!
//! assert!(validator.validate("@foo").is_err());
//! ```

#![warn(missing_docs)]

pub mod name;
pub mod validator;

// Re-exports
pub use name::{is_name_char, split_qualified, with_default_host, HostName, ScenarioName};
pub use validator::{NameError, NameValidator};

/// Host applied to unqualified names unless configured otherwise
pub const DEFAULT_HOST: &str = "localhost";

/// Separator between host and local name in the canonical form
pub const HOST_SEPARATOR: char = ':';

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for name handling
    pub use crate::{HostName, NameError, NameValidator, ScenarioName};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
