//! Property tests for scenario name validation

use proptest::prelude::*;
use scenario_name::{HostName, NameError, NameValidator, ScenarioName};

const PHRASE: &str = "name is blank or contains illegal characters";

fn validator() -> NameValidator {
    NameValidator::new(HostName::localhost())
}

proptest! {
    #[test]
    fn valid_local_names_get_localhost(local in "[A-Za-z0-9_]{1,32}") {
        let name = validator().validate(&local).unwrap();
        prop_assert_eq!(name.canonical(), format!("localhost:{local}"));
    }

    #[test]
    fn valid_qualified_names_round_trip(
        host in "[A-Za-z0-9_]{1,16}",
        local in "[A-Za-z0-9_]{1,32}",
    ) {
        let raw = format!("{host}:{local}");
        let name = validator().validate(&raw).unwrap();

        prop_assert_eq!(name.canonical(), raw.clone());
        let reparsed: ScenarioName = raw.parse().unwrap();
        prop_assert_eq!(reparsed, name);
    }

    #[test]
    fn illegal_character_is_echoed(
        prefix in "[A-Za-z0-9_]{0,8}",
        bad in "[@#$%&*!. /\\-]",
        suffix in "[A-Za-z0-9_]{0,8}",
    ) {
        let raw = format!("{prefix}{bad}{suffix}");
        let err = validator().validate(&raw).unwrap_err();
        let msg = err.to_string();

        prop_assert!(msg.contains(PHRASE));
        prop_assert!(msg.contains(&raw));
    }

    #[test]
    fn validation_is_pure(raw in ".{0,24}") {
        let v = validator();
        prop_assert_eq!(v.validate(&raw), v.validate(&raw));
    }

    #[test]
    fn failures_always_carry_phrase(raw in ".{0,24}") {
        if let Err(err) = validator().validate(&raw) {
            let known = matches!(err, NameError::Blank { .. } | NameError::IllegalCharacters { .. });
            prop_assert!(known, "unexpected error {:?}", err);
            prop_assert!(err.to_string().contains(PHRASE));
            prop_assert_eq!(err.raw(), raw.as_str());
        }
    }
}
