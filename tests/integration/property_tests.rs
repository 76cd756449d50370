//! Property-based tests for parsing and evaluation.
//!
//! Generates definitions from the built-in rules with well-formed
//! expectations, plus arbitrary values, and checks properties that must hold
//! for every combination.

use crate::common::validator;
use attribute_rules::{RuleDef, RuleSet};
use proptest::prelude::*;

fn rule_segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("required".to_string()),
        prop::sample::select(vec!["double", "number", "int", "bool", "str"])
            .prop_map(|t| format!("type:{}", t)),
        (-1000i32..1000).prop_map(|n| format!("min:{}", n)),
        (-1000i32..1000).prop_map(|n| format!("max:{}", n)),
        (0u8..20).prop_map(|n| format!("minLength:{}", n)),
        (0u8..20).prop_map(|n| format!("maxLength:{}", n)),
        prop::sample::select(vec![r"\d+", "[a-z]*", "[A-Z]{2}:[0-9]{4}", ".*"])
            .prop_map(|p| format!("regex:{}", p)),
    ]
}

prop_compose! {
    fn definition_strategy()
        (segments in prop::collection::vec(rule_segment_strategy(), 0..8),
         padding in "[ ]{0,3}")
        -> String {
        segments
            .iter()
            .map(|segment| format!("{padding}{segment}{padding}"))
            .collect::<Vec<_>>()
            .join(";")
    }
}

fn value_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop_oneof![
        "[ ]{0,3}",
        "-?[0-9]{1,5}",
        "[a-zA-Z0-9 :.]{0,24}",
        prop::sample::select(vec!["true", "FALSE", "AB:1234", "1e3"]).prop_map(String::from),
    ])
}

proptest! {
    #[test]
    fn test_parsing_is_idempotent(definition in definition_strategy()) {
        let validator = validator();
        let first = validator.parse_rules(&definition).unwrap();
        let second = validator.parse_rules(&definition).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_empty_definition_is_always_valid(value in value_strategy()) {
        let validator = validator();
        let result = validator.check(value.as_deref(), Some("")).unwrap();
        prop_assert!(result.is_valid());
        prop_assert!(result.failed_rules().is_empty());

        let result = validator.check_rules(value.as_deref(), &RuleSet::new());
        prop_assert!(result.is_valid());
    }

    #[test]
    fn test_failures_are_exactly_the_rules_that_fail_alone(
        definition in definition_strategy(),
        value in value_strategy(),
    ) {
        let validator = validator();
        let rules = validator.parse_rules(&definition).unwrap();
        let result = validator.check_rules(value.as_deref(), &rules);

        // Well-formed expectations never produce a fault.
        prop_assert!(result.exception().is_none());

        let failing_alone: Vec<RuleDef> = rules
            .iter()
            .filter(|rule| {
                !validator
                    .check_rules(value.as_deref(), std::slice::from_ref(*rule))
                    .is_valid()
            })
            .cloned()
            .collect();

        prop_assert_eq!(result.failed_rules(), failing_alone.as_slice());
        prop_assert_eq!(result.is_valid(), failing_alone.is_empty());
    }

    #[test]
    fn test_parsed_rules_have_no_identical_pairs(definition in definition_strategy()) {
        let rules = validator().parse_rules(&definition).unwrap();
        let slice = rules.as_slice();
        for (i, rule) in slice.iter().enumerate() {
            prop_assert!(!slice[i + 1..].contains(rule));
        }
    }
}
