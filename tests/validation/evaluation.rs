//! Multi-rule evaluation and result aggregation.

use crate::common::{check, validator};
use crate::{assert_failed_rules, assert_misconfigured, assert_valid};
use attribute_rules::{RuleConfigError, RuleDef};

#[test]
fn test_evaluation_does_not_short_circuit() {
    let result = check(Some("abc"), "required; type:double; maxLength:2");
    assert_failed_rules!(
        result,
        [
            RuleDef::with_expectation("type", "double"),
            RuleDef::with_expectation("maxLength", "2")
        ]
    );
    assert!(!result.has_failed("required"));
}

#[test]
fn test_failures_keep_definition_order() {
    let result = check(Some("abc"), "maxLength:2; type:number; required");
    assert_failed_rules!(
        result,
        [
            RuleDef::with_expectation("maxLength", "2"),
            RuleDef::with_expectation("type", "number")
        ]
    );
    assert_eq!(result.failure_summary(), "maxLength: 2, type: number");
}

#[test]
fn test_only_type_fails_when_length_is_fine() {
    assert_failed_rules!(
        check(Some("abc"), "type:number; minLength:2; maxLength:5"),
        [RuleDef::with_expectation("type", "number")]
    );
}

#[test]
fn test_all_rules_pass() {
    assert_valid!(check(Some("true"), "required; regex:true|false; type:boolean"));
}

#[test]
fn test_every_duplicate_name_is_enforced() {
    assert_failed_rules!(
        check(Some("5"), "type:number; min:10; min:1"),
        [RuleDef::with_expectation("min", "10")]
    );
    assert_valid!(check(Some("12"), "min:10; min:1"));
}

#[test]
fn test_fault_replaces_collected_failures() {
    // maxLength fails before the broken regex is reached.
    let result = check(Some("abcdef"), "maxLength:2; regex:[0-9; required");
    assert_misconfigured!(
        result,
        RuleDef::with_expectation("regex", "[0-9"),
        RuleConfigError::InvalidPattern { .. }
    );
}

#[test]
fn test_hand_built_rules_with_unknown_name() {
    let validator = validator();
    let rules = vec![RuleDef::new("required"), RuleDef::new("uppercase")];
    assert_misconfigured!(
        validator.check_rules(Some("abc"), &rules),
        RuleDef::new("uppercase"),
        RuleConfigError::UnknownRule { .. }
    );
}

#[test]
fn test_result_serializes_for_hosts() {
    let result = check(Some("abc"), "type:number");
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        serde_json::json!({
            "valid": false,
            "failedRules": [{"ruleName": "type", "expectation": "number"}],
            "exception": null
        })
    );
}
