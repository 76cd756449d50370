//! Substituted registries and shared use of one validator.

use crate::common::init_logging;
use crate::{assert_failed_rules, assert_valid};
use attribute_rules::error::RuleCheckResult;
use attribute_rules::rule::{RequiredRule, required_expectation};
use attribute_rules::{AttributeValidator, Error, Rule, RuleDef, RuleDefError, RuleRegistry};
use std::sync::Arc;
use std::thread;

/// Passes when the trimmed value is one of the comma separated expectation
/// entries.
#[derive(Debug)]
struct OneOfRule;

impl Rule for OneOfRule {
    fn name(&self) -> &str {
        "oneOf"
    }

    fn requires_expectation(&self) -> bool {
        true
    }

    fn check(&self, value: Option<&str>, expectation: Option<&str>) -> RuleCheckResult {
        let allowed = required_expectation(self.name(), expectation)?;
        let value = value.map(str::trim).unwrap_or("");
        Ok(allowed.split(',').map(str::trim).any(|entry| entry == value))
    }
}

#[test]
fn test_custom_rule_alongside_builtins() {
    init_logging();
    let registry = RuleRegistry::new().with_rule(OneOfRule).unwrap();
    let validator = AttributeValidator::with_registry(registry);

    assert_valid!(
        validator
            .check(Some("gmbh"), Some("required; oneOf: gmbh, ag, ug"))
            .unwrap()
    );
    assert_failed_rules!(
        validator
            .check(Some("llc"), Some("required; oneOf: gmbh, ag, ug"))
            .unwrap(),
        [RuleDef::with_expectation("oneOf", "gmbh, ag, ug")]
    );
    assert!(matches!(
        validator.parse_rules("oneOf"),
        Err(RuleDefError::MissingExpectation { .. })
    ));
}

#[test]
fn test_restricted_registry_rejects_missing_rules() {
    init_logging();
    let registry = RuleRegistry::empty().with_rule(RequiredRule).unwrap();
    let validator = AttributeValidator::with_registry(registry);

    assert!(validator.parse_rules("required").is_ok());
    assert_eq!(
        validator.parse_rules("required; min:1"),
        Err(RuleDefError::UnknownRule {
            rule_name: "min".to_string()
        })
    );
}

#[test]
fn test_registering_builtin_twice_fails() {
    let result = RuleRegistry::new().with_rule(RequiredRule);
    assert!(matches!(result, Err(Error::DuplicateRule { .. })));
}

#[test]
fn test_validator_shared_across_threads() {
    init_logging();
    let validator = AttributeValidator::with_shared_registry(Arc::new(RuleRegistry::new()));
    let definition = "required; type:integer; min:0; max:1000";

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let validator = validator.clone();
                scope.spawn(move || {
                    (0..200)
                        .map(|i| {
                            let value = (worker * 200 + i).to_string();
                            let result = validator.check(Some(value.as_str()), Some(definition)).unwrap();
                            (worker * 200 + i <= 1000) == result.is_valid()
                        })
                        .all(|consistent| consistent)
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    });
}
