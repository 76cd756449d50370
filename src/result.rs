//! Outcome of checking one value against a set of rules.

use crate::error::RuleConfigError;
use crate::rule::RuleDef;

use serde::{Serialize, Serializer};

/// Result of a single check call.
///
/// Invariant: the result is valid exactly when no rule failed and no
/// configuration fault was captured. When a fault is captured, the failed
/// rules hold only the rule that raised it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    valid: bool,
    failed_rules: Vec<RuleDef>,
    #[serde(serialize_with = "serialize_exception")]
    exception: Option<RuleConfigError>,
}

impl CheckResult {
    /// Every rule passed.
    pub fn success() -> Self {
        Self {
            valid: true,
            failed_rules: Vec::new(),
            exception: None,
        }
    }

    /// Build the result of a completed evaluation.
    ///
    /// Valid if and only if `failed_rules` is empty.
    pub fn from_failures(failed_rules: Vec<RuleDef>) -> Self {
        Self {
            valid: failed_rules.is_empty(),
            failed_rules,
            exception: None,
        }
    }

    /// A rule could not be applied because its definition is misconfigured.
    pub fn misconfigured(rule: RuleDef, exception: RuleConfigError) -> Self {
        Self {
            valid: false,
            failed_rules: vec![rule],
            exception: Some(exception),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Failed rules in evaluation order.
    pub fn failed_rules(&self) -> &[RuleDef] {
        &self.failed_rules
    }

    /// The configuration fault that stopped evaluation, if any.
    pub fn exception(&self) -> Option<&RuleConfigError> {
        self.exception.as_ref()
    }

    /// Whether evaluation stopped on a misconfigured rule.
    pub fn is_misconfigured(&self) -> bool {
        self.exception.is_some()
    }

    /// Whether a rule with the given name is among the failures.
    pub fn has_failed(&self, rule_name: &str) -> bool {
        self.failed_rules.iter().any(|rule| rule.rule_name() == rule_name)
    }

    /// Comma separated failed rules, e.g. `"type: number, maxLength: 2"`.
    ///
    /// This is the form hosts interpolate into field error messages.
    pub fn failure_summary(&self) -> String {
        self.failed_rules
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn serialize_exception<S>(exception: &Option<RuleConfigError>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match exception {
        Some(error) => serializer.serialize_some(&error.to_string()),
        None => serializer.serialize_none(),
    }
}
