//! Evaluation of parsed rules against a single value.
//!
//! Every rule is applied in order and every failure is collected; a failing
//! rule never stops the rules after it. A rule that cannot be applied at all
//! (unknown to the registry, or carrying an expectation it cannot interpret)
//! stops evaluation and is reported as the sole failure together with the
//! captured [`RuleConfigError`].

use crate::error::RuleConfigError;
use crate::registry::RuleRegistry;
use crate::result::CheckResult;
use crate::rule::RuleDef;

/// Apply `rules` to `value` and aggregate the outcome.
///
/// `value` is `None` when the attribute was not supplied. Never panics and
/// never returns an error: configuration faults are carried in the result.
pub fn evaluate(registry: &RuleRegistry, value: Option<&str>, rules: &[RuleDef]) -> CheckResult {
    let mut failed_rules = Vec::new();

    for rule_def in rules {
        match apply(registry, value, rule_def) {
            Ok(true) => {}
            Ok(false) => {
                log::debug!("Value failed rule '{}'", rule_def);
                failed_rules.push(rule_def.clone());
            }
            Err(exception) => {
                log::warn!("Rule '{}' is misconfigured: {}", rule_def, exception);
                return CheckResult::misconfigured(rule_def.clone(), exception);
            }
        }
    }

    let result = CheckResult::from_failures(failed_rules);
    log::debug!(
        "Checked value against {} rule(s): valid={}, failed=[{}]",
        rules.len(),
        result.is_valid(),
        result.failure_summary()
    );
    result
}

fn apply(
    registry: &RuleRegistry,
    value: Option<&str>,
    rule_def: &RuleDef,
) -> Result<bool, RuleConfigError> {
    let rule = registry
        .resolve(rule_def.rule_name())
        .ok_or_else(|| RuleConfigError::UnknownRule {
            rule_name: rule_def.rule_name().to_string(),
        })?;

    rule.check(value, rule_def.expectation())
}
