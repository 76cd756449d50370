//! Entry point tying the parser, registry and evaluator together.

use crate::error::{RuleConfigError, RuleDefResult};
use crate::evaluator;
use crate::parser::{self, RuleSet};
use crate::registry::RuleRegistry;
use crate::result::CheckResult;
use crate::rule::{Constraint, RuleDef};

use std::sync::Arc;

/// Validates single attribute values against rule definitions.
///
/// Cloning is cheap; clones share the same registry. The validator holds no
/// mutable state and may be used from many threads at once.
///
/// # Examples
///
/// ```rust
/// use attribute_rules::AttributeValidator;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let validator = AttributeValidator::new();
///
/// let result = validator.check(Some("42"), Some("required; type:double; min:0; max:100"))?;
/// assert!(result.is_valid());
///
/// let result = validator.check(Some("abc"), Some("required; type:double; maxLength:2"))?;
/// assert_eq!(result.failure_summary(), "type: double, maxLength: 2");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AttributeValidator {
    registry: Arc<RuleRegistry>,
}

impl AttributeValidator {
    /// Create a validator over the built-in rules.
    pub fn new() -> Self {
        Self::with_registry(RuleRegistry::new())
    }

    /// Create a validator over a custom registry.
    pub fn with_registry(registry: RuleRegistry) -> Self {
        Self::with_shared_registry(Arc::new(registry))
    }

    pub fn with_shared_registry(registry: Arc<RuleRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Parse a rule definition string such as `"required; min:0"`.
    pub fn parse_rules(&self, definition: &str) -> RuleDefResult<RuleSet> {
        parser::parse_rules(&self.registry, definition)
    }

    /// Parse `definition` and check `value` against it.
    ///
    /// A `None` or blank definition has no rules and always yields a valid
    /// result. Definition errors are returned as `Err`; configuration faults
    /// found while applying rules are carried inside the `CheckResult`.
    pub fn check(&self, value: Option<&str>, definition: Option<&str>) -> RuleDefResult<CheckResult> {
        let rules = match definition {
            Some(definition) => self.parse_rules(definition)?,
            None => RuleSet::new(),
        };
        Ok(self.check_rules(value, &rules))
    }

    /// Check `value` against already parsed rules.
    pub fn check_rules(&self, value: Option<&str>, rules: impl AsRef<[RuleDef]>) -> CheckResult {
        evaluator::evaluate(&self.registry, value, rules.as_ref())
    }

    /// Typed constraints of parsed rules, in rule order.
    ///
    /// Rules that describe nothing are skipped. Fails on the first rule whose
    /// expectation cannot be interpreted.
    pub fn constraints(
        &self,
        rules: impl AsRef<[RuleDef]>,
    ) -> Result<Vec<Constraint>, RuleConfigError> {
        let mut constraints = Vec::new();
        for rule_def in rules.as_ref() {
            let rule = self.registry.resolve(rule_def.rule_name()).ok_or_else(|| {
                RuleConfigError::UnknownRule {
                    rule_name: rule_def.rule_name().to_string(),
                }
            })?;
            if let Some(constraint) = rule.constraint(rule_def.expectation())? {
                constraints.push(constraint);
            }
        }
        Ok(constraints)
    }
}

impl Default for AttributeValidator {
    fn default() -> Self {
        Self::new()
    }
}
