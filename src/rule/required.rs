//! The `required` rule.

use super::{Constraint, Rule};
use crate::error::{RuleCheckResult, RuleConfigError};

/// Passes when the value is present and not blank after trimming.
///
/// An expectation, if one is written (`required:yes`), is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequiredRule;

impl RequiredRule {
    pub const NAME: &'static str = "required";
}

impl Rule for RequiredRule {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn requires_expectation(&self) -> bool {
        false
    }

    fn check(&self, value: Option<&str>, _expectation: Option<&str>) -> RuleCheckResult {
        Ok(value.is_some_and(|v| !v.trim().is_empty()))
    }

    fn constraint(&self, _expectation: Option<&str>) -> Result<Option<Constraint>, RuleConfigError> {
        Ok(Some(Constraint::Required))
    }
}
