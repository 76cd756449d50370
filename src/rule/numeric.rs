//! Inclusive numeric bounds: `min` and `max`.
//!
//! Both rules read the value as a number. A value that is present but not
//! numeric fails the rule outright; there is no fallback to comparing its
//! length. A blank or absent value reads as `0`, so `min:1` rejects it while
//! `max:1` accepts it.

use super::{Constraint, Rule, numeric_expectation, parse_number, trimmed};
use crate::error::{RuleCheckResult, RuleConfigError};

/// The number a value stands for, `None` if it is not numeric.
fn numeric_value(value: Option<&str>) -> Option<f64> {
    let value = trimmed(value);
    if value.is_empty() {
        return Some(0.0);
    }
    parse_number(value)
}

/// Numeric minimum, inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinRule;

impl MinRule {
    pub const NAME: &'static str = "min";
}

impl Rule for MinRule {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn requires_expectation(&self) -> bool {
        true
    }

    fn check(&self, value: Option<&str>, expectation: Option<&str>) -> RuleCheckResult {
        let min = numeric_expectation(Self::NAME, expectation)?;
        Ok(numeric_value(value).is_some_and(|v| v >= min))
    }

    fn constraint(&self, expectation: Option<&str>) -> Result<Option<Constraint>, RuleConfigError> {
        Ok(Some(Constraint::Min(numeric_expectation(Self::NAME, expectation)?)))
    }
}

/// Numeric maximum, inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxRule;

impl MaxRule {
    pub const NAME: &'static str = "max";
}

impl Rule for MaxRule {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn requires_expectation(&self) -> bool {
        true
    }

    fn check(&self, value: Option<&str>, expectation: Option<&str>) -> RuleCheckResult {
        let max = numeric_expectation(Self::NAME, expectation)?;
        Ok(numeric_value(value).is_some_and(|v| v <= max))
    }

    fn constraint(&self, expectation: Option<&str>) -> Result<Option<Constraint>, RuleConfigError> {
        Ok(Some(Constraint::Max(numeric_expectation(Self::NAME, expectation)?)))
    }
}
