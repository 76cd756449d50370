//! Length bounds: `minLength` and `maxLength`.
//!
//! Length is the number of characters of the trimmed value; a blank or absent
//! value has length 0. The expectation is any finite number, so `minLength:2.5`
//! needs at least three characters.

use super::{Constraint, Rule, numeric_expectation, trimmed};
use crate::error::{RuleCheckResult, RuleConfigError};

fn char_length(value: Option<&str>) -> f64 {
    trimmed(value).chars().count() as f64
}

/// Minimum trimmed length, inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinLengthRule;

impl MinLengthRule {
    pub const NAME: &'static str = "minLength";
}

impl Rule for MinLengthRule {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn requires_expectation(&self) -> bool {
        true
    }

    fn check(&self, value: Option<&str>, expectation: Option<&str>) -> RuleCheckResult {
        let min = numeric_expectation(Self::NAME, expectation)?;
        Ok(char_length(value) >= min)
    }

    fn constraint(&self, expectation: Option<&str>) -> Result<Option<Constraint>, RuleConfigError> {
        Ok(Some(Constraint::MinLength(numeric_expectation(
            Self::NAME,
            expectation,
        )?)))
    }
}

/// Maximum trimmed length, inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxLengthRule;

impl MaxLengthRule {
    pub const NAME: &'static str = "maxLength";
}

impl Rule for MaxLengthRule {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn requires_expectation(&self) -> bool {
        true
    }

    fn check(&self, value: Option<&str>, expectation: Option<&str>) -> RuleCheckResult {
        let max = numeric_expectation(Self::NAME, expectation)?;
        Ok(char_length(value) <= max)
    }

    fn constraint(&self, expectation: Option<&str>) -> Result<Option<Constraint>, RuleConfigError> {
        Ok(Some(Constraint::MaxLength(numeric_expectation(
            Self::NAME,
            expectation,
        )?)))
    }
}
