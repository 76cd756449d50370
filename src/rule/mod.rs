//! Validation rules and the values that describe them.
//!
//! A [`Rule`] is a named, stateless predicate over a single string value plus an
//! optional expectation string (`min:5` has the expectation `"5"`). Rules are
//! shared process-wide through a [`RuleRegistry`](crate::RuleRegistry) and never
//! hold per-call state; everything a rule needs arrives through
//! [`Rule::check`].
//!
//! # Key Types
//!
//! - [`Rule`] - capability set every rule implements
//! - [`RuleDef`] - a parsed `(ruleName, expectation)` pair
//! - [`Constraint`] - typed description of what a rule enforces
//! - [`ValueType`] - the types understood by the `type` rule
//!
//! # Built-in rules
//!
//! | Name        | Expectation   | Passes when                                   |
//! |-------------|---------------|-----------------------------------------------|
//! | `required`  | none          | value is present and not blank                |
//! | `type`      | type name     | trimmed value parses as that type             |
//! | `min`       | number        | value is a number `>=` expectation            |
//! | `max`       | number        | value is a number `<=` expectation            |
//! | `minLength` | number        | trimmed length `>=` expectation               |
//! | `maxLength` | number        | trimmed length `<=` expectation               |
//! | `regex`     | pattern       | whole trimmed value matches the pattern       |

pub mod length;
pub mod numeric;
pub mod pattern;
pub mod required;
pub mod value_type;


pub use length::{MaxLengthRule, MinLengthRule};
pub use numeric::{MaxRule, MinRule};
pub use pattern::RegexRule;
pub use required::RequiredRule;
pub use value_type::{TypeRule, ValueType};

use crate::error::{RuleCheckResult, RuleConfigError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Capability set of a validation rule.
///
/// Implementations must be stateless: the same `(value, expectation)` pair
/// always yields the same answer, and a single instance may be used from any
/// number of threads at once.
pub trait Rule: fmt::Debug + Send + Sync {
    /// Unique rule name as written in rule definitions, e.g. `"minLength"`.
    fn name(&self) -> &str;

    /// Whether a definition of this rule must carry a non-blank expectation.
    fn requires_expectation(&self) -> bool;

    /// Apply the rule to `value`.
    ///
    /// `value` is `None` when the attribute was not supplied at all. Returns
    /// `Ok(false)` when the value does not satisfy the rule and `Err` when the
    /// expectation itself cannot be interpreted.
    fn check(&self, value: Option<&str>, expectation: Option<&str>) -> RuleCheckResult;

    /// Describe what this rule enforces for the given expectation.
    ///
    /// Used by hosts that need rule parameters (form rendering, hints) without
    /// knowing the concrete rule type. Rules with nothing to describe return
    /// `Ok(None)`.
    fn constraint(&self, _expectation: Option<&str>) -> Result<Option<Constraint>, RuleConfigError> {
        Ok(None)
    }
}

/// A parsed rule definition: rule name plus optional expectation.
///
/// Identity is the `(rule_name, expectation)` pair; the parser uses it for
/// deduplication and the evaluator reports failures with it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleDef {
    rule_name: String,
    #[serde(default)]
    expectation: Option<String>,
}

impl RuleDef {
    /// Create a definition without an expectation, e.g. `required`.
    pub fn new(rule_name: impl Into<String>) -> Self {
        Self {
            rule_name: rule_name.into(),
            expectation: None,
        }
    }

    /// Create a definition with an expectation, e.g. `min:5`.
    pub fn with_expectation(rule_name: impl Into<String>, expectation: impl Into<String>) -> Self {
        Self {
            rule_name: rule_name.into(),
            expectation: Some(expectation.into()),
        }
    }

    /// Create a definition from already separated parts.
    pub fn from_parts(rule_name: String, expectation: Option<String>) -> Self {
        Self {
            rule_name,
            expectation,
        }
    }

    pub fn rule_name(&self) -> &str {
        &self.rule_name
    }

    /// The expectation exactly as parsed; may be an empty string.
    pub fn expectation(&self) -> Option<&str> {
        self.expectation.as_deref()
    }
}

impl fmt::Display for RuleDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match non_blank(self.expectation.as_deref()) {
            Some(expectation) => write!(f, "{}: {}", self.rule_name, expectation),
            None => f.write_str(&self.rule_name),
        }
    }
}

/// Typed description of what a rule enforces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "expectation", rename_all = "camelCase")]
pub enum Constraint {
    Required,
    Type(ValueType),
    Min(f64),
    Max(f64),
    MinLength(f64),
    MaxLength(f64),
    Pattern(String),
}

/// Treat absent and blank expectations alike.
pub(crate) fn non_blank(expectation: Option<&str>) -> Option<&str> {
    expectation.map(str::trim).filter(|e| !e.is_empty())
}

/// The trimmed expectation of a rule that cannot work without one.
///
/// Fails with [`RuleConfigError::MissingExpectation`] when the expectation is
/// absent or blank. Intended for [`Rule`] implementations, built-in or custom.
pub fn required_expectation<'a>(
    rule_name: &str,
    expectation: Option<&'a str>,
) -> Result<&'a str, RuleConfigError> {
    non_blank(expectation).ok_or_else(|| RuleConfigError::MissingExpectation {
        rule_name: rule_name.to_string(),
    })
}

/// Parse a finite number, ignoring surrounding whitespace.
pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parse the numeric expectation of `rule_name`.
pub(crate) fn numeric_expectation(
    rule_name: &str,
    expectation: Option<&str>,
) -> Result<f64, RuleConfigError> {
    let raw = required_expectation(rule_name, expectation)?;
    parse_number(raw).ok_or_else(|| RuleConfigError::InvalidNumber {
        rule_name: rule_name.to_string(),
        expectation: raw.to_string(),
    })
}

/// The value every rule except `required` sees: trimmed, absent reads as empty.
pub(crate) fn trimmed(value: Option<&str>) -> &str {
    value.map(str::trim).unwrap_or("")
}
