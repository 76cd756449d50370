//! The `type` rule and the value types it understands.
//!
//! The rule is only an assertion that the value *could* be converted to the
//! named type; other rules still parse the raw string themselves. A `min` rule
//! parses the value as a number whether or not `type:number` is present.

use super::{Constraint, Rule, required_expectation, trimmed};
use crate::error::{RuleCheckResult, RuleConfigError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Value types accepted as the expectation of the `type` rule.
///
/// Names are matched case-insensitively after trimming:
///
/// - `double`, `decimal` → [`ValueType::Double`]
/// - `float`, `number` → [`ValueType::Float`]
/// - `int`, `integer` → [`ValueType::Integer`]
/// - `boolean`, `bool` → [`ValueType::Boolean`]
/// - `string`, `str` → [`ValueType::String`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// Finite 64-bit floating point number
    Double,
    /// Finite 32-bit floating point number
    Float,
    /// 32-bit signed integer
    Integer,
    /// `true` or `false`, any letter case
    Boolean,
    /// Any string, including the empty one
    String,
}

impl ValueType {
    const ALIASES: [(&'static str, ValueType); 10] = [
        ("double", ValueType::Double),
        ("decimal", ValueType::Double),
        ("float", ValueType::Float),
        ("number", ValueType::Float),
        ("int", ValueType::Integer),
        ("integer", ValueType::Integer),
        ("boolean", ValueType::Boolean),
        ("bool", ValueType::Boolean),
        ("string", ValueType::String),
        ("str", ValueType::String),
    ];

    /// Look a type up by any of its names.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALIASES
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
            .map(|(_, value_type)| *value_type)
    }

    /// Canonical name of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Double => "double",
            ValueType::Float => "float",
            ValueType::Integer => "integer",
            ValueType::Boolean => "boolean",
            ValueType::String => "string",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, ValueType::Double | ValueType::Float | ValueType::Integer)
    }

    /// Whether the trimmed `value` can be read as this type.
    ///
    /// A blank value is acceptable only for [`ValueType::String`].
    pub fn accepts(&self, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() {
            return *self == ValueType::String;
        }

        match self {
            ValueType::Double => value.parse::<f64>().is_ok_and(f64::is_finite),
            ValueType::Float => value.parse::<f32>().is_ok_and(f32::is_finite),
            ValueType::Integer => value.parse::<i32>().is_ok(),
            ValueType::Boolean => {
                value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false")
            }
            ValueType::String => true,
        }
    }
}

impl FromStr for ValueType {
    type Err = RuleConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| RuleConfigError::UnsupportedType {
            type_name: s.trim().to_string(),
        })
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Passes when the trimmed value parses as the expected [`ValueType`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeRule;

impl TypeRule {
    pub const NAME: &'static str = "type";

    fn expected_type(expectation: Option<&str>) -> Result<ValueType, RuleConfigError> {
        required_expectation(Self::NAME, expectation)?.parse()
    }
}

impl Rule for TypeRule {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn requires_expectation(&self) -> bool {
        true
    }

    fn check(&self, value: Option<&str>, expectation: Option<&str>) -> RuleCheckResult {
        let expected = Self::expected_type(expectation)?;
        Ok(expected.accepts(trimmed(value)))
    }

    fn constraint(&self, expectation: Option<&str>) -> Result<Option<Constraint>, RuleConfigError> {
        Ok(Some(Constraint::Type(Self::expected_type(expectation)?)))
    }
}
