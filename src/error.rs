//! Error types for rule parsing and evaluation.
//!
//! Errors fall into two families that hosts are expected to treat differently:
//!
//! - [`RuleDefError`] - the rule-definition string itself is broken (bad syntax,
//!   unknown rule, missing expectation). Raised by the parser and always fatal
//!   to that parse call.
//! - [`RuleConfigError`] - a syntactically valid rule carries an expectation the
//!   rule cannot interpret (`min:abc`, `regex:[0-9`, `type:tristate`). Raised by
//!   rule implementations and captured by the evaluator inside a
//!   [`CheckResult`](crate::CheckResult) instead of being propagated.
//!
//! Ordinary validation failures are not errors at all; they are reported as
//! failed rules in the check result.
//!
//! [`Error`] wraps both families for the outer surfaces (attribute definition
//! files, registry construction).

/// Main error type for the outer surfaces of the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A rule definition string could not be parsed
    #[error("Rule definition error: {0}")]
    Definition(#[from] RuleDefError),

    /// The rule definition of a named attribute could not be parsed
    #[error("Invalid rule definition for attribute '{attribute}': {source}")]
    AttributeDefinition {
        attribute: String,
        #[source]
        source: RuleDefError,
    },

    /// A rule of a named attribute carries an expectation it cannot interpret
    #[error("Misconfigured rule for attribute '{attribute}': {source}")]
    AttributeConfiguration {
        attribute: String,
        #[source]
        source: RuleConfigError,
    },

    /// A rule with the same name is already registered
    #[error("Rule '{name}' is already registered")]
    DuplicateRule { name: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading a definitions or values file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while parsing a rule-definition string.
///
/// A definition that produces any of these must not be used for partial
/// validation; the whole definition is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleDefError {
    /// A segment has no rule name (e.g. `":5"` or `"  : x"`)
    #[error("Rule definition '{segment}' is invalid: missing rule name")]
    MalformedRuleDefinition { segment: String },

    /// The rule name is not known to the registry
    #[error("Unknown rule '{rule_name}'")]
    UnknownRule { rule_name: String },

    /// The rule needs an expectation but none (or a blank one) was given
    #[error("Rule '{rule_name}' requires an expectation (e.g. '{rule_name}:<value>')")]
    MissingExpectation { rule_name: String },
}

/// Configuration faults detected while a rule is being applied.
///
/// These describe an administrator mistake in a rule's expectation, as opposed
/// to a user-supplied value that fails validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuleConfigError {
    /// A numeric expectation could not be parsed as a finite number
    #[error("Invalid {rule_name} expectation '{expectation}': expected a number")]
    InvalidNumber {
        rule_name: String,
        expectation: String,
    },

    /// A regex expectation is not a valid pattern
    #[error("Invalid regex expectation pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A type expectation names no supported type
    #[error("Unsupported type '{type_name}'")]
    UnsupportedType { type_name: String },

    /// The rule is not registered with the evaluating registry
    #[error("Unknown rule '{rule_name}'")]
    UnknownRule { rule_name: String },

    /// The rule needs an expectation and was evaluated without one
    #[error("Rule '{rule_name}' was evaluated without an expectation")]
    MissingExpectation { rule_name: String },
}

/// Result type for the outer surfaces of the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Result type for rule-definition parsing.
pub type RuleDefResult<T> = std::result::Result<T, RuleDefError>;

/// Result type for a single rule application.
pub type RuleCheckResult = std::result::Result<bool, RuleConfigError>;
