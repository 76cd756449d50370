//! Rule-based validation of single attribute values.
//!
//! Rules are written in a small definition language, one string per
//! attribute:
//!
//! ```text
//! required; type:double; min:0; max:100
//! ```
//!
//! The definition is parsed into [`RuleDef`]s, each rule is applied to the
//! value, and the outcome is reported as a [`CheckResult`] listing every failed
//! rule. A rule whose expectation is unusable (`min:abc`, `regex:[0-9`) does not
//! abort the caller; it is captured in the result as a configuration fault.
//!
//! # Core Components
//!
//! - [`AttributeValidator`] - parses definitions and checks values
//! - [`RuleRegistry`] - the rules available to definitions, built-in or custom
//! - [`Rule`] - trait implemented by every rule
//! - [`CheckResult`] - validity, failed rules and any captured fault
//! - [`attribute::AttributeDefinitions`] - rule definitions for a set of attributes
//!
//! # Quick Start
//!
//! ```rust
//! use attribute_rules::{AttributeValidator, RuleDef};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let validator = AttributeValidator::new();
//!
//! let result = validator.check(Some("abc"), Some(r"regex:\d+"))?;
//! assert!(!result.is_valid());
//! assert_eq!(result.failed_rules(), &[RuleDef::with_expectation("regex", r"\d+")]);
//!
//! let result = validator.check(Some("12345"), Some("regex:[0-9"))?;
//! assert!(result.exception().is_some());
//! # Ok(())
//! # }
//! ```

pub mod attribute;
pub mod error;
pub mod evaluator;
pub mod parser;
pub mod registry;
pub mod result;
pub mod rule;
pub mod validator;

// Re-export commonly used types for convenience
pub use error::{Error, Result, RuleConfigError, RuleDefError};
pub use parser::RuleSet;
pub use registry::RuleRegistry;
pub use result::CheckResult;
pub use rule::{Constraint, Rule, RuleDef, ValueType};
pub use validator::AttributeValidator;
