//! The `regex` rule.

use super::{Constraint, Rule, required_expectation, trimmed};
use crate::error::{RuleCheckResult, RuleConfigError};
use regex_automata::meta::{BuildError, Regex};
use regex_syntax::hir::{Hir, Look};

/// Passes when the whole trimmed value matches the expectation pattern.
///
/// The pattern is compiled on every check; compiled patterns are not kept
/// between calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegexRule;

impl RegexRule {
    pub const NAME: &'static str = "regex";

    /// Compile `pattern` anchored at both ends.
    ///
    /// Anchors are added to the parsed pattern rather than to its text, so
    /// patterns with inline flags or trailing `(?x)` comments keep their
    /// meaning and a fragment such as `a)|(b` is still rejected.
    pub fn compile(pattern: &str) -> Result<Regex, RuleConfigError> {
        let invalid = |source| RuleConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        };

        let hir = regex_syntax::parse(pattern)
            .map_err(|e| invalid(regex::Error::Syntax(e.to_string())))?;
        let anchored = Hir::concat(vec![Hir::look(Look::Start), hir, Hir::look(Look::End)]);

        Regex::builder()
            .build_from_hir(&anchored)
            .map_err(|e| invalid(build_error(e)))
    }
}

fn build_error(error: BuildError) -> regex::Error {
    match error.size_limit() {
        Some(limit) => regex::Error::CompiledTooBig(limit),
        None => regex::Error::Syntax(error.to_string()),
    }
}

impl Rule for RegexRule {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn requires_expectation(&self) -> bool {
        true
    }

    fn check(&self, value: Option<&str>, expectation: Option<&str>) -> RuleCheckResult {
        let pattern = required_expectation(Self::NAME, expectation)?;
        let regex = Self::compile(pattern)?;
        Ok(regex.is_match(trimmed(value)))
    }

    fn constraint(&self, expectation: Option<&str>) -> Result<Option<Constraint>, RuleConfigError> {
        let pattern = required_expectation(Self::NAME, expectation)?;
        Self::compile(pattern)?;
        Ok(Some(Constraint::Pattern(pattern.to_string())))
    }
}
