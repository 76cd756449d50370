//! Common test utilities for attribute rule testing.

use attribute_rules::{AttributeValidator, CheckResult};
use std::path::PathBuf;

/// Install `env_logger` once for the whole test binary.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Validator over the built-in rules, with logging enabled.
pub fn validator() -> AttributeValidator {
    init_logging();
    AttributeValidator::new()
}

/// Check `value` against a definition that is expected to parse.
pub fn check(value: Option<&str>, definition: &str) -> CheckResult {
    validator()
        .check(value, Some(definition))
        .unwrap_or_else(|e| panic!("Definition '{}' should parse: {}", definition, e))
}

/// Path of a file under `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Assert a check passed.
#[macro_export]
macro_rules! assert_valid {
    ($result:expr) => {{
        let result = &$result;
        assert!(
            result.is_valid(),
            "Expected a valid result, got failures [{}] (exception: {:?})",
            result.failure_summary(),
            result.exception()
        );
    }};
}

/// Assert a check failed on exactly the given rules, in order, without a
/// captured configuration fault.
#[macro_export]
macro_rules! assert_failed_rules {
    ($result:expr, [$($rule:expr),+ $(,)?]) => {{
        let result = &$result;
        let expected: Vec<attribute_rules::RuleDef> = vec![$($rule),+];
        assert!(!result.is_valid(), "Expected an invalid result");
        assert!(
            result.exception().is_none(),
            "Expected plain validation failures, got exception {:?}",
            result.exception()
        );
        assert_eq!(result.failed_rules(), expected.as_slice());
    }};
}

/// Assert a check captured a configuration fault raised by `$rule`.
#[macro_export]
macro_rules! assert_misconfigured {
    ($result:expr, $rule:expr, $pattern:pat) => {{
        let result = &$result;
        assert!(!result.is_valid(), "Expected an invalid result");
        assert_eq!(result.failed_rules(), &[$rule]);
        match result.exception() {
            Some($pattern) => {}
            other => panic!("Unexpected exception {:?}", other),
        }
    }};
}
