//! Rule registry mapping rule names to rule implementations.
//!
//! The registry is built once, then shared read-only between any number of
//! parse and check calls. It is an explicit value handed to the
//! [`AttributeValidator`](crate::AttributeValidator) rather than a global
//! table, so tests and hosts can substitute their own rule sets.

use crate::error::{Error, Result};
use crate::rule::{
    MaxLengthRule, MaxRule, MinLengthRule, MinRule, RegexRule, RequiredRule, Rule, TypeRule,
};

use std::collections::HashMap;
use std::sync::Arc;

/// Registry of validation rules keyed by rule name.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rules: HashMap<String, Arc<dyn Rule>>,
}

impl RuleRegistry {
    /// Create a registry holding the built-in rules: `required`, `type`, `min`,
    /// `max`, `minLength`, `maxLength` and `regex`.
    pub fn new() -> Self {
        let builtin: [Arc<dyn Rule>; 7] = [
            Arc::new(RequiredRule),
            Arc::new(TypeRule),
            Arc::new(MinRule),
            Arc::new(MaxRule),
            Arc::new(MinLengthRule),
            Arc::new(MaxLengthRule),
            Arc::new(RegexRule),
        ];

        let rules = builtin
            .into_iter()
            .map(|rule| (rule.name().to_string(), rule))
            .collect();

        Self { rules }
    }

    /// Create a registry without any rules.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add a rule to the registry.
    ///
    /// Fails with [`Error::DuplicateRule`] if a rule with the same name is
    /// already registered.
    pub fn register<R: Rule + 'static>(&mut self, rule: R) -> Result<()> {
        self.register_shared(Arc::new(rule))
    }

    /// Add an already shared rule to the registry.
    pub fn register_shared(&mut self, rule: Arc<dyn Rule>) -> Result<()> {
        let name = rule.name().to_string();
        if self.rules.contains_key(&name) {
            return Err(Error::DuplicateRule { name });
        }

        log::debug!("Registered rule '{}'", name);
        self.rules.insert(name, rule);
        Ok(())
    }

    /// Builder-style [`register`](Self::register).
    pub fn with_rule<R: Rule + 'static>(mut self, rule: R) -> Result<Self> {
        self.register(rule)?;
        Ok(self)
    }

    /// Look a rule up by its exact name.
    pub fn resolve(&self, rule_name: &str) -> Option<&Arc<dyn Rule>> {
        self.rules.get(rule_name)
    }

    pub fn contains(&self, rule_name: &str) -> bool {
        self.rules.contains_key(rule_name)
    }

    /// Names of all registered rules, sorted.
    pub fn rule_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
