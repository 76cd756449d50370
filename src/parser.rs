//! Parser for the rule-definition language.
//!
//! A definition is a `;`-separated list of rules, each written as
//! `ruleName[:expectation]`:
//!
//! ```text
//! required; type:double; min:0; max:100
//! ```
//!
//! - blank segments, including the one after a trailing `;`, are skipped
//! - each segment is split on its **first** `:`, so expectations may contain
//!   colons (`regex:[A-Z]{2}:[0-9]{4}`); they cannot contain `;`
//! - rule names and expectations are trimmed
//! - an empty definition is a valid definition with no rules
//!
//! Parsing is all-or-nothing: the first bad segment rejects the definition.

use crate::error::{RuleDefError, RuleDefResult};
use crate::registry::RuleRegistry;
use crate::rule::{RuleDef, non_blank};

use serde::{Deserialize, Serialize};

const RULE_SEPARATOR: char = ';';
const EXPECTATION_SEPARATOR: char = ':';

/// Ordered collection of parsed rule definitions.
///
/// Keeps the order rules were written in. An identical `(ruleName,
/// expectation)` pair is stored once, at its first position. The same rule
/// name with different expectations is stored once per expectation and every
/// entry is enforced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<RuleDef>", into = "Vec<RuleDef>")]
pub struct RuleSet {
    rules: Vec<RuleDef>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule definition unless an identical one is already present.
    ///
    /// Returns whether the definition was added.
    pub fn insert(&mut self, rule: RuleDef) -> bool {
        if self.rules.contains(&rule) {
            return false;
        }
        self.rules.push(rule);
        true
    }

    pub fn contains(&self, rule: &RuleDef) -> bool {
        self.rules.contains(rule)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RuleDef> {
        self.rules.iter()
    }

    pub fn as_slice(&self) -> &[RuleDef] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<RuleDef> for RuleSet {
    fn from_iter<I: IntoIterator<Item = RuleDef>>(iter: I) -> Self {
        let mut set = RuleSet::new();
        for rule in iter {
            set.insert(rule);
        }
        set
    }
}

impl From<Vec<RuleDef>> for RuleSet {
    fn from(rules: Vec<RuleDef>) -> Self {
        rules.into_iter().collect()
    }
}

impl From<RuleSet> for Vec<RuleDef> {
    fn from(rules: RuleSet) -> Self {
        rules.rules
    }
}

impl IntoIterator for RuleSet {
    type Item = RuleDef;
    type IntoIter = std::vec::IntoIter<RuleDef>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a RuleDef;
    type IntoIter = std::slice::Iter<'a, RuleDef>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl AsRef<[RuleDef]> for RuleSet {
    fn as_ref(&self) -> &[RuleDef] {
        &self.rules
    }
}

/// Parse a complete rule definition string against `registry`.
pub fn parse_rules(registry: &RuleRegistry, definition: &str) -> RuleDefResult<RuleSet> {
    let mut rules = RuleSet::new();

    for segment in definition
        .split(RULE_SEPARATOR)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
    {
        let rule = parse_rule(registry, segment)?;
        log::trace!("Parsed rule segment '{}' as {:?}", segment, rule);
        if !rules.insert(rule) {
            log::trace!("Dropped duplicate rule segment '{}'", segment);
        }
    }

    Ok(rules)
}

/// Parse a single `ruleName[:expectation]` segment.
pub fn parse_rule(registry: &RuleRegistry, segment: &str) -> RuleDefResult<RuleDef> {
    let segment = segment.trim();
    let (rule_name, expectation) = match segment.split_once(EXPECTATION_SEPARATOR) {
        Some((rule_name, expectation)) => (rule_name.trim(), Some(expectation.trim())),
        None => (segment, None),
    };

    if rule_name.is_empty() {
        return Err(RuleDefError::MalformedRuleDefinition {
            segment: segment.to_string(),
        });
    }

    let rule = registry
        .resolve(rule_name)
        .ok_or_else(|| RuleDefError::UnknownRule {
            rule_name: rule_name.to_string(),
        })?;

    if rule.requires_expectation() && non_blank(expectation).is_none() {
        return Err(RuleDefError::MissingExpectation {
            rule_name: rule_name.to_string(),
        });
    }

    Ok(RuleDef::from_parts(
        rule_name.to_string(),
        expectation.map(str::to_string),
    ))
}
