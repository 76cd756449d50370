//! Per-attribute rule definitions and the reports produced from them.

use super::hints::FieldHints;
use crate::error::{Error, Result};
use crate::result::CheckResult;
use crate::validator::AttributeValidator;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

/// Rule definition strings keyed by attribute name.
///
/// Serialized as a plain JSON object:
///
/// ```json
/// {
///   "vatNumber": "required; regex:[A-Z]{2}[0-9]{8,12}",
///   "employees": "type:integer; min:1"
/// }
/// ```
///
/// Definitions are stored as written and parsed on every use; nothing parsed
/// is kept between calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeDefinitions {
    definitions: BTreeMap<String, String>,
}

impl AttributeDefinitions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> AttributeDefinitionsBuilder {
        AttributeDefinitionsBuilder::default()
    }

    /// Load definitions from a JSON object string.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load definitions from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        log::debug!("Loading attribute definitions from {}", path.as_ref().display());
        Self::from_json_str(&content)
    }

    /// Set the definition of `attribute`, returning the previous one.
    pub fn insert(
        &mut self,
        attribute: impl Into<String>,
        definition: impl Into<String>,
    ) -> Option<String> {
        self.definitions.insert(attribute.into(), definition.into())
    }

    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.definitions.get(attribute).map(String::as_str)
    }

    /// Attribute names with their definitions, ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.definitions
            .iter()
            .map(|(attribute, definition)| (attribute.as_str(), definition.as_str()))
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Check that every definition parses and every expectation is usable.
    ///
    /// Hosts call this at configuration time so that broken definitions are
    /// found before any user input is validated against them.
    pub fn verify(&self, validator: &AttributeValidator) -> Result<()> {
        self.field_hints(validator).map(|_| ())
    }

    /// Validate supplied values against every defined attribute.
    ///
    /// A defined attribute missing from `values` is checked as absent. Values
    /// for attributes without a definition are ignored.
    pub fn validate(
        &self,
        validator: &AttributeValidator,
        values: &HashMap<String, String>,
    ) -> Result<AttributeReport> {
        let mut results = BTreeMap::new();

        for (attribute, definition) in self.iter() {
            let rules = parse_for(validator, attribute, definition)?;
            let value = values.get(attribute).map(String::as_str);
            let result = validator.check_rules(value, &rules);
            if !result.is_valid() {
                log::debug!(
                    "Attribute '{}' is invalid: {}",
                    attribute,
                    result.failure_summary()
                );
            }
            results.insert(attribute.to_string(), result);
        }

        Ok(AttributeReport { results })
    }

    /// Form field hints for every defined attribute.
    pub fn field_hints(
        &self,
        validator: &AttributeValidator,
    ) -> Result<BTreeMap<String, FieldHints>> {
        let mut hints = BTreeMap::new();

        for (attribute, definition) in self.iter() {
            let rules = parse_for(validator, attribute, definition)?;
            let constraints =
                validator
                    .constraints(&rules)
                    .map_err(|source| Error::AttributeConfiguration {
                        attribute: attribute.to_string(),
                        source,
                    })?;
            hints.insert(
                attribute.to_string(),
                FieldHints::from_constraints(&constraints),
            );
        }

        Ok(hints)
    }
}

fn parse_for(
    validator: &AttributeValidator,
    attribute: &str,
    definition: &str,
) -> Result<crate::parser::RuleSet> {
    validator
        .parse_rules(definition)
        .map_err(|source| Error::AttributeDefinition {
            attribute: attribute.to_string(),
            source,
        })
}

/// Builder for [`AttributeDefinitions`].
#[derive(Debug, Default)]
pub struct AttributeDefinitionsBuilder {
    definitions: BTreeMap<String, String>,
}

impl AttributeDefinitionsBuilder {
    /// Define the rules of one attribute. A later call for the same attribute
    /// replaces the earlier definition.
    pub fn attribute(mut self, name: impl Into<String>, definition: impl Into<String>) -> Self {
        self.definitions.insert(name.into(), definition.into());
        self
    }

    pub fn build(self) -> AttributeDefinitions {
        AttributeDefinitions {
            definitions: self.definitions,
        }
    }
}

/// Per-attribute check results of one [`AttributeDefinitions::validate`] call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AttributeReport {
    results: BTreeMap<String, CheckResult>,
}

impl AttributeReport {
    /// Whether every attribute passed.
    pub fn is_valid(&self) -> bool {
        self.results.values().all(CheckResult::is_valid)
    }

    pub fn get(&self, attribute: &str) -> Option<&CheckResult> {
        self.results.get(attribute)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CheckResult)> {
        self.results
            .iter()
            .map(|(attribute, result)| (attribute.as_str(), result))
    }

    /// Names of attributes that failed, ordered by name.
    pub fn invalid_attributes(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, result)| !result.is_valid())
            .map(|(attribute, _)| attribute)
            .collect()
    }

    /// Names of attributes whose rules are misconfigured.
    pub fn misconfigured_attributes(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, result)| result.is_misconfigured())
            .map(|(attribute, _)| attribute)
            .collect()
    }

    /// Failure summary of every invalid attribute, keyed by attribute name.
    pub fn failure_messages(&self) -> BTreeMap<&str, String> {
        self.iter()
            .filter(|(_, result)| !result.is_valid())
            .map(|(attribute, result)| (attribute, result.failure_summary()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
