//! Attribute definition files, batch validation and field hints.

use crate::common::{fixture_path, validator};
use attribute_rules::Error;
use attribute_rules::attribute::{AttributeDefinitions, FieldHints, InputType};
use std::collections::HashMap;

fn organization() -> AttributeDefinitions {
    AttributeDefinitions::from_file(fixture_path("organization.json"))
        .expect("Failed to load organization definitions")
}

fn sample_values() -> HashMap<String, String> {
    let content = std::fs::read_to_string(fixture_path("organization_values.json"))
        .expect("Failed to read values fixture");
    serde_json::from_str(&content).expect("Values fixture should be a JSON object")
}

#[test]
fn test_fixture_definitions_verify() {
    let validator = validator();
    let definitions = organization();
    assert_eq!(definitions.len(), 5);
    assert!(definitions.verify(&validator).is_ok());
}

#[test]
fn test_fixture_values_validate() {
    let validator = validator();
    let report = organization()
        .validate(&validator, &sample_values())
        .unwrap();

    assert!(report.is_valid(), "{:?}", report.failure_messages());
    assert_eq!(report.len(), 5);
    assert!(report.get("unrelated").is_none());
    // An empty definition accepts anything, including an absent value.
    assert!(report.get("motto").unwrap().is_valid());
}

#[test]
fn test_invalid_submission_reports_every_attribute() {
    let validator = validator();
    let mut values = sample_values();
    values.insert("employees".to_string(), "0".to_string());
    values.insert("founded".to_string(), "nineteen".to_string());
    values.remove("vatNumber");

    let report = organization().validate(&validator, &values).unwrap();

    assert!(!report.is_valid());
    assert_eq!(
        report.invalid_attributes(),
        vec!["employees", "founded", "vatNumber"]
    );

    let messages = report.failure_messages();
    assert_eq!(messages["employees"], "min: 1");
    assert_eq!(messages["founded"], "type: int, min: 1800, max: 2100");
    assert_eq!(messages["vatNumber"], "required, regex: [A-Z]{2}[0-9]{8,12}");
}

#[test]
fn test_broken_definition_file_names_the_attribute() {
    let validator = validator();
    let definitions = AttributeDefinitions::from_file(fixture_path("broken.json")).unwrap();

    let error = definitions.verify(&validator).unwrap_err();
    match &error {
        Error::AttributeDefinition { attribute, .. } => assert_eq!(attribute, "employees"),
        other => panic!("Expected AttributeDefinition error, got {:?}", other),
    }
    assert!(error.to_string().contains("'employees'"));
}

#[test]
fn test_fixture_field_hints() {
    let validator = validator();
    let hints = organization().field_hints(&validator).unwrap();

    let employees = &hints["employees"];
    assert_eq!(employees.input_type, InputType::Number);
    assert!(employees.required);
    assert_eq!(employees.min, Some(1.0));
    assert_eq!(employees.max, Some(100000.0));

    let website = &hints["website"];
    assert_eq!(website.input_type, InputType::Text);
    assert!(!website.required);
    assert_eq!(website.max_length, Some(64.0));
    assert_eq!(website.pattern.as_deref(), Some(r"https?://\S+"));

    assert_eq!(hints["motto"], FieldHints::default());
}

#[test]
fn test_definitions_round_trip_through_json() {
    let definitions = organization();
    let json = serde_json::to_string(&definitions).unwrap();
    assert_eq!(AttributeDefinitions::from_json_str(&json).unwrap(), definitions);
}
