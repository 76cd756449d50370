//! # Attribute Rule Checker
//!
//! A command-line utility for checking attribute definition files before they
//! are deployed, and optionally validating a set of sample values against them.
//!
//! ## Usage
//!
//! ### Check a Definitions File
//!
//! ```bash
//! cargo run --bin rule-check definitions.json
//! ```
//!
//! ### Validate Values Against It
//!
//! ```bash
//! cargo run --bin rule-check definitions.json values.json
//! ```
//!
//! Both files are JSON objects keyed by attribute name; definitions map to
//! rule definition strings, values map to the submitted string values.
//!
//! ## Output Examples
//!
//! ```text
//! Checking attribute definitions: definitions.json
//!
//!   ✓ employees: type: integer, min: 1
//!       hints: input=number required=false min=1 max=- minLength=- maxLength=-
//!   ✓ vatNumber: required, regex: [A-Z]{2}[0-9]{8,12}
//!       hints: input=text required=true min=- max=- minLength=- maxLength=- pattern=[A-Z]{2}[0-9]{8,12}
//!
//! Validating values: values.json
//!   ✓ employees
//!   ❌ vatNumber: required, regex: [A-Z]{2}[0-9]{8,12}
//! ```
//!
//! ## Exit Codes
//!
//! - `0`: All definitions are usable (and all values valid, when given)
//! - `1`: A definition is broken, a value is invalid, or a file could not be read

use attribute_rules::attribute::{AttributeDefinitions, FieldHints};
use attribute_rules::{AttributeValidator, Error};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.len() > 3 {
        let program = program_name(&args);
        eprintln!("Usage: {} <definitions.json> [values.json]", program);
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  {} definitions.json", program);
        eprintln!("  {} definitions.json values.json", program);
        process::exit(1);
    }

    let validator = AttributeValidator::new();

    let definitions_path = Path::new(&args[1]);
    let definitions = match check_definitions(&validator, definitions_path) {
        Ok(definitions) => definitions,
        Err(e) => {
            eprintln!("❌ {}", e);
            process::exit(1);
        }
    };

    if let Some(values_path) = args.get(2) {
        match validate_values(&validator, &definitions, Path::new(values_path)) {
            Ok(true) => {}
            Ok(false) => process::exit(1),
            Err(e) => {
                eprintln!("❌ {}", e);
                process::exit(1);
            }
        }
    }
}

fn program_name(args: &[String]) -> &str {
    args.first().map_or("rule-check", String::as_str)
}

fn check_definitions(
    validator: &AttributeValidator,
    path: &Path,
) -> Result<AttributeDefinitions, Error> {
    println!("Checking attribute definitions: {}", path.display());
    println!();

    let definitions = AttributeDefinitions::from_file(path)?;
    if definitions.is_empty() {
        println!("  (no attributes defined)");
        return Ok(definitions);
    }

    let hints = definitions.field_hints(validator)?;
    for (attribute, definition) in definitions.iter() {
        let rules = validator.parse_rules(definition)?;
        let rules = rules
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        println!("  ✓ {}: {}", attribute, rules);
        if let Some(hints) = hints.get(attribute) {
            println!("      hints: {}", describe_hints(hints));
        }
    }

    Ok(definitions)
}

fn validate_values(
    validator: &AttributeValidator,
    definitions: &AttributeDefinitions,
    path: &Path,
) -> Result<bool, Error> {
    println!();
    println!("Validating values: {}", path.display());

    let content = fs::read_to_string(path)?;
    let values: HashMap<String, String> = serde_json::from_str(&content)?;
    let report = definitions.validate(validator, &values)?;

    for (attribute, result) in report.iter() {
        if result.is_valid() {
            println!("  ✓ {}", attribute);
        } else if let Some(exception) = result.exception() {
            println!("  ❌ {}: misconfigured rule ({})", attribute, exception);
        } else {
            println!("  ❌ {}: {}", attribute, result.failure_summary());
        }
    }

    Ok(report.is_valid())
}

fn describe_hints(hints: &FieldHints) -> String {
    let bound = |value: Option<f64>| value.map_or_else(|| "-".to_string(), |v| v.to_string());
    let mut description = format!(
        "input={} required={} min={} max={} minLength={} maxLength={}",
        hints.input_type.as_str(),
        hints.required,
        bound(hints.min),
        bound(hints.max),
        bound(hints.min_length),
        bound(hints.max_length),
    );
    if let Some(pattern) = &hints.pattern {
        description.push_str(&format!(" pattern={}", pattern));
    }
    description
}
