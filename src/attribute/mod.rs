//! Rule definitions for a whole set of named attributes.
//!
//! Hosts keep one rule-definition string per attribute (typically in
//! persisted configuration). This module loads such a set, validates a batch of
//! submitted values against it, and derives form field hints from it.
//!
//! # Key Types
//!
//! - [`AttributeDefinitions`] - attribute name to rule definition string
//! - [`AttributeReport`] - per-attribute check results
//! - [`FieldHints`] - input hints for rendering an attribute's form field
//!
//! # Examples
//!
//! ```rust
//! use attribute_rules::AttributeValidator;
//! use attribute_rules::attribute::AttributeDefinitions;
//! use std::collections::HashMap;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let validator = AttributeValidator::new();
//! let definitions = AttributeDefinitions::builder()
//!     .attribute("employees", "required; type:integer; min:1")
//!     .attribute("website", "maxLength:64")
//!     .build();
//!
//! let values = HashMap::from([("employees".to_string(), "0".to_string())]);
//! let report = definitions.validate(&validator, &values)?;
//!
//! assert_eq!(report.invalid_attributes(), vec!["employees"]);
//! assert_eq!(report.failure_messages()["employees"], "min: 1");
//! # Ok(())
//! # }
//! ```

pub mod definitions;
pub mod hints;


pub use definitions::{AttributeDefinitions, AttributeDefinitionsBuilder, AttributeReport};
pub use hints::{FieldHints, InputType};
