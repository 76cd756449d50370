//! Form field hints derived from rule constraints.

use crate::rule::Constraint;

use serde::{Deserialize, Serialize};

/// Kind of input control suggested for an attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Number,
    #[default]
    Text,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Number => "number",
            InputType::Text => "text",
        }
    }
}

/// Client-side hints for rendering an attribute's form field.
///
/// Hints mirror the rules so a form can reject obviously bad input early; the
/// rules stay authoritative. When a bound appears more than once, the
/// strictest one is reported since every occurrence is enforced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldHints {
    pub input_type: InputType,
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<f64>,
    pub max_length: Option<f64>,
    pub pattern: Option<String>,
}

impl FieldHints {
    pub fn from_constraints<'a, I>(constraints: I) -> Self
    where
        I: IntoIterator<Item = &'a Constraint>,
    {
        let mut hints = FieldHints::default();

        for constraint in constraints {
            match constraint {
                Constraint::Required => hints.required = true,
                Constraint::Type(value_type) => {
                    if value_type.is_numeric() {
                        hints.input_type = InputType::Number;
                    }
                }
                Constraint::Min(min) => hints.min = Some(hints.min.map_or(*min, |m| m.max(*min))),
                Constraint::Max(max) => hints.max = Some(hints.max.map_or(*max, |m| m.min(*max))),
                Constraint::MinLength(min) => {
                    hints.min_length = Some(hints.min_length.map_or(*min, |m| m.max(*min)))
                }
                Constraint::MaxLength(max) => {
                    hints.max_length = Some(hints.max_length.map_or(*max, |m| m.min(*max)))
                }
                Constraint::Pattern(pattern) => hints.pattern = Some(pattern.clone()),
            }
        }

        hints
    }
}
