use modelforge_core::{AttributeValue, ValidationPredicate};

use crate::errors::{ModelError, Result};

/// Declarative validation rule for a string-like attribute.
///
/// Known rules compile to a concrete predicate expression; `Custom`
/// passes its expression and arguments through verbatim for the
/// consuming engine's evaluator.
#[derive(Debug, Clone)]
pub enum Validation {
    /// Value length must fall within `min..=max`.
    Length { min: u64, max: u64, message: String },
    /// Value length must be at least `min`.
    LengthAtLeast { min: u64, message: String },
    /// Value length must be at most `max`.
    LengthAtMost { max: u64, message: String },
    /// Value must start with the given prefix.
    HasPrefix { prefix: String, message: String },
    /// Value must end with the given suffix.
    HasSuffix { suffix: String, message: String },
    /// Uninterpreted predicate expression with bound arguments.
    Custom {
        expression: String,
        arguments: Vec<AttributeValue>,
        message: String,
    },
}

impl Validation {
    pub(crate) fn compile(self) -> Result<ValidationPredicate> {
        match self {
            Validation::Length { min, max, message } => {
                if min > max {
                    return Err(ModelError::InvalidLengthRange { min, max });
                }
                Ok(ValidationPredicate {
                    expression: format!("SELF.length BETWEEN {{{min}, {max}}}"),
                    arguments: Vec::new(),
                    message,
                })
            }
            Validation::LengthAtLeast { min, message } => Ok(ValidationPredicate {
                expression: format!("SELF.length >= {min}"),
                arguments: Vec::new(),
                message,
            }),
            Validation::LengthAtMost { max, message } => Ok(ValidationPredicate {
                expression: format!("SELF.length <= {max}"),
                arguments: Vec::new(),
                message,
            }),
            Validation::HasPrefix { prefix, message } => Ok(ValidationPredicate {
                expression: "SELF BEGINSWITH ?".to_string(),
                arguments: vec![AttributeValue::String(prefix)],
                message,
            }),
            Validation::HasSuffix { suffix, message } => Ok(ValidationPredicate {
                expression: "SELF ENDSWITH ?".to_string(),
                arguments: vec![AttributeValue::String(suffix)],
                message,
            }),
            Validation::Custom {
                expression,
                arguments,
                message,
            } => Ok(ValidationPredicate {
                expression,
                arguments,
                message,
            }),
        }
    }
}
