use modelforge_core::{Attribute, AttributeType, AttributeValue};

use crate::errors::{ModelError, Result};
use crate::validation::Validation;

/// Fluent draft for one entity attribute.
///
/// Every modifier consumes the draft and returns a new owned value, so a
/// draft kept around after refinement never aliases the refined one.
#[derive(Debug, Clone)]
pub struct AttributeDraft {
    name: String,
    attribute_type: AttributeType,
    required: bool,
    default: Option<AttributeValue>,
    validations: Vec<Validation>,
}

impl AttributeDraft {
    /// Start a draft for an optional attribute of the given type.
    pub fn new(name: impl Into<String>, attribute_type: AttributeType) -> Self {
        Self {
            name: name.into(),
            attribute_type,
            required: false,
            default: None,
            validations: Vec::new(),
        }
    }

    /// Mark the attribute as required or optional.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the default value. Type agreement with the declared type tag
    /// is checked at compile time, not here.
    pub fn default_value(mut self, value: AttributeValue) -> Self {
        self.default = Some(value);
        self
    }

    /// Append validation rules in declaration order.
    pub fn validating(mut self, rules: impl IntoIterator<Item = Validation>) -> Self {
        self.validations.extend(rules);
        self
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn compile(self, entity: &str) -> Result<Attribute> {
        if let Some(default) = &self.default {
            let found = default.attribute_type();
            if found != self.attribute_type {
                return Err(ModelError::DefaultTypeMismatch {
                    entity: entity.to_string(),
                    attribute: self.name,
                    expected: self.attribute_type,
                    found,
                });
            }
        }

        let mut validations = Vec::with_capacity(self.validations.len());
        for rule in self.validations {
            validations.push(rule.compile()?);
        }

        Ok(Attribute {
            name: self.name,
            attribute_type: self.attribute_type,
            required: self.required,
            default: self.default,
            validations,
        })
    }
}
