use std::collections::{BTreeMap, BTreeSet};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::constraints::{Index, Relationship, RelationshipProperty, ValidationPredicate};
use crate::types::{AttributeType, AttributeValue};

/// Top-level compiled schema document.
///
/// Built once by the model compiler and consumed read-only by a storage
/// engine; no mutation happens after compilation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct Schema {
    /// Contract version for this schema format.
    pub schema_version: String,
    /// Entities keyed by name, in deterministic order.
    pub entities: BTreeMap<String, Entity>,
    /// Fully resolved relationship pairs.
    pub relationships: Vec<Relationship>,
}

/// A named record type with attributes and constraints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct Entity {
    pub name: String,
    /// Attributes in declaration order.
    pub attributes: Vec<Attribute>,
    /// Named configurations (partitions) this entity belongs to.
    pub configurations: BTreeSet<String>,
    /// Optional backing-type identifier for the consuming engine.
    pub backing_type: Option<String>,
    pub uniqueness_constraints: Vec<UniquenessConstraint>,
    /// Relationship properties attached during resolution.
    pub relationships: Vec<RelationshipProperty>,
    pub indexes: Vec<Index>,
}

impl Entity {
    /// Look up a declared attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attribute| attribute.name == name)
    }

    /// Look up a relationship property by name.
    pub fn relationship(&self, name: &str) -> Option<&RelationshipProperty> {
        self.relationships
            .iter()
            .find(|relationship| relationship.name == name)
    }
}

/// A typed, optionally-required, optionally-defaulted field on an entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct Attribute {
    pub name: String,
    pub attribute_type: AttributeType,
    pub required: bool,
    /// Default value, type-checked against `attribute_type` at compile time.
    pub default: Option<AttributeValue>,
    /// Compiled validation rules in declaration order.
    pub validations: Vec<ValidationPredicate>,
}

/// One uniqueness constraint: a non-empty ordered attribute list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct UniquenessConstraint {
    pub attributes: Vec<String>,
}
