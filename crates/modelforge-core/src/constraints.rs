use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::{AttributeValue, CollationMode};

/// Compiled validation rule: a predicate expression with bound arguments
/// and the failure message surfaced when the predicate rejects a value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct ValidationPredicate {
    pub expression: String,
    pub arguments: Vec<AttributeValue>,
    pub message: String,
}

/// One attribute participating in an index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct IndexAttribute {
    pub name: String,
    pub collation: CollationMode,
}

/// Index definition preserving attribute order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct Index {
    pub name: String,
    pub attributes: Vec<IndexAttribute>,
}

/// Count bounds for one relationship end. `max == None` means unbounded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct Cardinality {
    pub min: u32,
    pub max: Option<u32>,
}

impl Cardinality {
    /// Exactly one related object.
    pub const ONE: Cardinality = Cardinality {
        min: 1,
        max: Some(1),
    };

    /// Zero or one related object.
    pub const AT_MOST_ONE: Cardinality = Cardinality {
        min: 0,
        max: Some(1),
    };

    /// Any number of related objects.
    pub const MANY: Cardinality = Cardinality { min: 0, max: None };
}

/// Delete-propagation rule for one relationship end.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DeleteRule {
    Cascade,
    Nullify,
    NoAction,
    Deny,
}

/// One end of a resolved relationship.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct RelationshipEnd {
    pub entity: String,
    pub property: String,
    pub cardinality: Cardinality,
    pub delete_rule: DeleteRule,
}

/// A resolved relationship. The two ends are mutual inverses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct Relationship {
    pub source: RelationshipEnd,
    pub destination: RelationshipEnd,
}

/// Per-entity view of one relationship end, attached to the owning
/// entity's property list. The inverse property lives on
/// `destination_entity`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct RelationshipProperty {
    pub name: String,
    pub destination_entity: String,
    pub inverse_property: String,
    pub cardinality: Cardinality,
    pub delete_rule: DeleteRule,
}
