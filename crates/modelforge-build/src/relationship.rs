use std::collections::BTreeMap;

use modelforge_core::{Cardinality, DeleteRule, Entity, Relationship, RelationshipEnd};

use crate::errors::{ModelError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    HasMany,
    HasOne,
}

#[derive(Debug, Clone)]
struct PropertyPath {
    entity: String,
    property: String,
}

fn parse_path(path: &str) -> Result<PropertyPath> {
    match path.split_once('.') {
        Some((entity, property)) if !entity.is_empty() && !property.is_empty() => Ok(PropertyPath {
            entity: entity.to_string(),
            property: property.to_string(),
        }),
        _ => Err(ModelError::MalformedRelationshipPath(path.to_string())),
    }
}

/// Fluent draft for one relationship declaration.
///
/// Paths are `"Entity.property"` strings. Endpoint entities are looked
/// up during the compiler's second pass; declaring a relationship before
/// both entities exist fails compilation.
#[derive(Debug, Clone)]
pub struct RelationshipDraft {
    source: PropertyPath,
    destination: PropertyPath,
    shape: Shape,
    source_delete_rule: DeleteRule,
    destination_delete_rule: DeleteRule,
}

impl RelationshipDraft {
    /// Declare a one-to-many relationship from `source` to `destination`.
    pub fn has_many(source: &str, destination: &str) -> Result<Self> {
        Ok(Self {
            source: parse_path(source)?,
            destination: parse_path(destination)?,
            shape: Shape::HasMany,
            source_delete_rule: DeleteRule::Cascade,
            destination_delete_rule: DeleteRule::Nullify,
        })
    }

    /// Declare a one-to-one relationship from `source` to `destination`.
    pub fn has_one(source: &str, destination: &str) -> Result<Self> {
        Ok(Self {
            source: parse_path(source)?,
            destination: parse_path(destination)?,
            shape: Shape::HasOne,
            source_delete_rule: DeleteRule::Cascade,
            destination_delete_rule: DeleteRule::Nullify,
        })
    }

    /// Override the default delete rules (source cascades, destination
    /// nullifies).
    pub fn delete_rules(mut self, source: DeleteRule, destination: DeleteRule) -> Self {
        self.source_delete_rule = source;
        self.destination_delete_rule = destination;
        self
    }

    pub(crate) fn resolve(&self, entities: &BTreeMap<String, Entity>) -> Result<Relationship> {
        for path in [&self.source, &self.destination] {
            if !entities.contains_key(&path.entity) {
                return Err(ModelError::UnknownRelationshipEntity(path.entity.clone()));
            }
        }

        let (source_cardinality, destination_cardinality) = match self.shape {
            Shape::HasMany => (Cardinality::MANY, Cardinality::ONE),
            Shape::HasOne => (Cardinality::AT_MOST_ONE, Cardinality::ONE),
        };

        Ok(Relationship {
            source: RelationshipEnd {
                entity: self.source.entity.clone(),
                property: self.source.property.clone(),
                cardinality: source_cardinality,
                delete_rule: self.source_delete_rule,
            },
            destination: RelationshipEnd {
                entity: self.destination.entity.clone(),
                property: self.destination.property.clone(),
                cardinality: destination_cardinality,
                delete_rule: self.destination_delete_rule,
            },
        })
    }
}
