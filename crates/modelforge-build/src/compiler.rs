use std::collections::BTreeMap;

use modelforge_core::{Entity, Relationship, RelationshipProperty, SCHEMA_VERSION, Schema};

use crate::entity::EntityDraft;
use crate::errors::{ModelError, Result};
use crate::relationship::RelationshipDraft;

/// Two-phase model compiler.
///
/// Entity drafts are compiled first, in declaration order; relationship
/// drafts are then resolved against the completed entity set. The API
/// accepts declarations in any order but never interleaves the phases.
#[derive(Debug, Default)]
pub struct ModelCompiler {
    entities: Vec<EntityDraft>,
    relationships: Vec<RelationshipDraft>,
}

impl ModelCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity declaration.
    pub fn entity(mut self, draft: EntityDraft) -> Self {
        self.entities.push(draft);
        self
    }

    /// Add a relationship declaration, resolved during `compile`.
    pub fn relationship(mut self, draft: RelationshipDraft) -> Self {
        self.relationships.push(draft);
        self
    }

    /// Compile all declarations into an immutable schema.
    ///
    /// Compilation is deterministic and all-or-nothing: identical
    /// declarations yield structurally equal schemas, and the first
    /// error aborts without returning a partial document.
    pub fn compile(self) -> Result<Schema> {
        let mut entities: BTreeMap<String, Entity> = BTreeMap::new();

        for draft in self.entities {
            let name = draft.name().to_string();
            if entities.contains_key(&name) {
                return Err(ModelError::DuplicateEntity(name));
            }
            let entity = draft.compile()?;
            tracing::debug!(
                event = "entity_compiled",
                entity = %name,
                attributes = entity.attributes.len(),
                indexes = entity.indexes.len()
            );
            entities.insert(name, entity);
        }

        let mut relationships = Vec::with_capacity(self.relationships.len());
        for draft in self.relationships {
            let relationship = draft.resolve(&entities)?;
            attach(&mut entities, &relationship);
            tracing::debug!(
                event = "relationship_resolved",
                source = %format!("{}.{}", relationship.source.entity, relationship.source.property),
                destination = %format!(
                    "{}.{}",
                    relationship.destination.entity, relationship.destination.property
                )
            );
            relationships.push(relationship);
        }

        let schema = Schema {
            schema_version: SCHEMA_VERSION.to_string(),
            entities,
            relationships,
        };
        tracing::debug!(
            event = "model_compiled",
            entities = schema.entities.len(),
            relationships = schema.relationships.len()
        );
        Ok(schema)
    }
}

/// Attach mutual-inverse relationship properties to both endpoint
/// entities. Both entities are known to exist after resolution.
fn attach(entities: &mut BTreeMap<String, Entity>, relationship: &Relationship) {
    let source = &relationship.source;
    let destination = &relationship.destination;

    if let Some(entity) = entities.get_mut(&source.entity) {
        entity.relationships.push(RelationshipProperty {
            name: source.property.clone(),
            destination_entity: destination.entity.clone(),
            inverse_property: destination.property.clone(),
            cardinality: source.cardinality,
            delete_rule: source.delete_rule,
        });
    }

    if let Some(entity) = entities.get_mut(&destination.entity) {
        entity.relationships.push(RelationshipProperty {
            name: destination.property.clone(),
            destination_entity: source.entity.clone(),
            inverse_property: source.property.clone(),
            cardinality: destination.cardinality,
            delete_rule: destination.delete_rule,
        });
    }
}
