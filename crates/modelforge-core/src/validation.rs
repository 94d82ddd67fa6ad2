use std::collections::{BTreeMap, BTreeSet};

use crate::error::{Error, Result};
use crate::schema::Schema;

/// Validate internal consistency of a compiled schema.
///
/// This checks:
/// - entity map keys and duplicate attribute names
/// - uniqueness constraints and indexes reference declared attributes
/// - default values agree with their attribute's declared type
/// - relationship endpoints exist and are mutual inverses
pub fn validate_schema(schema: &Schema) -> Result<()> {
    let mut catalog: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    for (key, entity) in &schema.entities {
        if *key != entity.name {
            return Err(Error::InvalidSchema(format!(
                "entity key '{}' does not match entity name '{}'",
                key, entity.name
            )));
        }

        let mut attributes = BTreeSet::new();
        for attribute in &entity.attributes {
            if !attributes.insert(attribute.name.clone()) {
                return Err(Error::InvalidSchema(format!(
                    "duplicate attribute name: {}.{}",
                    entity.name, attribute.name
                )));
            }

            if let Some(default) = &attribute.default {
                let found = default.attribute_type();
                if found != attribute.attribute_type {
                    return Err(Error::InvalidSchema(format!(
                        "default value type mismatch: {}.{} declares {} but default is {}",
                        entity.name, attribute.name, attribute.attribute_type, found
                    )));
                }
            }
        }

        catalog.insert(entity.name.clone(), attributes);
    }

    for entity in schema.entities.values() {
        let attributes = &catalog[&entity.name];

        for constraint in &entity.uniqueness_constraints {
            if constraint.attributes.is_empty() {
                return Err(Error::InvalidSchema(format!(
                    "empty uniqueness constraint on entity: {}",
                    entity.name
                )));
            }
            for name in &constraint.attributes {
                if !attributes.contains(name) {
                    return Err(Error::InvalidSchema(format!(
                        "uniqueness constraint attribute not found: {}.{}",
                        entity.name, name
                    )));
                }
            }
        }

        let mut index_names = BTreeSet::new();
        for index in &entity.indexes {
            if !index_names.insert(index.name.clone()) {
                return Err(Error::InvalidSchema(format!(
                    "duplicate index name: {}.{}",
                    entity.name, index.name
                )));
            }
            if index.attributes.is_empty() {
                return Err(Error::InvalidSchema(format!(
                    "index has no attributes: {}.{}",
                    entity.name, index.name
                )));
            }
            for attribute in &index.attributes {
                if !attributes.contains(&attribute.name) {
                    return Err(Error::InvalidSchema(format!(
                        "index attribute not found: {}.{}.{}",
                        entity.name, index.name, attribute.name
                    )));
                }
            }
        }

        for property in &entity.relationships {
            let destination = schema.entities.get(&property.destination_entity).ok_or_else(|| {
                Error::InvalidSchema(format!(
                    "relationship destination entity not found: {}.{} -> {}",
                    entity.name, property.name, property.destination_entity
                ))
            })?;

            let inverse = destination.relationship(&property.inverse_property).ok_or_else(|| {
                Error::InvalidSchema(format!(
                    "inverse relationship property not found: {}.{}",
                    property.destination_entity, property.inverse_property
                ))
            })?;

            if inverse.destination_entity != entity.name || inverse.inverse_property != property.name {
                return Err(Error::InvalidSchema(format!(
                    "relationship properties are not mutual inverses: {}.{} and {}.{}",
                    entity.name, property.name, property.destination_entity, property.inverse_property
                )));
            }
        }
    }

    for relationship in &schema.relationships {
        for end in [&relationship.source, &relationship.destination] {
            let entity = schema.entities.get(&end.entity).ok_or_else(|| {
                Error::InvalidSchema(format!(
                    "relationship endpoint entity not found: {}.{}",
                    end.entity, end.property
                ))
            })?;

            if entity.relationship(&end.property).is_none() {
                return Err(Error::InvalidSchema(format!(
                    "relationship endpoint property not attached: {}.{}",
                    end.entity, end.property
                )));
            }
        }
    }

    Ok(())
}
