use std::collections::BTreeSet;

use modelforge_core::{Entity, UniquenessConstraint};

use crate::attribute::AttributeDraft;
use crate::errors::{ModelError, Result};
use crate::index::IndexDraft;

/// Fluent draft for one entity declaration.
///
/// Attributes are fixed at construction; post-configuration (backing
/// type, configurations, uniqueness constraints, indexes) is applied
/// through value-semantics modifiers.
#[derive(Debug, Clone)]
pub struct EntityDraft {
    name: String,
    attributes: Vec<AttributeDraft>,
    configurations: BTreeSet<String>,
    backing_type: Option<String>,
    uniqueness: Vec<Vec<String>>,
    indexes: Vec<IndexDraft>,
}

impl EntityDraft {
    /// Declare an entity with its ordered attribute list.
    pub fn new(
        name: impl Into<String>,
        attributes: impl IntoIterator<Item = AttributeDraft>,
    ) -> Self {
        Self {
            name: name.into(),
            attributes: attributes.into_iter().collect(),
            configurations: BTreeSet::new(),
            backing_type: None,
            uniqueness: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Assign the backing-type identifier. Idempotent, last write wins.
    pub fn backing_type(mut self, name: impl Into<String>) -> Self {
        self.backing_type = Some(name.into());
        self
    }

    /// Add the entity to a named configuration. Duplicates collapse.
    pub fn configuration(mut self, name: impl Into<String>) -> Self {
        self.configurations.insert(name.into());
        self
    }

    /// Append one uniqueness constraint over the named attributes.
    pub fn unique<S: Into<String>>(mut self, attributes: impl IntoIterator<Item = S>) -> Self {
        self.uniqueness
            .push(attributes.into_iter().map(Into::into).collect());
        self
    }

    /// Append index drafts, resolved against the declared attributes at
    /// compile time.
    pub fn indexing(mut self, indexes: impl IntoIterator<Item = IndexDraft>) -> Self {
        self.indexes.extend(indexes);
        self
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn compile(self) -> Result<Entity> {
        let mut declared = BTreeSet::new();
        for draft in &self.attributes {
            if !declared.insert(draft.name().to_string()) {
                return Err(ModelError::DuplicateAttribute {
                    entity: self.name,
                    attribute: draft.name().to_string(),
                });
            }
        }

        let mut attributes = Vec::with_capacity(self.attributes.len());
        for draft in self.attributes {
            attributes.push(draft.compile(&self.name)?);
        }

        let mut uniqueness_constraints = Vec::with_capacity(self.uniqueness.len());
        for constraint in self.uniqueness {
            if constraint.is_empty() {
                return Err(ModelError::EmptyUniquenessConstraint { entity: self.name });
            }
            for attribute in &constraint {
                if !declared.contains(attribute) {
                    return Err(ModelError::UnknownConstraintAttribute {
                        entity: self.name,
                        attribute: attribute.clone(),
                    });
                }
            }
            uniqueness_constraints.push(UniquenessConstraint {
                attributes: constraint,
            });
        }

        let mut index_names = BTreeSet::new();
        let mut indexes = Vec::with_capacity(self.indexes.len());
        for draft in self.indexes {
            let index = draft.compile(&self.name, &declared)?;
            if !index_names.insert(index.name.clone()) {
                return Err(ModelError::DuplicateIndex {
                    entity: self.name,
                    index: index.name,
                });
            }
            indexes.push(index);
        }

        Ok(Entity {
            name: self.name,
            attributes,
            configurations: self.configurations,
            backing_type: self.backing_type,
            uniqueness_constraints,
            relationships: Vec::new(),
            indexes,
        })
    }
}
