use std::collections::BTreeSet;

use modelforge_core::{CollationMode, Index, IndexAttribute};

use crate::errors::{ModelError, Result};

/// Reference to an attribute participating in an index.
#[derive(Debug, Clone)]
pub struct IndexAttributeRef {
    name: String,
    collation: CollationMode,
}

impl IndexAttributeRef {
    /// Reference an attribute with the default binary collation.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            collation: CollationMode::default(),
        }
    }

    /// Override the collation mode for this attribute.
    pub fn collation(mut self, collation: CollationMode) -> Self {
        self.collation = collation;
        self
    }
}

/// Fluent draft for one index on an entity.
#[derive(Debug, Clone)]
pub struct IndexDraft {
    name: String,
    attributes: Vec<IndexAttributeRef>,
}

impl IndexDraft {
    pub fn new(
        name: impl Into<String>,
        attributes: impl IntoIterator<Item = IndexAttributeRef>,
    ) -> Self {
        Self {
            name: name.into(),
            attributes: attributes.into_iter().collect(),
        }
    }

    pub(crate) fn compile(self, entity: &str, declared: &BTreeSet<String>) -> Result<Index> {
        if self.attributes.is_empty() {
            return Err(ModelError::EmptyIndex {
                entity: entity.to_string(),
                index: self.name,
            });
        }

        let mut attributes = Vec::with_capacity(self.attributes.len());
        for reference in self.attributes {
            if !declared.contains(&reference.name) {
                return Err(ModelError::UnknownIndexAttribute {
                    entity: entity.to_string(),
                    index: self.name,
                    attribute: reference.name,
                });
            }
            attributes.push(IndexAttribute {
                name: reference.name,
                collation: reference.collation,
            });
        }

        Ok(Index {
            name: self.name,
            attributes,
        })
    }
}
