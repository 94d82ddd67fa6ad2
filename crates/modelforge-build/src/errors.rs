use modelforge_core::AttributeType;
use thiserror::Error;

/// Configuration and type errors raised during model compilation.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("duplicate entity name: {0}")]
    DuplicateEntity(String),

    #[error("duplicate attribute name: {entity}.{attribute}")]
    DuplicateAttribute { entity: String, attribute: String },

    #[error("duplicate index name: {entity}.{index}")]
    DuplicateIndex { entity: String, index: String },

    #[error("index has no attributes: {entity}.{index}")]
    EmptyIndex { entity: String, index: String },

    #[error("index attribute not found: {entity}.{index}.{attribute}")]
    UnknownIndexAttribute {
        entity: String,
        index: String,
        attribute: String,
    },

    #[error("uniqueness constraint has no attributes on entity: {entity}")]
    EmptyUniquenessConstraint { entity: String },

    #[error("uniqueness constraint attribute not found: {entity}.{attribute}")]
    UnknownConstraintAttribute { entity: String, attribute: String },

    #[error("invalid length range: min {min} exceeds max {max}")]
    InvalidLengthRange { min: u64, max: u64 },

    #[error("malformed relationship path (expected 'Entity.property'): {0}")]
    MalformedRelationshipPath(String),

    #[error("relationship endpoint references undeclared entity: {0}")]
    UnknownRelationshipEntity(String),

    #[error("default value type mismatch: {entity}.{attribute} declares {expected} but default is {found}")]
    DefaultTypeMismatch {
        entity: String,
        attribute: String,
        expected: AttributeType,
        found: AttributeType,
    },
}

/// Result type for model compilation operations.
pub type Result<T> = std::result::Result<T, ModelError>;
