//! Core contracts and helpers for Modelforge.
//!
//! This crate defines the canonical compiled-schema types, validation
//! helpers, and the delete-propagation graph report shared between the
//! model builder and any storage engine consuming a compiled schema.

pub mod constraints;
pub mod error;
pub mod graph;
pub mod schema;
pub mod types;
pub mod validation;

pub use constraints::{
    Cardinality, DeleteRule, Index, IndexAttribute, Relationship, RelationshipEnd,
    RelationshipProperty, ValidationPredicate,
};
pub use error::{Error, Result};
pub use graph::{DeleteGraphReport, DeleteGraphSummary, build_delete_graph_report};
pub use schema::{Attribute, Entity, Schema, UniquenessConstraint};
pub use types::{AttributeType, AttributeValue, CollationMode};
pub use validation::validate_schema;

/// Current schema contract version for compiled schema documents.
pub const SCHEMA_VERSION: &str = "0.1";
