//! Declarative model builder for Modelforge.
//!
//! Entities, attributes, indexes, and relationships are declared through
//! fluent value-semantics drafts, then compiled in two phases (entities
//! first, relationships second) into an immutable
//! [`modelforge_core::Schema`]. Compilation is all-or-nothing: the first
//! configuration error aborts and no partial schema is returned.

pub mod attribute;
pub mod compiler;
pub mod entity;
pub mod errors;
pub mod index;
pub mod relationship;
pub mod validation;

pub use attribute::AttributeDraft;
pub use compiler::ModelCompiler;
pub use entity::EntityDraft;
pub use errors::{ModelError, Result};
pub use index::{IndexAttributeRef, IndexDraft};
pub use relationship::RelationshipDraft;
pub use validation::Validation;
