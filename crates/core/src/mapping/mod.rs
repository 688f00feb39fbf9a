//! Declarative field mapping from upstream MLS records to local fields.

mod mapping_apply;
mod mapping_model;


pub use mapping_apply::apply_mapping;
pub use mapping_model::{FieldKind, FieldMapping, FieldValue, MappedRecord};
