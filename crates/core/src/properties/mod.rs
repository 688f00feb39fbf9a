//! Properties module - listings synced from the MLS `Property` resource.

mod properties_fields;
mod properties_model;
mod properties_traits;

#[cfg(test)]
mod properties_model_tests;

pub use properties_fields::PROPERTY_FIELDS;
pub use properties_model::{ClosedSale, NewProperty, Property, PropertyNaturalKey};
pub use properties_traits::PropertyRepositoryTrait;
