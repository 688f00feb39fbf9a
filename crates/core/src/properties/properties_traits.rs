//! Property repository trait.

use async_trait::async_trait;

use super::properties_model::{ClosedSale, NewProperty, Property, PropertyNaturalKey};
use crate::errors::Result;
use crate::sync::UpsertOutcome;

/// Persistence contract for listings, keyed by [`PropertyNaturalKey`].
#[async_trait]
pub trait PropertyRepositoryTrait: Send + Sync {
    /// Creates the row for this natural key or overwrites the existing one.
    ///
    /// Null agent keys match null agent keys. Runs in its own transaction.
    async fn upsert(&self, new_property: NewProperty) -> Result<UpsertOutcome>;

    fn get_by_natural_key(&self, key: &PropertyNaturalKey) -> Result<Option<Property>>;

    /// Rows for one listing across statuses and agent changes.
    fn list_by_listing_key(&self, listing_key_numeric: i64) -> Result<Vec<Property>>;

    /// Closed residential sales whose close date falls in `year`.
    fn list_closed_sales(&self, year: i32) -> Result<Vec<ClosedSale>>;

    fn count(&self) -> Result<i64>;
}
