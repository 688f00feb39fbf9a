use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::sqlite::Sqlite;
use diesel::SqliteConnection;
use log::debug;
use uuid::Uuid;

use salesboard_core::constants::{CLOSED_STATUS, RESIDENTIAL_PROPERTY_TYPE};
use salesboard_core::errors::ValidationError;
use salesboard_core::properties::{
    ClosedSale, NewProperty, Property, PropertyNaturalKey, PropertyRepositoryTrait,
};
use salesboard_core::sync::UpsertOutcome;
use salesboard_core::utils::time_utils::year_bounds;
use salesboard_core::Result;

use super::model::{ClosedSaleDB, PropertyDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::properties;
use crate::utils::date_to_text;

pub struct PropertyRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl PropertyRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        PropertyRepository { pool, writer }
    }
}

/// Rows matching a natural key, where a null agent key only matches null.
fn by_natural_key(key: &PropertyNaturalKey) -> properties::BoxedQuery<'static, Sqlite> {
    let mut query = properties::table
        .filter(properties::listing_key_numeric.eq(key.listing_key_numeric))
        .filter(properties::standard_status.eq(key.standard_status.clone()))
        .into_boxed();

    query = match key.buyer_agent_key_numeric {
        Some(agent) => query.filter(properties::buyer_agent_key_numeric.eq(agent)),
        None => query.filter(properties::buyer_agent_key_numeric.is_null()),
    };
    match key.list_agent_key_numeric {
        Some(agent) => query.filter(properties::list_agent_key_numeric.eq(agent)),
        None => query.filter(properties::list_agent_key_numeric.is_null()),
    }
}

#[async_trait]
impl PropertyRepositoryTrait for PropertyRepository {
    async fn upsert(&self, new_property: NewProperty) -> Result<UpsertOutcome> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<UpsertOutcome> {
                let key = new_property.natural_key();
                let existing = by_natural_key(&key)
                    .select((properties::id, properties::created_at))
                    .first::<(String, String)>(conn)
                    .optional()
                    .map_err(StorageError::from)?;

                match existing {
                    Some((existing_id, created_at)) => {
                        let mut row =
                            PropertyDB::from_new(existing_id.clone(), new_property, Utc::now())?;
                        row.created_at = created_at;
                        diesel::update(properties::table.find(&existing_id))
                            .set(&row)
                            .execute(conn)
                            .map_err(StorageError::from)?;
                        debug!("Updated {}", key);
                        Ok(UpsertOutcome::updated(existing_id))
                    }
                    None => {
                        let new_id = Uuid::new_v4().to_string();
                        let row = PropertyDB::from_new(new_id.clone(), new_property, Utc::now())?;
                        diesel::insert_into(properties::table)
                            .values(&row)
                            .execute(conn)
                            .map_err(StorageError::from)?;
                        debug!("Created {}", key);
                        Ok(UpsertOutcome::created(new_id))
                    }
                }
            })
            .await
    }

    fn get_by_natural_key(&self, key: &PropertyNaturalKey) -> Result<Option<Property>> {
        let mut conn = get_connection(&self.pool)?;
        let row = by_natural_key(key)
            .select(PropertyDB::as_select())
            .first::<PropertyDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(Property::from))
    }

    fn list_by_listing_key(&self, listing_key_numeric: i64) -> Result<Vec<Property>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = properties::table
            .filter(properties::listing_key_numeric.eq(listing_key_numeric))
            .order(properties::created_at.asc())
            .select(PropertyDB::as_select())
            .load::<PropertyDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Property::from).collect())
    }

    fn list_closed_sales(&self, year: i32) -> Result<Vec<ClosedSale>> {
        let (first_day, last_day) = year_bounds(year)
            .ok_or_else(|| ValidationError::InvalidInput(format!("Invalid year: {}", year)))?;

        let mut conn = get_connection(&self.pool)?;
        let rows = properties::table
            .filter(properties::standard_status.eq(CLOSED_STATUS))
            .filter(properties::property_type.eq(RESIDENTIAL_PROPERTY_TYPE))
            .filter(properties::close_date.ge(date_to_text(first_day)))
            .filter(properties::close_date.le(date_to_text(last_day)))
            .order(properties::listing_key_numeric.asc())
            .select(ClosedSaleDB::as_select())
            .load::<ClosedSaleDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(ClosedSale::from).collect())
    }

    fn count(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        properties::table.count().get_result::<i64>(&mut conn).into_core()
    }
}
