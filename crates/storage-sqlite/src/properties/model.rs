//! Database models for listings.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use log::warn;
use serde_json::{Map, Value};

use salesboard_core::properties::{ClosedSale, NewProperty, Property};

use crate::errors::StorageError;
use crate::utils::{
    date_to_text, decimal_to_text, text_to_opt_date, text_to_opt_decimal, text_to_opt_timestamp,
    text_to_timestamp, timestamp_to_text,
};

/// Database model for listing rows.
#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone,
)]
#[diesel(table_name = crate::schema::properties)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct PropertyDB {
    pub id: String,
    pub listing_key_numeric: i64,
    pub buyer_agent_key_numeric: Option<i64>,
    pub list_agent_key_numeric: Option<i64>,
    pub standard_status: String,
    pub listing_id: Option<String>,
    pub property_type: Option<String>,
    pub property_sub_type: Option<String>,
    pub mls_status: Option<String>,
    pub list_price: Option<String>,
    pub close_price: Option<String>,
    pub close_date: Option<String>,
    pub list_agent_full_name: Option<String>,
    pub list_agent_aor: Option<String>,
    pub buyer_agent_full_name: Option<String>,
    pub buyer_agent_aor: Option<String>,
    pub street_number: Option<String>,
    pub street_name: Option<String>,
    pub unit_number: Option<String>,
    pub city: Option<String>,
    pub state_or_province: Option<String>,
    pub postal_code: Option<String>,
    pub unparsed_address: Option<String>,
    pub modification_timestamp: Option<String>,
    /// JSON object of every mapped field without a dedicated column.
    pub attributes: String,
    pub created_at: String,
    pub updated_at: String,
}

impl PropertyDB {
    pub fn from_new(
        id: String,
        new_property: NewProperty,
        now: DateTime<Utc>,
    ) -> Result<Self, StorageError> {
        let stamp = timestamp_to_text(now);
        let attributes = serde_json::to_string(&Value::Object(new_property.attributes))?;
        Ok(Self {
            id,
            listing_key_numeric: new_property.listing_key_numeric,
            buyer_agent_key_numeric: new_property.buyer_agent_key_numeric,
            list_agent_key_numeric: new_property.list_agent_key_numeric,
            standard_status: new_property.standard_status,
            listing_id: new_property.listing_id,
            property_type: new_property.property_type,
            property_sub_type: new_property.property_sub_type,
            mls_status: new_property.mls_status,
            list_price: new_property.list_price.map(decimal_to_text),
            close_price: new_property.close_price.map(decimal_to_text),
            close_date: new_property.close_date.map(date_to_text),
            list_agent_full_name: new_property.list_agent_full_name,
            list_agent_aor: new_property.list_agent_aor,
            buyer_agent_full_name: new_property.buyer_agent_full_name,
            buyer_agent_aor: new_property.buyer_agent_aor,
            street_number: new_property.street_number,
            street_name: new_property.street_name,
            unit_number: new_property.unit_number,
            city: new_property.city,
            state_or_province: new_property.state_or_province,
            postal_code: new_property.postal_code,
            unparsed_address: new_property.unparsed_address,
            modification_timestamp: new_property.modification_timestamp.map(timestamp_to_text),
            attributes,
            created_at: stamp.clone(),
            updated_at: stamp,
        })
    }
}

fn parse_attributes(id: &str, raw: &str) -> Map<String, Value> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => map,
        Ok(_) | Err(_) => {
            warn!("Ignoring malformed attributes on property {}", id);
            Map::new()
        }
    }
}

impl From<PropertyDB> for Property {
    fn from(db: PropertyDB) -> Self {
        let attributes = parse_attributes(&db.id, &db.attributes);
        Self {
            id: db.id,
            listing_key_numeric: db.listing_key_numeric,
            buyer_agent_key_numeric: db.buyer_agent_key_numeric,
            list_agent_key_numeric: db.list_agent_key_numeric,
            standard_status: db.standard_status,
            listing_id: db.listing_id,
            property_type: db.property_type,
            property_sub_type: db.property_sub_type,
            mls_status: db.mls_status,
            list_price: text_to_opt_decimal(db.list_price),
            close_price: text_to_opt_decimal(db.close_price),
            close_date: text_to_opt_date(db.close_date),
            list_agent_full_name: db.list_agent_full_name,
            list_agent_aor: db.list_agent_aor,
            buyer_agent_full_name: db.buyer_agent_full_name,
            buyer_agent_aor: db.buyer_agent_aor,
            street_number: db.street_number,
            street_name: db.street_name,
            unit_number: db.unit_number,
            city: db.city,
            state_or_province: db.state_or_province,
            postal_code: db.postal_code,
            unparsed_address: db.unparsed_address,
            modification_timestamp: text_to_opt_timestamp(db.modification_timestamp),
            attributes,
            created_at: text_to_timestamp(&db.created_at),
            updated_at: text_to_timestamp(&db.updated_at),
        }
    }
}

/// Projection of the columns the aggregation reads.
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::properties)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ClosedSaleDB {
    pub listing_key_numeric: i64,
    pub close_price: Option<String>,
    pub close_date: Option<String>,
    pub list_agent_key_numeric: Option<i64>,
    pub list_agent_aor: Option<String>,
    pub buyer_agent_key_numeric: Option<i64>,
    pub buyer_agent_aor: Option<String>,
}

impl From<ClosedSaleDB> for ClosedSale {
    fn from(db: ClosedSaleDB) -> Self {
        Self {
            listing_key_numeric: db.listing_key_numeric,
            close_price: text_to_opt_decimal(db.close_price),
            close_date: text_to_opt_date(db.close_date),
            list_agent_key_numeric: db.list_agent_key_numeric,
            list_agent_aor: db.list_agent_aor,
            buyer_agent_key_numeric: db.buyer_agent_key_numeric,
            buyer_agent_aor: db.buyer_agent_aor,
        }
    }
}
