//! Property (listing) domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::ReconcileError;
use crate::mapping::MappedRecord;

/// Composite identity of a listing row.
///
/// A status change or a change of agents yields a different key and thus a new
/// row; earlier rows are kept as history.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyNaturalKey {
    pub listing_key_numeric: i64,
    pub buyer_agent_key_numeric: Option<i64>,
    pub list_agent_key_numeric: Option<i64>,
    pub standard_status: String,
}

impl std::fmt::Display for PropertyNaturalKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let opt = |v: Option<i64>| v.map(|k| k.to_string()).unwrap_or_else(|| "-".to_string());
        write!(
            f,
            "listing {} (list agent {}, buyer agent {}, {})",
            self.listing_key_numeric,
            opt(self.list_agent_key_numeric),
            opt(self.buyer_agent_key_numeric),
            self.standard_status
        )
    }
}

/// Domain model representing a stored listing row.
///
/// Columns used for identity, rankings and addresses are typed; every other
/// mapped field lives in `attributes` under its local name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub listing_key_numeric: i64,
    pub buyer_agent_key_numeric: Option<i64>,
    pub list_agent_key_numeric: Option<i64>,
    pub standard_status: String,
    pub listing_id: Option<String>,
    pub property_type: Option<String>,
    pub property_sub_type: Option<String>,
    pub mls_status: Option<String>,
    pub list_price: Option<Decimal>,
    pub close_price: Option<Decimal>,
    pub close_date: Option<NaiveDate>,
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
    pub modification_timestamp: Option<DateTime<Utc>>,
    pub attributes: Map<String, Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Property {
    pub fn natural_key(&self) -> PropertyNaturalKey {
        PropertyNaturalKey {
            listing_key_numeric: self.listing_key_numeric,
            buyer_agent_key_numeric: self.buyer_agent_key_numeric,
            list_agent_key_numeric: self.list_agent_key_numeric,
            standard_status: self.standard_status.clone(),
        }
    }

    /// Formatted street address, e.g. `123 Main St, Provo, UT 84601`.
    pub fn full_address(&self) -> String {
        let non_empty = |v: &Option<String>| {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        let street: Vec<String> = [&self.street_number, &self.street_name, &self.unit_number]
            .into_iter()
            .filter_map(non_empty)
            .collect();
        let street = if street.is_empty() {
            non_empty(&self.unparsed_address)
        } else {
            Some(street.join(" "))
        };

        let region: Vec<String> = [&self.state_or_province, &self.postal_code]
            .into_iter()
            .filter_map(non_empty)
            .collect();
        let region = (!region.is_empty()).then(|| region.join(" "));

        [street, non_empty(&self.city), region]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Reads a mapped field that has no dedicated column.
    pub fn attribute(&self, local_name: &str) -> Option<&Value> {
        self.attributes.get(local_name).filter(|v| !v.is_null())
    }
}

/// Input model for creating or refreshing a listing row.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProperty {
    pub listing_key_numeric: i64,
    pub buyer_agent_key_numeric: Option<i64>,
    pub list_agent_key_numeric: Option<i64>,
    pub standard_status: String,
    pub listing_id: Option<String>,
    pub property_type: Option<String>,
    pub property_sub_type: Option<String>,
    pub mls_status: Option<String>,
    pub list_price: Option<Decimal>,
    pub close_price: Option<Decimal>,
    pub close_date: Option<NaiveDate>,
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
    pub modification_timestamp: Option<DateTime<Utc>>,
    pub attributes: Map<String, Value>,
}

impl NewProperty {
    /// Builds a listing from a record mapped with [`super::PROPERTY_FIELDS`].
    ///
    /// `ListingKeyNumeric` and `StandardStatus` are required; absent agent keys
    /// are part of the natural key as nulls.
    pub fn from_mapped(mut m: MappedRecord) -> Result<Self, ReconcileError> {
        let listing_key_numeric = m
            .take_integer("listing_key_numeric")?
            .ok_or(ReconcileError::MissingNaturalKey("ListingKeyNumeric"))?;
        let standard_status = m
            .take_text("standard_status")?
            .filter(|s| !s.trim().is_empty())
            .ok_or(ReconcileError::MissingNaturalKey("StandardStatus"))?;

        Ok(Self {
            listing_key_numeric,
            buyer_agent_key_numeric: m.take_integer("buyer_agent_key_numeric")?,
            list_agent_key_numeric: m.take_integer("list_agent_key_numeric")?,
            standard_status,
            listing_id: m.take_text("listing_id")?,
            property_type: m.take_text("property_type")?,
            property_sub_type: m.take_text("property_sub_type")?,
            mls_status: m.take_text("mls_status")?,
            list_price: m.take_decimal("list_price")?,
            close_price: m.take_decimal("close_price")?,
            close_date: m.take_date("close_date")?,
            list_agent_full_name: m.take_text("list_agent_full_name")?,
            list_agent_aor: m.take_text("list_agent_aor")?,
            buyer_agent_full_name: m.take_text("buyer_agent_full_name")?,
            buyer_agent_aor: m.take_text("buyer_agent_aor")?,
            street_number: m.take_text("street_number")?,
            street_name: m.take_text("street_name")?,
            unit_number: m.take_text("unit_number")?,
            city: m.take_text("city")?,
            state_or_province: m.take_text("state_or_province")?,
            postal_code: m.take_text("postal_code")?,
            unparsed_address: m.take_text("unparsed_address")?,
            modification_timestamp: m.take_timestamp("modification_timestamp")?,
            attributes: m.into_attributes(),
        })
    }

    pub fn natural_key(&self) -> PropertyNaturalKey {
        PropertyNaturalKey {
            listing_key_numeric: self.listing_key_numeric,
            buyer_agent_key_numeric: self.buyer_agent_key_numeric,
            list_agent_key_numeric: self.list_agent_key_numeric,
            standard_status: self.standard_status.clone(),
        }
    }
}

/// The slice of a closed listing the rankings need.
#[derive(Debug, Clone, PartialEq)]
pub struct ClosedSale {
    pub listing_key_numeric: i64,
    pub close_price: Option<Decimal>,
    pub close_date: Option<NaiveDate>,
    pub list_agent_key_numeric: Option<i64>,
    pub list_agent_aor: Option<String>,
    pub buyer_agent_key_numeric: Option<i64>,
    pub buyer_agent_aor: Option<String>,
}
