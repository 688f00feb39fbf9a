use chrono::{NaiveDate, Utc};
use rust_decimal_macros::dec;
use serde_json::{json, Value};

use super::*;
use crate::errors::ReconcileError;
use crate::mapping::apply_mapping;

fn mapped(value: Value) -> crate::mapping::MappedRecord {
    apply_mapping(value.as_object().unwrap(), PROPERTY_FIELDS).unwrap()
}

fn stored(new_property: NewProperty) -> Property {
    let now = Utc::now();
    Property {
        id: "p-1".to_string(),
        listing_key_numeric: new_property.listing_key_numeric,
        buyer_agent_key_numeric: new_property.buyer_agent_key_numeric,
        list_agent_key_numeric: new_property.list_agent_key_numeric,
        standard_status: new_property.standard_status,
        listing_id: new_property.listing_id,
        property_type: new_property.property_type,
        property_sub_type: new_property.property_sub_type,
        mls_status: new_property.mls_status,
        list_price: new_property.list_price,
        close_price: new_property.close_price,
        close_date: new_property.close_date,
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
        modification_timestamp: new_property.modification_timestamp,
        attributes: new_property.attributes,
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn test_property_table_has_unique_names() {
    let mut external: Vec<&str> = PROPERTY_FIELDS.iter().map(|f| f.external).collect();
    let mut local: Vec<&str> = PROPERTY_FIELDS.iter().map(|f| f.local).collect();
    external.sort_unstable();
    external.dedup();
    local.sort_unstable();
    local.dedup();
    assert_eq!(external.len(), PROPERTY_FIELDS.len());
    assert_eq!(local.len(), PROPERTY_FIELDS.len());
}

#[test]
fn test_from_mapped_splits_typed_columns_and_attributes() {
    let property = NewProperty::from_mapped(mapped(json!({
        "ListingKeyNumeric": 1900001,
        "ListAgentKeyNumeric": 111,
        "BuyerAgentKeyNumeric": 222,
        "StandardStatus": "Closed",
        "PropertyType": "Residential",
        "ClosePrice": 525000,
        "CloseDate": "2024-08-15",
        "ListAgentAOR": "UCAOR",
        "BedroomsTotal": 4,
        "GarageYN": "Y",
        "PublicRemarks": "Mountain views"
    })))
    .unwrap();

    assert_eq!(property.listing_key_numeric, 1900001);
    assert_eq!(property.list_agent_key_numeric, Some(111));
    assert_eq!(property.buyer_agent_key_numeric, Some(222));
    assert_eq!(property.standard_status, "Closed");
    assert_eq!(property.close_price, Some(dec!(525000)));
    assert_eq!(property.close_date, NaiveDate::from_ymd_opt(2024, 8, 15));
    assert_eq!(property.buyer_agent_aor, None);

    assert_eq!(property.attributes["bedrooms_total"], json!(4));
    assert_eq!(property.attributes["garage_yn"], json!(true));
    assert_eq!(property.attributes["public_remarks"], json!("Mountain views"));
    assert!(!property.attributes.contains_key("close_price"));
    assert!(!property.attributes.contains_key("bathrooms_full"));
}

#[test]
fn test_from_mapped_requires_listing_key_and_status() {
    let err = NewProperty::from_mapped(mapped(json!({"StandardStatus": "Active"}))).unwrap_err();
    assert_eq!(err, ReconcileError::MissingNaturalKey("ListingKeyNumeric"));

    let err = NewProperty::from_mapped(mapped(json!({"ListingKeyNumeric": 5}))).unwrap_err();
    assert_eq!(err, ReconcileError::MissingNaturalKey("StandardStatus"));
}

#[test]
fn test_natural_key_keeps_absent_agents_as_none() {
    let property = NewProperty::from_mapped(mapped(json!({
        "ListingKeyNumeric": 77,
        "ListAgentKeyNumeric": 10,
        "StandardStatus": "Active"
    })))
    .unwrap();

    assert_eq!(
        property.natural_key(),
        PropertyNaturalKey {
            listing_key_numeric: 77,
            buyer_agent_key_numeric: None,
            list_agent_key_numeric: Some(10),
            standard_status: "Active".to_string(),
        }
    );
}

#[test]
fn test_full_address() {
    let mut new_property = NewProperty {
        listing_key_numeric: 1,
        standard_status: "Active".to_string(),
        street_number: Some("123".into()),
        street_name: Some("Main St".into()),
        city: Some("Provo".into()),
        state_or_province: Some("UT".into()),
        postal_code: Some("84601".into()),
        ..Default::default()
    };
    assert_eq!(stored(new_property.clone()).full_address(), "123 Main St, Provo, UT 84601");

    new_property.street_number = None;
    new_property.street_name = None;
    new_property.unparsed_address = Some("45 E Center".into());
    new_property.postal_code = None;
    assert_eq!(stored(new_property).full_address(), "45 E Center, Provo, UT");
}

#[test]
fn test_attribute_lookup_ignores_nulls() {
    let mut new_property = NewProperty {
        listing_key_numeric: 1,
        standard_status: "Active".to_string(),
        ..Default::default()
    };
    new_property.attributes.insert("view".into(), Value::Null);
    new_property.attributes.insert("roof".into(), json!("Asphalt"));

    let property = stored(new_property);
    assert_eq!(property.attribute("roof"), Some(&json!("Asphalt")));
    assert_eq!(property.attribute("view"), None);
    assert_eq!(property.attribute("zoning"), None);
}
