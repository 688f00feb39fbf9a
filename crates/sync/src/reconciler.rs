//! Turns raw upstream records into local rows.

use std::sync::Arc;

use salesboard_core::mapping::apply_mapping;
use salesboard_core::members::{MemberRepositoryTrait, NewMember, MEMBER_FIELDS};
use salesboard_core::properties::{NewProperty, PropertyRepositoryTrait, PROPERTY_FIELDS};
use salesboard_core::sync::UpsertOutcome;
use salesboard_core::Result;
use salesboard_mls::{EntityType, ExternalRecord};

/// Maps a record through the entity's field table and upserts it by natural key.
///
/// Each call persists at most one row in its own transaction.
pub struct Reconciler {
    member_repository: Arc<dyn MemberRepositoryTrait>,
    property_repository: Arc<dyn PropertyRepositoryTrait>,
}

impl Reconciler {
    pub fn new(
        member_repository: Arc<dyn MemberRepositoryTrait>,
        property_repository: Arc<dyn PropertyRepositoryTrait>,
    ) -> Self {
        Self {
            member_repository,
            property_repository,
        }
    }

    pub async fn reconcile(
        &self,
        entity: EntityType,
        record: &ExternalRecord,
    ) -> Result<UpsertOutcome> {
        match entity {
            EntityType::Member => {
                let mapped = apply_mapping(record, MEMBER_FIELDS)?;
                let member = NewMember::from_mapped(mapped)?;
                self.member_repository.upsert(member).await
            }
            EntityType::Property => {
                let mapped = apply_mapping(record, PROPERTY_FIELDS)?;
                let property = NewProperty::from_mapped(mapped)?;
                self.property_repository.upsert(property).await
            }
        }
    }
}

/// Short human label for a raw record, used in log lines.
pub fn record_label(entity: EntityType, record: &ExternalRecord) -> String {
    let key = record
        .get(entity.order_key())
        .map(|v| v.to_string())
        .unwrap_or_else(|| "?".to_string());
    match entity {
        EntityType::Member => format!("member {}", key),
        EntityType::Property => {
            let status = record
                .get("StandardStatus")
                .and_then(|v| v.as_str())
                .unwrap_or("?");
            format!("listing {} ({})", key, status)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_label() {
        let member = json!({"MemberKeyNumeric": 42});
        assert_eq!(
            record_label(EntityType::Member, member.as_object().unwrap()),
            "member 42"
        );

        let listing = json!({"ListingKeyNumeric": 7, "StandardStatus": "Closed"});
        assert_eq!(
            record_label(EntityType::Property, listing.as_object().unwrap()),
            "listing 7 (Closed)"
        );

        let empty = json!({});
        assert_eq!(
            record_label(EntityType::Property, empty.as_object().unwrap()),
            "listing ? (?)"
        );
    }
}
