//! Member (agent) domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ReconcileError;
use crate::mapping::MappedRecord;

/// Domain model representing an MLS member as stored locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub member_key_numeric: i64,
    pub office_key_numeric: Option<i64>,
    pub member_aor_key: Option<String>,
    pub member_aor: Option<String>,
    pub member_address1: Option<String>,
    pub member_address2: Option<String>,
    pub member_city: Option<String>,
    pub member_first_name: Option<String>,
    pub member_full_name: Option<String>,
    pub member_key: Option<String>,
    pub member_last_name: Option<String>,
    pub member_middle_name: Option<String>,
    pub member_mls_id: Option<String>,
    pub member_mobile_phone: Option<String>,
    pub member_national_association_id: Option<String>,
    pub member_office_phone: Option<String>,
    pub member_postal_code: Option<String>,
    pub member_preferred_phone: Option<String>,
    pub member_state_license: Option<String>,
    pub office_key: Option<String>,
    pub office_mls_id: Option<String>,
    pub office_name: Option<String>,
    pub originating_system_member_key: Option<String>,
    pub originating_system_name: Option<String>,
    pub member_mls_access_yn: Option<bool>,
    pub modification_timestamp: Option<DateTime<Utc>>,
    pub original_entry_timestamp: Option<DateTime<Utc>>,
    pub member_country: Option<String>,
    pub member_county_or_parish: Option<String>,
    pub member_state_license_state: Option<String>,
    pub member_state_or_province: Option<String>,
    pub member_status: Option<String>,
    pub member_type: Option<String>,
    pub member_designation: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Member {
    /// Name to show in listings and reports.
    pub fn display_name(&self) -> String {
        if let Some(full) = self.member_full_name.as_deref().filter(|s| !s.trim().is_empty()) {
            return full.trim().to_string();
        }
        let parts: Vec<&str> = [&self.member_first_name, &self.member_last_name]
            .into_iter()
            .filter_map(|p| p.as_deref())
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();
        if parts.is_empty() {
            format!("Member {}", self.member_key_numeric)
        } else {
            parts.join(" ")
        }
    }
}

/// Input model for creating or refreshing a member from an upstream record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMember {
    pub member_key_numeric: i64,
    pub office_key_numeric: Option<i64>,
    pub member_aor_key: Option<String>,
    pub member_aor: Option<String>,
    pub member_address1: Option<String>,
    pub member_address2: Option<String>,
    pub member_city: Option<String>,
    pub member_first_name: Option<String>,
    pub member_full_name: Option<String>,
    pub member_key: Option<String>,
    pub member_last_name: Option<String>,
    pub member_middle_name: Option<String>,
    pub member_mls_id: Option<String>,
    pub member_mobile_phone: Option<String>,
    pub member_national_association_id: Option<String>,
    pub member_office_phone: Option<String>,
    pub member_postal_code: Option<String>,
    pub member_preferred_phone: Option<String>,
    pub member_state_license: Option<String>,
    pub office_key: Option<String>,
    pub office_mls_id: Option<String>,
    pub office_name: Option<String>,
    pub originating_system_member_key: Option<String>,
    pub originating_system_name: Option<String>,
    pub member_mls_access_yn: Option<bool>,
    pub modification_timestamp: Option<DateTime<Utc>>,
    pub original_entry_timestamp: Option<DateTime<Utc>>,
    pub member_country: Option<String>,
    pub member_county_or_parish: Option<String>,
    pub member_state_license_state: Option<String>,
    pub member_state_or_province: Option<String>,
    pub member_status: Option<String>,
    pub member_type: Option<String>,
    pub member_designation: Option<String>,
}

impl NewMember {
    /// Builds a member from a record mapped with [`super::MEMBER_FIELDS`].
    pub fn from_mapped(mut m: MappedRecord) -> Result<Self, ReconcileError> {
        let member_key_numeric = m
            .take_integer("member_key_numeric")?
            .ok_or(ReconcileError::MissingNaturalKey("MemberKeyNumeric"))?;

        Ok(Self {
            member_key_numeric,
            office_key_numeric: m.take_integer("office_key_numeric")?,
            member_aor_key: m.take_text("member_aor_key")?,
            member_aor: m.take_text("member_aor")?,
            member_address1: m.take_text("member_address1")?,
            member_address2: m.take_text("member_address2")?,
            member_city: m.take_text("member_city")?,
            member_first_name: m.take_text("member_first_name")?,
            member_full_name: m.take_text("member_full_name")?,
            member_key: m.take_text("member_key")?,
            member_last_name: m.take_text("member_last_name")?,
            member_middle_name: m.take_text("member_middle_name")?,
            member_mls_id: m.take_text("member_mls_id")?,
            member_mobile_phone: m.take_text("member_mobile_phone")?,
            member_national_association_id: m.take_text("member_national_association_id")?,
            member_office_phone: m.take_text("member_office_phone")?,
            member_postal_code: m.take_text("member_postal_code")?,
            member_preferred_phone: m.take_text("member_preferred_phone")?,
            member_state_license: m.take_text("member_state_license")?,
            office_key: m.take_text("office_key")?,
            office_mls_id: m.take_text("office_mls_id")?,
            office_name: m.take_text("office_name")?,
            originating_system_member_key: m.take_text("originating_system_member_key")?,
            originating_system_name: m.take_text("originating_system_name")?,
            member_mls_access_yn: m.take_bool("member_mls_access_yn")?,
            modification_timestamp: m.take_timestamp("modification_timestamp")?,
            original_entry_timestamp: m.take_timestamp("original_entry_timestamp")?,
            member_country: m.take_text("member_country")?,
            member_county_or_parish: m.take_text("member_county_or_parish")?,
            member_state_license_state: m.take_text("member_state_license_state")?,
            member_state_or_province: m.take_text("member_state_or_province")?,
            member_status: m.take_text("member_status")?,
            member_type: m.take_text("member_type")?,
            member_designation: m.take_text("member_designation")?,
        })
    }
}
