//! Database models for members.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use salesboard_core::members::{Member, NewMember};

use crate::utils::{text_to_opt_timestamp, text_to_timestamp, timestamp_to_text};

/// Database model for members.
///
/// `treat_none_as_null` makes an update overwrite fields the upstream record
/// no longer carries.
#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone,
)]
#[diesel(table_name = crate::schema::members)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct MemberDB {
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
    pub modification_timestamp: Option<String>,
    pub original_entry_timestamp: Option<String>,
    pub member_country: Option<String>,
    pub member_county_or_parish: Option<String>,
    pub member_state_license_state: Option<String>,
    pub member_state_or_province: Option<String>,
    pub member_status: Option<String>,
    pub member_type: Option<String>,
    pub member_designation: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl MemberDB {
    /// Row for `new_member` with the given id and both timestamps set to `now`.
    pub fn from_new(id: String, new_member: NewMember, now: DateTime<Utc>) -> Self {
        let stamp = timestamp_to_text(now);
        Self {
            id,
            member_key_numeric: new_member.member_key_numeric,
            office_key_numeric: new_member.office_key_numeric,
            member_aor_key: new_member.member_aor_key,
            member_aor: new_member.member_aor,
            member_address1: new_member.member_address1,
            member_address2: new_member.member_address2,
            member_city: new_member.member_city,
            member_first_name: new_member.member_first_name,
            member_full_name: new_member.member_full_name,
            member_key: new_member.member_key,
            member_last_name: new_member.member_last_name,
            member_middle_name: new_member.member_middle_name,
            member_mls_id: new_member.member_mls_id,
            member_mobile_phone: new_member.member_mobile_phone,
            member_national_association_id: new_member.member_national_association_id,
            member_office_phone: new_member.member_office_phone,
            member_postal_code: new_member.member_postal_code,
            member_preferred_phone: new_member.member_preferred_phone,
            member_state_license: new_member.member_state_license,
            office_key: new_member.office_key,
            office_mls_id: new_member.office_mls_id,
            office_name: new_member.office_name,
            originating_system_member_key: new_member.originating_system_member_key,
            originating_system_name: new_member.originating_system_name,
            member_mls_access_yn: new_member.member_mls_access_yn,
            modification_timestamp: new_member.modification_timestamp.map(timestamp_to_text),
            original_entry_timestamp: new_member.original_entry_timestamp.map(timestamp_to_text),
            member_country: new_member.member_country,
            member_county_or_parish: new_member.member_county_or_parish,
            member_state_license_state: new_member.member_state_license_state,
            member_state_or_province: new_member.member_state_or_province,
            member_status: new_member.member_status,
            member_type: new_member.member_type,
            member_designation: new_member.member_designation,
            created_at: stamp.clone(),
            updated_at: stamp,
        }
    }
}

impl From<MemberDB> for Member {
    fn from(db: MemberDB) -> Self {
        Self {
            id: db.id,
            member_key_numeric: db.member_key_numeric,
            office_key_numeric: db.office_key_numeric,
            member_aor_key: db.member_aor_key,
            member_aor: db.member_aor,
            member_address1: db.member_address1,
            member_address2: db.member_address2,
            member_city: db.member_city,
            member_first_name: db.member_first_name,
            member_full_name: db.member_full_name,
            member_key: db.member_key,
            member_last_name: db.member_last_name,
            member_middle_name: db.member_middle_name,
            member_mls_id: db.member_mls_id,
            member_mobile_phone: db.member_mobile_phone,
            member_national_association_id: db.member_national_association_id,
            member_office_phone: db.member_office_phone,
            member_postal_code: db.member_postal_code,
            member_preferred_phone: db.member_preferred_phone,
            member_state_license: db.member_state_license,
            office_key: db.office_key,
            office_mls_id: db.office_mls_id,
            office_name: db.office_name,
            originating_system_member_key: db.originating_system_member_key,
            originating_system_name: db.originating_system_name,
            member_mls_access_yn: db.member_mls_access_yn,
            modification_timestamp: text_to_opt_timestamp(db.modification_timestamp),
            original_entry_timestamp: text_to_opt_timestamp(db.original_entry_timestamp),
            member_country: db.member_country,
            member_county_or_parish: db.member_county_or_parish,
            member_state_license_state: db.member_state_license_state,
            member_state_or_province: db.member_state_or_province,
            member_status: db.member_status,
            member_type: db.member_type,
            member_designation: db.member_designation,
            created_at: text_to_timestamp(&db.created_at),
            updated_at: text_to_timestamp(&db.updated_at),
        }
    }
}
