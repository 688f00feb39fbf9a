use crate::mapping::{FieldKind, FieldMapping};

/// Upstream `Member` resource fields persisted on a local member row.
pub static MEMBER_FIELDS: &[FieldMapping] = &[
    FieldMapping::new("MemberKeyNumeric", "member_key_numeric", FieldKind::Integer),
    FieldMapping::new("OfficeKeyNumeric", "office_key_numeric", FieldKind::Integer),
    FieldMapping::new("MemberAORkey", "member_aor_key", FieldKind::Text),
    FieldMapping::new("MemberAOR", "member_aor", FieldKind::Text),
    FieldMapping::new("MemberAddress1", "member_address1", FieldKind::Text),
    FieldMapping::new("MemberAddress2", "member_address2", FieldKind::Text),
    FieldMapping::new("MemberCity", "member_city", FieldKind::Text),
    FieldMapping::new("MemberFirstName", "member_first_name", FieldKind::Text),
    FieldMapping::new("MemberFullName", "member_full_name", FieldKind::Text),
    FieldMapping::new("MemberKey", "member_key", FieldKind::Text),
    FieldMapping::new("MemberLastName", "member_last_name", FieldKind::Text),
    FieldMapping::new("MemberMiddleName", "member_middle_name", FieldKind::Text),
    FieldMapping::new("MemberMlsId", "member_mls_id", FieldKind::Text),
    FieldMapping::new("MemberMobilePhone", "member_mobile_phone", FieldKind::Text),
    FieldMapping::new("MemberNationalAssociationId", "member_national_association_id", FieldKind::Text),
    FieldMapping::new("MemberOfficePhone", "member_office_phone", FieldKind::Text),
    FieldMapping::new("MemberPostalCode", "member_postal_code", FieldKind::Text),
    FieldMapping::new("MemberPreferredPhone", "member_preferred_phone", FieldKind::Text),
    FieldMapping::new("MemberStateLicense", "member_state_license", FieldKind::Text),
    FieldMapping::new("OfficeKey", "office_key", FieldKind::Text),
    FieldMapping::new("OfficeMlsId", "office_mls_id", FieldKind::Text),
    FieldMapping::new("OfficeName", "office_name", FieldKind::Text),
    FieldMapping::new("OriginatingSystemMemberKey", "originating_system_member_key", FieldKind::Text),
    FieldMapping::new("OriginatingSystemName", "originating_system_name", FieldKind::Text),
    FieldMapping::new("MemberMlsAccessYN", "member_mls_access_yn", FieldKind::Bool),
    FieldMapping::new("ModificationTimestamp", "modification_timestamp", FieldKind::Timestamp),
    FieldMapping::new("OriginalEntryTimestamp", "original_entry_timestamp", FieldKind::Timestamp),
    FieldMapping::new("MemberCountry", "member_country", FieldKind::Text),
    FieldMapping::new("MemberCountyOrParish", "member_county_or_parish", FieldKind::Text),
    FieldMapping::new("MemberStateLicenseState", "member_state_license_state", FieldKind::Text),
    FieldMapping::new("MemberStateOrProvince", "member_state_or_province", FieldKind::Text),
    FieldMapping::new("MemberStatus", "member_status", FieldKind::Text),
    FieldMapping::new("MemberType", "member_type", FieldKind::Text),
    FieldMapping::new("MemberDesignation", "member_designation", FieldKind::Text),
];
