use crate::mapping::{FieldKind, FieldMapping};

/// Upstream `Property` resource fields persisted for a listing.
///
/// The first four entries form the natural key. Fields without a dedicated
/// column are kept in the listing's attribute document.
pub static PROPERTY_FIELDS: &[FieldMapping] = &[
    FieldMapping::new("ListingKeyNumeric", "listing_key_numeric", FieldKind::Integer),
    FieldMapping::new("ListAgentKeyNumeric", "list_agent_key_numeric", FieldKind::Integer),
    FieldMapping::new("BuyerAgentKeyNumeric", "buyer_agent_key_numeric", FieldKind::Integer),
    FieldMapping::new("StandardStatus", "standard_status", FieldKind::Text),
    FieldMapping::new("AssociationFee", "association_fee", FieldKind::Float),
    FieldMapping::new("RoomsTotal", "rooms_total", FieldKind::Integer),
    FieldMapping::new("Stories", "stories", FieldKind::Integer),
    FieldMapping::new("BathroomsFull", "bathrooms_full", FieldKind::Integer),
    FieldMapping::new("BathroomsHalf", "bathrooms_half", FieldKind::Integer),
    FieldMapping::new("BathroomsThreeQuarter", "bathrooms_three_quarter", FieldKind::Integer),
    FieldMapping::new("BathroomsPartial", "bathrooms_partial", FieldKind::Integer),
    FieldMapping::new("BathroomsTotalInteger", "bathrooms_total_integer", FieldKind::Integer),
    FieldMapping::new("BedroomsTotal", "bedrooms_total", FieldKind::Integer),
    FieldMapping::new("BuyerOfficeKeyNumeric", "buyer_office_key_numeric", FieldKind::Integer),
    FieldMapping::new("CarportSpaces", "carport_spaces", FieldKind::Integer),
    FieldMapping::new("CoveredSpaces", "covered_spaces", FieldKind::Float),
    FieldMapping::new("ClosePrice", "close_price", FieldKind::Decimal),
    FieldMapping::new("CoListAgentKeyNumeric", "co_list_agent_key_numeric", FieldKind::Integer),
    FieldMapping::new("CoListOfficeKeyNumeric", "co_list_office_key_numeric", FieldKind::Integer),
    FieldMapping::new("ConcessionsAmount", "concessions_amount", FieldKind::Float),
    FieldMapping::new("CumulativeDaysOnMarket", "cumulative_days_on_market", FieldKind::Integer),
    FieldMapping::new("DaysOnMarket", "days_on_market", FieldKind::Integer),
    FieldMapping::new("FireplacesTotal", "fireplaces_total", FieldKind::Integer),
    FieldMapping::new("GarageSpaces", "garage_spaces", FieldKind::Float),
    FieldMapping::new("ListOfficeKeyNumeric", "list_office_key_numeric", FieldKind::Integer),
    FieldMapping::new("ListPrice", "list_price", FieldKind::Decimal),
    FieldMapping::new("LeaseAmount", "lease_amount", FieldKind::Float),
    FieldMapping::new("LivingArea", "living_area", FieldKind::Float),
    FieldMapping::new("BuildingAreaTotal", "building_area_total", FieldKind::Float),
    FieldMapping::new("LotSizeAcres", "lot_size_acres", FieldKind::Float),
    FieldMapping::new("LotSizeSquareFeet", "lot_size_square_feet", FieldKind::Float),
    FieldMapping::new("NumberOfBuildings", "number_of_buildings", FieldKind::Integer),
    FieldMapping::new("NumberOfUnitsLeased", "number_of_units_leased", FieldKind::Integer),
    FieldMapping::new("NumberOfUnitsTotal", "number_of_units_total", FieldKind::Integer),
    FieldMapping::new("LotSizeArea", "lot_size_area", FieldKind::Float),
    FieldMapping::new("MainLevelBedrooms", "main_level_bedrooms", FieldKind::Integer),
    FieldMapping::new("OriginalListPrice", "original_list_price", FieldKind::Decimal),
    FieldMapping::new("ParkingTotal", "parking_total", FieldKind::Float),
    FieldMapping::new("OpenParkingSpaces", "open_parking_spaces", FieldKind::Integer),
    FieldMapping::new("PhotosCount", "photos_count", FieldKind::Integer),
    FieldMapping::new("StreetNumberNumeric", "street_number_numeric", FieldKind::Integer),
    FieldMapping::new("TaxAnnualAmount", "tax_annual_amount", FieldKind::Float),
    FieldMapping::new("YearBuilt", "year_built", FieldKind::Integer),
    FieldMapping::new("YearBuiltEffective", "year_built_effective", FieldKind::Integer),
    FieldMapping::new("MobileLength", "mobile_length", FieldKind::Integer),
    FieldMapping::new("MobileWidth", "mobile_width", FieldKind::Integer),
    FieldMapping::new("BathroomsOneQuarter", "bathrooms_one_quarter", FieldKind::Integer),
    FieldMapping::new("CapRate", "cap_rate", FieldKind::Float),
    FieldMapping::new("NumberOfPads", "number_of_pads", FieldKind::Integer),
    FieldMapping::new("StoriesTotal", "stories_total", FieldKind::Integer),
    FieldMapping::new("YearEstablished", "year_established", FieldKind::Integer),
    FieldMapping::new("AssociationName", "association_name", FieldKind::Text),
    FieldMapping::new("AssociationPhone", "association_phone", FieldKind::Text),
    FieldMapping::new("BuyerAgentFax", "buyer_agent_fax", FieldKind::Text),
    FieldMapping::new("BuyerAgentFirstName", "buyer_agent_first_name", FieldKind::Text),
    FieldMapping::new("BuyerAgentFullName", "buyer_agent_full_name", FieldKind::Text),
    FieldMapping::new("BuyerAgentKey", "buyer_agent_key", FieldKind::Text),
    FieldMapping::new("BuyerAgentLastName", "buyer_agent_last_name", FieldKind::Text),
    FieldMapping::new("BuyerAgentMiddleName", "buyer_agent_middle_name", FieldKind::Text),
    FieldMapping::new("BuyerAgentMlsId", "buyer_agent_mls_id", FieldKind::Text),
    FieldMapping::new("BuyerAgentOfficePhone", "buyer_agent_office_phone", FieldKind::Text),
    FieldMapping::new("BuyerAgentPreferredPhone", "buyer_agent_preferred_phone", FieldKind::Text),
    FieldMapping::new("BuyerAgentStateLicense", "buyer_agent_state_license", FieldKind::Text),
    FieldMapping::new("BuyerAgentURL", "buyer_agent_url", FieldKind::Text),
    FieldMapping::new("BuyerOfficeFax", "buyer_office_fax", FieldKind::Text),
    FieldMapping::new("BuyerOfficeKey", "buyer_office_key", FieldKind::Text),
    FieldMapping::new("BuyerOfficeMlsId", "buyer_office_mls_id", FieldKind::Text),
    FieldMapping::new("BuyerOfficeName", "buyer_office_name", FieldKind::Text),
    FieldMapping::new("BuyerOfficePhone", "buyer_office_phone", FieldKind::Text),
    FieldMapping::new("BuyerOfficeURL", "buyer_office_url", FieldKind::Text),
    FieldMapping::new("CoListAgentFax", "co_list_agent_fax", FieldKind::Text),
    FieldMapping::new("CoListAgentFirstName", "co_list_agent_first_name", FieldKind::Text),
    FieldMapping::new("CoListAgentFullName", "co_list_agent_full_name", FieldKind::Text),
    FieldMapping::new("CoListAgentKey", "co_list_agent_key", FieldKind::Text),
    FieldMapping::new("CoListAgentLastName", "co_list_agent_last_name", FieldKind::Text),
    FieldMapping::new("CoListAgentMiddleName", "co_list_agent_middle_name", FieldKind::Text),
    FieldMapping::new("CoListAgentMlsId", "co_list_agent_mls_id", FieldKind::Text),
    FieldMapping::new("CoListAgentOfficePhone", "co_list_agent_office_phone", FieldKind::Text),
    FieldMapping::new("CoListAgentPreferredPhone", "co_list_agent_preferred_phone", FieldKind::Text),
    FieldMapping::new("CoListAgentStateLicense", "co_list_agent_state_license", FieldKind::Text),
    FieldMapping::new("CoListAgentURL", "co_list_agent_url", FieldKind::Text),
    FieldMapping::new("CoListOfficeFax", "co_list_office_fax", FieldKind::Text),
    FieldMapping::new("CoListOfficeKey", "co_list_office_key", FieldKind::Text),
    FieldMapping::new("CoListOfficeMlsId", "co_list_office_mls_id", FieldKind::Text),
    FieldMapping::new("CoListOfficeName", "co_list_office_name", FieldKind::Text),
    FieldMapping::new("CoListOfficePhone", "co_list_office_phone", FieldKind::Text),
    FieldMapping::new("CoListOfficeURL", "co_list_office_url", FieldKind::Text),
    FieldMapping::new("CopyrightNotice", "copyright_notice", FieldKind::Text),
    FieldMapping::new("CrossStreet", "cross_street", FieldKind::Text),
    FieldMapping::new("Directions", "directions", FieldKind::Text),
    FieldMapping::new("Disclaimer", "disclaimer", FieldKind::Text),
    FieldMapping::new("Exclusions", "exclusions", FieldKind::Text),
    FieldMapping::new("FrontageLength", "frontage_length", FieldKind::Text),
    FieldMapping::new("Inclusions", "inclusions", FieldKind::Text),
    FieldMapping::new("ListAgentFax", "list_agent_fax", FieldKind::Text),
    FieldMapping::new("ListAgentFirstName", "list_agent_first_name", FieldKind::Text),
    FieldMapping::new("ListAgentFullName", "list_agent_full_name", FieldKind::Text),
    FieldMapping::new("ListAgentKey", "list_agent_key", FieldKind::Text),
    FieldMapping::new("ListAgentLastName", "list_agent_last_name", FieldKind::Text),
    FieldMapping::new("ListAgentMiddleName", "list_agent_middle_name", FieldKind::Text),
    FieldMapping::new("ListAgentMlsId", "list_agent_mls_id", FieldKind::Text),
    FieldMapping::new("ListAgentOfficePhone", "list_agent_office_phone", FieldKind::Text),
    FieldMapping::new("ListAgentPreferredPhone", "list_agent_preferred_phone", FieldKind::Text),
    FieldMapping::new("ListAgentStateLicense", "list_agent_state_license", FieldKind::Text),
    FieldMapping::new("ListAgentURL", "list_agent_url", FieldKind::Text),
    FieldMapping::new("ListOfficeFax", "list_office_fax", FieldKind::Text),
    FieldMapping::new("ListOfficeKey", "list_office_key", FieldKind::Text),
    FieldMapping::new("ListOfficeMlsId", "list_office_mls_id", FieldKind::Text),
    FieldMapping::new("ListOfficeName", "list_office_name", FieldKind::Text),
    FieldMapping::new("ListOfficePhone", "list_office_phone", FieldKind::Text),
    FieldMapping::new("ListOfficeURL", "list_office_url", FieldKind::Text),
    FieldMapping::new("ListingId", "listing_id", FieldKind::Text),
    FieldMapping::new("ListingKey", "listing_key", FieldKind::Text),
    FieldMapping::new("OriginatingSystemID", "originating_system_id", FieldKind::Text),
    FieldMapping::new("OriginatingSystemKey", "originating_system_key", FieldKind::Text),
    FieldMapping::new("OriginatingSystemName", "originating_system_name", FieldKind::Text),
    FieldMapping::new("OtherParking", "other_parking", FieldKind::Text),
    FieldMapping::new("Ownership", "ownership", FieldKind::Text),
    FieldMapping::new("ParcelNumber", "parcel_number", FieldKind::Text),
    FieldMapping::new("PostalCode", "postal_code", FieldKind::Text),
    FieldMapping::new("PublicRemarks", "public_remarks", FieldKind::Text),
    FieldMapping::new("RVParkingDimensions", "rv_parking_dimensions", FieldKind::Text),
    FieldMapping::new("ShowingContactName", "showing_contact_name", FieldKind::Text),
    FieldMapping::new("ShowingContactPhone", "showing_contact_phone", FieldKind::Text),
    FieldMapping::new("SourceSystemID", "source_system_id", FieldKind::Text),
    FieldMapping::new("SourceSystemKey", "source_system_key", FieldKind::Text),
    FieldMapping::new("SourceSystemName", "source_system_name", FieldKind::Text),
    FieldMapping::new("StreetName", "street_name", FieldKind::Text),
    FieldMapping::new("StreetNumber", "street_number", FieldKind::Text),
    FieldMapping::new("SubdivisionName", "subdivision_name", FieldKind::Text),
    FieldMapping::new("UnitNumber", "unit_number", FieldKind::Text),
    FieldMapping::new("UnparsedAddress", "unparsed_address", FieldKind::Text),
    FieldMapping::new("VirtualTourURLBranded", "virtual_tour_url_branded", FieldKind::Text),
    FieldMapping::new("VirtualTourURLUnbranded", "virtual_tour_url_unbranded", FieldKind::Text),
    FieldMapping::new("Zoning", "zoning", FieldKind::Text),
    FieldMapping::new("ZoningDescription", "zoning_description", FieldKind::Text),
    FieldMapping::new("LotSizeDimensions", "lot_size_dimensions", FieldKind::Text),
    FieldMapping::new("Topography", "topography", FieldKind::Text),
    FieldMapping::new("BuilderName", "builder_name", FieldKind::Text),
    FieldMapping::new("BuyerTeamName", "buyer_team_name", FieldKind::Text),
    FieldMapping::new("CoBuyerAgentFirstName", "co_buyer_agent_first_name", FieldKind::Text),
    FieldMapping::new("CoBuyerAgentFullName", "co_buyer_agent_full_name", FieldKind::Text),
    FieldMapping::new("CoBuyerAgentLastName", "co_buyer_agent_last_name", FieldKind::Text),
    FieldMapping::new("CoBuyerAgentStateLicense", "co_buyer_agent_state_license", FieldKind::Text),
    FieldMapping::new("CoBuyerOfficeMlsId", "co_buyer_office_mls_id", FieldKind::Text),
    FieldMapping::new("CoBuyerOfficeName", "co_buyer_office_name", FieldKind::Text),
    FieldMapping::new("DOH1", "doh1", FieldKind::Text),
    FieldMapping::new("DOH2", "doh2", FieldKind::Text),
    FieldMapping::new("DOH3", "doh3", FieldKind::Text),
    FieldMapping::new("License1", "license1", FieldKind::Text),
    FieldMapping::new("License2", "license2", FieldKind::Text),
    FieldMapping::new("License3", "license3", FieldKind::Text),
    FieldMapping::new("Make", "make", FieldKind::Text),
    FieldMapping::new("Model", "model", FieldKind::Text),
    FieldMapping::new("ParkName", "park_name", FieldKind::Text),
    FieldMapping::new("PostalCodePlus4", "postal_code_plus4", FieldKind::Text),
    FieldMapping::new("SerialU", "serial_u", FieldKind::Text),
    FieldMapping::new("SerialX", "serial_x", FieldKind::Text),
    FieldMapping::new("SerialXX", "serial_xx", FieldKind::Text),
    FieldMapping::new("StreetAdditionalInfo", "street_additional_info", FieldKind::Text),
    FieldMapping::new("StreetSuffixModifier", "street_suffix_modifier", FieldKind::Text),
    FieldMapping::new("WaterBodyName", "water_body_name", FieldKind::Text),
    FieldMapping::new("AssociationYN", "association_yn", FieldKind::Bool),
    FieldMapping::new("AttachedGarageYN", "attached_garage_yn", FieldKind::Bool),
    FieldMapping::new("CarportYN", "carport_yn", FieldKind::Bool),
    FieldMapping::new("CoolingYN", "cooling_yn", FieldKind::Bool),
    FieldMapping::new("FireplaceYN", "fireplace_yn", FieldKind::Bool),
    FieldMapping::new("GarageYN", "garage_yn", FieldKind::Bool),
    FieldMapping::new("HeatingYN", "heating_yn", FieldKind::Bool),
    FieldMapping::new("HomeWarrantyYN", "home_warranty_yn", FieldKind::Bool),
    FieldMapping::new("HorseYN", "horse_yn", FieldKind::Bool),
    FieldMapping::new("InternetAddressDisplayYN", "internet_address_display_yn", FieldKind::Bool),
    FieldMapping::new("SearchableYN", "searchable_yn", FieldKind::Bool),
    FieldMapping::new("InternetEntireListingDisplayYN", "internet_entire_listing_display_yn", FieldKind::Bool),
    FieldMapping::new("OpenParkingYN", "open_parking_yn", FieldKind::Bool),
    FieldMapping::new("PoolPrivateYN", "pool_private_yn", FieldKind::Bool),
    FieldMapping::new("SeniorCommunityYN", "senior_community_yn", FieldKind::Bool),
    FieldMapping::new("SpaYN", "spa_yn", FieldKind::Bool),
    FieldMapping::new("ViewYN", "view_yn", FieldKind::Bool),
    FieldMapping::new("NewConstructionYN", "new_construction_yn", FieldKind::Bool),
    FieldMapping::new("InternetAutomatedValuationDisplayYN", "internet_automated_valuation_display_yn", FieldKind::Bool),
    FieldMapping::new("InternetConsumerCommentYN", "internet_consumer_comment_yn", FieldKind::Bool),
    FieldMapping::new("LeaseConsideredYN", "lease_considered_yn", FieldKind::Bool),
    FieldMapping::new("PropertyAttachedYN", "property_attached_yn", FieldKind::Bool),
    FieldMapping::new("WaterfrontYN", "waterfront_yn", FieldKind::Bool),
    FieldMapping::new("CloseDate", "close_date", FieldKind::Date),
    FieldMapping::new("ContingentDate", "contingent_date", FieldKind::Date),
    FieldMapping::new("ContractStatusChangeDate", "contract_status_change_date", FieldKind::Date),
    FieldMapping::new("ListingContractDate", "listing_contract_date", FieldKind::Date),
    FieldMapping::new("OffMarketDate", "off_market_date", FieldKind::Date),
    FieldMapping::new("OnMarketDate", "on_market_date", FieldKind::Date),
    FieldMapping::new("PurchaseContractDate", "purchase_contract_date", FieldKind::Date),
    FieldMapping::new("WithdrawnDate", "withdrawn_date", FieldKind::Date),
    FieldMapping::new("ModificationTimestamp", "modification_timestamp", FieldKind::Timestamp),
    FieldMapping::new("OriginalEntryTimestamp", "original_entry_timestamp", FieldKind::Timestamp),
    FieldMapping::new("PhotosChangeTimestamp", "photos_change_timestamp", FieldKind::Timestamp),
    FieldMapping::new("PriceChangeTimestamp", "price_change_timestamp", FieldKind::Timestamp),
    FieldMapping::new("StatusChangeTimestamp", "status_change_timestamp", FieldKind::Timestamp),
    FieldMapping::new("AssociationFeeFrequency", "association_fee_frequency", FieldKind::Text),
    FieldMapping::new("BuyerAgentAOR", "buyer_agent_aor", FieldKind::Text),
    FieldMapping::new("City", "city", FieldKind::Text),
    FieldMapping::new("CoListAgentAOR", "co_list_agent_aor", FieldKind::Text),
    FieldMapping::new("CoListOfficeAOR", "co_list_office_aor", FieldKind::Text),
    FieldMapping::new("Concessions", "concessions", FieldKind::Text),
    FieldMapping::new("Country", "country", FieldKind::Text),
    FieldMapping::new("CountyOrParish", "county_or_parish", FieldKind::Text),
    FieldMapping::new("DirectionFaces", "direction_faces", FieldKind::Text),
    FieldMapping::new("ElementarySchool", "elementary_school", FieldKind::Text),
    FieldMapping::new("ElementarySchoolDistrict", "elementary_school_district", FieldKind::Text),
    FieldMapping::new("HighSchool", "high_school", FieldKind::Text),
    FieldMapping::new("HighSchoolDistrict", "high_school_district", FieldKind::Text),
    FieldMapping::new("ListAgentAOR", "list_agent_aor", FieldKind::Text),
    FieldMapping::new("ListOfficeAOR", "list_office_aor", FieldKind::Text),
    FieldMapping::new("ListingService", "listing_service", FieldKind::Text),
    FieldMapping::new("LivingAreaUnits", "living_area_units", FieldKind::Text),
    FieldMapping::new("LotSizeUnits", "lot_size_units", FieldKind::Text),
    FieldMapping::new("MLSAreaMajor", "mls_area_major", FieldKind::Text),
    FieldMapping::new("MiddleOrJuniorSchool", "middle_or_junior_school", FieldKind::Text),
    FieldMapping::new("MiddleOrJuniorSchoolDistrict", "middle_or_junior_school_district", FieldKind::Text),
    FieldMapping::new("MlsStatus", "mls_status", FieldKind::Text),
    FieldMapping::new("OccupantType", "occupant_type", FieldKind::Text),
    FieldMapping::new("PostalCity", "postal_city", FieldKind::Text),
    FieldMapping::new("PropertySubType", "property_sub_type", FieldKind::Text),
    FieldMapping::new("PropertyType", "property_type", FieldKind::Text),
    FieldMapping::new("StateOrProvince", "state_or_province", FieldKind::Text),
    FieldMapping::new("StreetDirPrefix", "street_dir_prefix", FieldKind::Text),
    FieldMapping::new("StreetDirSuffix", "street_dir_suffix", FieldKind::Text),
    FieldMapping::new("StreetSuffix", "street_suffix", FieldKind::Text),
    FieldMapping::new("LeaseTerm", "lease_term", FieldKind::Text),
    FieldMapping::new("LivingAreaSource", "living_area_source", FieldKind::Text),
    FieldMapping::new("YearBuiltSource", "year_built_source", FieldKind::Text),
    FieldMapping::new("AccessibilityFeatures", "accessibility_features", FieldKind::Text),
    FieldMapping::new("Appliances", "appliances", FieldKind::Text),
    FieldMapping::new("ArchitecturalStyle", "architectural_style", FieldKind::Text),
    FieldMapping::new("AssociationAmenities", "association_amenities", FieldKind::Text),
    FieldMapping::new("AssociationFeeIncludes", "association_fee_includes", FieldKind::Text),
    FieldMapping::new("Basement", "basement", FieldKind::Text),
    FieldMapping::new("BuyerAgentDesignation", "buyer_agent_designation", FieldKind::Text),
    FieldMapping::new("CoListAgentDesignation", "co_list_agent_designation", FieldKind::Text),
    FieldMapping::new("ConstructionMaterials", "construction_materials", FieldKind::Text),
    FieldMapping::new("Cooling", "cooling", FieldKind::Text),
    FieldMapping::new("DoorFeatures", "door_features", FieldKind::Text),
    FieldMapping::new("ExteriorFeatures", "exterior_features", FieldKind::Text),
    FieldMapping::new("Flooring", "flooring", FieldKind::Text),
    FieldMapping::new("GreenBuildingVerificationType", "green_building_verification_type", FieldKind::Text),
    FieldMapping::new("Heating", "heating", FieldKind::Text),
    FieldMapping::new("InteriorFeatures", "interior_features", FieldKind::Text),
    FieldMapping::new("LaundryFeatures", "laundry_features", FieldKind::Text),
    FieldMapping::new("ListAgentDesignation", "list_agent_designation", FieldKind::Text),
    FieldMapping::new("ListingTerms", "listing_terms", FieldKind::Text),
    FieldMapping::new("LotFeatures", "lot_features", FieldKind::Text),
    FieldMapping::new("OtherEquipment", "other_equipment", FieldKind::Text),
    FieldMapping::new("ParkingFeatures", "parking_features", FieldKind::Text),
    FieldMapping::new("PatioAndPorchFeatures", "patio_and_porch_features", FieldKind::Text),
    FieldMapping::new("PoolFeatures", "pool_features", FieldKind::Text),
    FieldMapping::new("PropertyCondition", "property_condition", FieldKind::Text),
    FieldMapping::new("Roof", "roof", FieldKind::Text),
    FieldMapping::new("SecurityFeatures", "security_features", FieldKind::Text),
    FieldMapping::new("Sewer", "sewer", FieldKind::Text),
    FieldMapping::new("ShowingContactType", "showing_contact_type", FieldKind::Text),
    FieldMapping::new("Utilities", "utilities", FieldKind::Text),
    FieldMapping::new("Vegetation", "vegetation", FieldKind::Text),
    FieldMapping::new("View", "view", FieldKind::Text),
    FieldMapping::new("WaterSource", "water_source", FieldKind::Text),
    FieldMapping::new("WindowFeatures", "window_features", FieldKind::Text),
    FieldMapping::new("CurrentUse", "current_use", FieldKind::Text),
    FieldMapping::new("Fencing", "fencing", FieldKind::Text),
    FieldMapping::new("FireplaceFeatures", "fireplace_features", FieldKind::Text),
    FieldMapping::new("GreenEnergyGeneration", "green_energy_generation", FieldKind::Text),
    FieldMapping::new("BodyType", "body_type", FieldKind::Text),
    FieldMapping::new("BuildingFeatures", "building_features", FieldKind::Text),
    FieldMapping::new("BusinessType", "business_type", FieldKind::Text),
    FieldMapping::new("CommonWalls", "common_walls", FieldKind::Text),
    FieldMapping::new("CommunityFeatures", "community_features", FieldKind::Text),
    FieldMapping::new("Electric", "electric", FieldKind::Text),
    FieldMapping::new("FoundationDetails", "foundation_details", FieldKind::Text),
    FieldMapping::new("GreenEnergyEfficient", "green_energy_efficient", FieldKind::Text),
    FieldMapping::new("GreenIndoorAirQuality", "green_indoor_air_quality", FieldKind::Text),
    FieldMapping::new("GreenLocation", "green_location", FieldKind::Text),
    FieldMapping::new("GreenSustainability", "green_sustainability", FieldKind::Text),
    FieldMapping::new("GreenWaterConservation", "green_water_conservation", FieldKind::Text),
    FieldMapping::new("Levels", "levels", FieldKind::Text),
    FieldMapping::new("OtherStructures", "other_structures", FieldKind::Text),
    FieldMapping::new("PossibleUse", "possible_use", FieldKind::Text),
    FieldMapping::new("RentIncludes", "rent_includes", FieldKind::Text),
    FieldMapping::new("RoadFrontageType", "road_frontage_type", FieldKind::Text),
    FieldMapping::new("RoadSurfaceType", "road_surface_type", FieldKind::Text),
    FieldMapping::new("RoomType", "room_type", FieldKind::Text),
    FieldMapping::new("Skirt", "skirt", FieldKind::Text),
    FieldMapping::new("SpaFeatures", "spa_features", FieldKind::Text),
    FieldMapping::new("SpecialListingConditions", "special_listing_conditions", FieldKind::Text),
    FieldMapping::new("StructureType", "structure_type", FieldKind::Text),
    FieldMapping::new("UnitTypeType", "unit_type_type", FieldKind::Text),
    FieldMapping::new("WaterfrontFeatures", "waterfront_features", FieldKind::Text),
    FieldMapping::new("GeoLocation", "geo_location", FieldKind::Text),
    FieldMapping::new("BasementFinished", "basement_finished", FieldKind::Integer),
    FieldMapping::new("ConstStatus", "const_status", FieldKind::Text),
    FieldMapping::new("PowerProductionSolarYearInstall", "power_production_solar_year_install", FieldKind::Text),
    FieldMapping::new("SolarFinanceCompany", "solar_finance_company", FieldKind::Text),
    FieldMapping::new("SolarLeasingCompany", "solar_leasing_company", FieldKind::Text),
    FieldMapping::new("SolarOwnership", "solar_ownership", FieldKind::Text),
    FieldMapping::new("PowerProductionType", "power_production_type", FieldKind::Text),
    FieldMapping::new("LevelData", "level_data", FieldKind::Text),
    FieldMapping::new("AboveGradeFinishedArea", "above_grade_finished_area", FieldKind::Float),
    FieldMapping::new("BuyerFinancing", "buyer_financing", FieldKind::Text),
    FieldMapping::new("MasterBedroomLevel", "master_bedroom_level", FieldKind::Text),
    FieldMapping::new("IrrigationWaterRightsAcres", "irrigation_water_rights_acres", FieldKind::Integer),
    FieldMapping::new("CancellationDate", "cancellation_date", FieldKind::Date),
    FieldMapping::new("ImageStatus", "image_status", FieldKind::Text),
    FieldMapping::new("CoBuyerAgentKeyNumeric", "co_buyer_agent_key_numeric", FieldKind::Integer),
    FieldMapping::new("CoBuyerAgentFax", "co_buyer_agent_fax", FieldKind::Text),
    FieldMapping::new("CoBuyerAgentKey", "co_buyer_agent_key", FieldKind::Text),
    FieldMapping::new("CoBuyerAgentMiddleName", "co_buyer_agent_middle_name", FieldKind::Text),
    FieldMapping::new("CoBuyerAgentMlsId", "co_buyer_agent_mls_id", FieldKind::Text),
    FieldMapping::new("CoBuyerAgentPreferredPhone", "co_buyer_agent_preferred_phone", FieldKind::Text),
    FieldMapping::new("CoBuyerAgentURL", "co_buyer_agent_url", FieldKind::Text),
    FieldMapping::new("CoBuyerAgentAOR", "co_buyer_agent_aor", FieldKind::Text),
    FieldMapping::new("CoBuyerAgentDesignation", "co_buyer_agent_designation", FieldKind::Text),
    FieldMapping::new("CoBuyerOfficeKeyNumeric", "co_buyer_office_key_numeric", FieldKind::Integer),
    FieldMapping::new("CoBuyerOfficeFax", "co_buyer_office_fax", FieldKind::Text),
    FieldMapping::new("CoBuyerOfficeKey", "co_buyer_office_key", FieldKind::Text),
    FieldMapping::new("CoBuyerOfficePhone", "co_buyer_office_phone", FieldKind::Text),
    FieldMapping::new("CoBuyerOfficeURL", "co_buyer_office_url", FieldKind::Text),
    FieldMapping::new("IdxContactInformation", "idx_contact_information", FieldKind::Text),
    FieldMapping::new("VowContactInformation", "vow_contact_information", FieldKind::Text),
    FieldMapping::new("ShortTermRentalYN", "short_term_rental_yn", FieldKind::Bool),
    FieldMapping::new("AduYN", "adu_yn", FieldKind::Bool),
];
