/// Association bucket used when a listing carries no AOR for an agent side.
pub const UNKNOWN_AOR: &str = "Unknown";

/// `StandardStatus` value of a sold listing.
pub const CLOSED_STATUS: &str = "Closed";

/// `PropertyType` counted in agent rankings.
pub const RESIDENTIAL_PROPERTY_TYPE: &str = "Residential";

/// Decimal places kept for stored volumes and averages.
pub const VOLUME_DECIMAL_PLACES: u32 = 2;
