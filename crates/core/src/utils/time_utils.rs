use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Formats an instant as fixed-width RFC 3339 UTC text
/// (`2024-05-01T12:30:00.000000Z`). Fixed width keeps lexical order equal to
/// chronological order in text columns.
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parses a timestamp as sent by the MLS API or stored by us.
///
/// Accepts RFC 3339 with any offset (`Z`, `+00:00`, ...) and naive
/// `YYYY-MM-DDTHH:MM:SS[.fff]` values, which are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}

/// Parses a calendar date, tolerating a trailing time component.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let date_part = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

pub use salesboard_mls::year_bounds;

pub fn current_year() -> i32 {
    Utc::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_is_fixed_width_and_sortable() {
        let a = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let b = a + chrono::Duration::milliseconds(5);
        let (fa, fb) = (format_timestamp(a), format_timestamp(b));
        assert_eq!(fa, "2024-01-01T00:00:00.000000Z");
        assert_eq!(fa.len(), fb.len());
        assert!(fa < fb);
    }

    #[test]
    fn test_parse_timestamp_variants() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 15, 8, 45, 0).unwrap();
        assert_eq!(parse_timestamp("2024-03-15T08:45:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2024-03-15T08:45:00.000Z"), Some(expected));
        assert_eq!(parse_timestamp("2024-03-15T02:45:00-06:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-03-15T08:45:00"), Some(expected));
        assert_eq!(parse_timestamp("not a date"), None);
        assert_eq!(parse_timestamp(""), None);
    }

    #[test]
    fn test_parse_date_variants() {
        let expected = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        assert_eq!(parse_date("2024-06-30"), Some(expected));
        assert_eq!(parse_date("2024-06-30T00:00:00Z"), Some(expected));
        assert_eq!(parse_date("06/30/2024"), None);
    }

    #[test]
    fn test_year_bounds() {
        let (first, last) = year_bounds(2024).unwrap();
        assert_eq!(first, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(last, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
    }
}
