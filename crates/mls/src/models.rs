//! Request and response types shared by every MLS client implementation.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One raw record as returned by the API, keyed by RESO field name.
pub type ExternalRecord = Map<String, Value>;

/// Entity collections exposed by the RESO Web API that we synchronise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Member,
    Property,
}

impl EntityType {
    /// OData resource name.
    pub fn resource(&self) -> &'static str {
        match self {
            EntityType::Member => "Member",
            EntityType::Property => "Property",
        }
    }

    /// Field used for a stable page ordering.
    pub fn order_key(&self) -> &'static str {
        match self {
            EntityType::Member => "MemberKeyNumeric",
            EntityType::Property => "ListingKeyNumeric",
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.resource())
    }
}

/// Inclusive first and last day of a calendar year.
pub fn year_bounds(year: i32) -> Option<(NaiveDate, NaiveDate)> {
    NaiveDate::from_ymd_opt(year, 1, 1).zip(NaiveDate::from_ymd_opt(year, 12, 31))
}

/// Server-side filter applied to a paginated listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    /// Only records modified strictly after this instant.
    pub modified_after: Option<DateTime<Utc>>,
    /// Only records whose close date falls in this inclusive range.
    pub closed_between: Option<(NaiveDate, NaiveDate)>,
    /// Only members whose status is Active.
    pub active_members_only: bool,
}

impl RecordFilter {
    pub fn active_members() -> Self {
        Self {
            active_members_only: true,
            ..Self::default()
        }
    }

    pub fn closed_in_year(year: i32) -> Self {
        Self {
            closed_between: year_bounds(year),
            ..Self::default()
        }
    }

    pub fn modified_after(mut self, floor: Option<DateTime<Utc>>) -> Self {
        self.modified_after = floor;
        self
    }

    /// Renders the filter as an OData `$filter` expression, or `None` when no
    /// clause applies.
    pub fn to_odata(&self) -> Option<String> {
        let mut clauses = Vec::new();

        if self.active_members_only {
            clauses.push("MemberStatus eq 'Active'".to_string());
        }
        if let Some((from, to)) = self.closed_between {
            clauses.push(format!(
                "CloseDate ge {} and CloseDate le {}",
                from.format("%Y-%m-%d"),
                to.format("%Y-%m-%d")
            ));
        }
        if let Some(floor) = self.modified_after {
            clauses.push(format!(
                "ModificationTimestamp gt {}",
                floor.to_rfc3339_opts(SecondsFormat::Secs, true)
            ));
        }

        if clauses.is_empty() {
            None
        } else {
            Some(clauses.join(" and "))
        }
    }
}

/// Opaque continuation token (the OData `@odata.nextLink`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor(String);

impl PageCursor {
    pub fn new(link: impl Into<String>) -> Self {
        Self(link.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One page of raw records.
#[derive(Debug, Clone, Default)]
pub struct RecordPage {
    pub records: Vec<ExternalRecord>,
    pub next_cursor: Option<PageCursor>,
    /// Page size that was requested (`$top`).
    pub page_size: usize,
}

impl RecordPage {
    /// A page is the last one when the server gave no continuation link.
    ///
    /// Servers may cap `$top` below the requested page size, so a short page
    /// that still carries a link is not the end. An empty page always is.
    pub fn is_last(&self) -> bool {
        self.next_cursor.is_none() || self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_member_filter_rendering() {
        let floor = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let filter = RecordFilter::active_members().modified_after(Some(floor));
        assert_eq!(
            filter.to_odata().as_deref(),
            Some("MemberStatus eq 'Active' and ModificationTimestamp gt 2024-05-01T12:30:00Z")
        );
    }

    #[test]
    fn test_year_filter_rendering() {
        let filter = RecordFilter::closed_in_year(2024);
        assert_eq!(
            filter.to_odata().as_deref(),
            Some("CloseDate ge 2024-01-01 and CloseDate le 2024-12-31")
        );
    }

    #[test]
    fn test_empty_filter() {
        assert_eq!(RecordFilter::default().to_odata(), None);
    }

    #[test]
    fn test_last_page_detection() {
        let full = RecordPage {
            records: vec![ExternalRecord::new(), ExternalRecord::new()],
            next_cursor: Some(PageCursor::new("https://example.test/Member?$skip=2")),
            page_size: 2,
        };
        assert!(!full.is_last());

        let capped = RecordPage {
            records: vec![ExternalRecord::new()],
            next_cursor: Some(PageCursor::new("https://example.test/Member?$skip=3")),
            page_size: 200,
        };
        assert!(!capped.is_last());

        let empty = RecordPage {
            records: Vec::new(),
            next_cursor: Some(PageCursor::new("https://example.test/Member?$skip=4")),
            page_size: 2,
        };
        assert!(empty.is_last());

        let no_link = RecordPage {
            records: vec![ExternalRecord::new(), ExternalRecord::new()],
            next_cursor: None,
            page_size: 2,
        };
        assert!(no_link.is_last());
    }
}
