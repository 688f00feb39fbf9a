//! Helpers for SQLite column encodings and parameter limits.
//!
//! Timestamps are stored as fixed-width RFC 3339 text, dates as `YYYY-MM-DD`
//! and decimals as their canonical string, so ordering and equality on the
//! text columns match the values.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use log::warn;
use rust_decimal::Decimal;
use salesboard_core::utils::time_utils::{format_timestamp, parse_date, parse_timestamp};

/// Maximum number of parameters for one SQLite `IN (...)` list.
///
/// SQLite builds are often limited to 999 variables per statement; 500 leaves
/// room for the other parameters of the query.
pub const SQLITE_MAX_PARAMS_CHUNK: usize = 500;

/// Splits a slice into chunks that fit in a single `IN (...)` clause.
pub fn chunk_for_sqlite<T>(items: &[T]) -> impl Iterator<Item = &[T]> {
    items.chunks(SQLITE_MAX_PARAMS_CHUNK)
}

pub fn timestamp_to_text(ts: DateTime<Utc>) -> String {
    format_timestamp(ts)
}

/// Reads a required timestamp column. Unparseable text falls back to now.
pub fn text_to_timestamp(text: &str) -> DateTime<Utc> {
    parse_timestamp(text).unwrap_or_else(|| {
        warn!("Unparseable stored timestamp '{}', using now", text);
        Utc::now()
    })
}

pub fn text_to_opt_timestamp(text: Option<String>) -> Option<DateTime<Utc>> {
    text.as_deref().and_then(parse_timestamp)
}

pub fn date_to_text(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn text_to_opt_date(text: Option<String>) -> Option<NaiveDate> {
    text.as_deref().and_then(parse_date)
}

pub fn decimal_to_text(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Reads a required decimal column. Unparseable text reads as zero.
pub fn text_to_decimal(text: &str) -> Decimal {
    Decimal::from_str(text).unwrap_or_else(|_| {
        warn!("Unparseable stored decimal '{}', using zero", text);
        Decimal::ZERO
    })
}

pub fn text_to_opt_decimal(text: Option<String>) -> Option<Decimal> {
    text.as_deref().and_then(|t| Decimal::from_str(t).ok())
}
