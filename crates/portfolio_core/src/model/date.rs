//! Lenient ISO 8601 date handling for record date fields.
//!
//! Record dates are kept as the strings they were authored with. Parsing
//! happens on demand for sorting and grouping.
//!
//! # Invariants
//! - Accepted shapes: `YYYY-MM-DD`, optionally followed by `T` or a space
//!   and a time part. Anything else is invalid.
//! - Invalid calendar dates (`2025-02-30`) are invalid, not clamped.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

static ISO_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4})-(\d{2})-(\d{2})(?:[T ].*)?$").expect("valid iso date regex")
});

/// Bucket label used when a date cannot be parsed.
pub const UNKNOWN_YEAR: &str = "unknown";

/// Parses the calendar date part of an ISO 8601 string.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let caps = ISO_DATE_RE.captures(value.trim())?;
    let year = caps[1].parse::<i32>().ok()?;
    let month = caps[2].parse::<u32>().ok()?;
    let day = caps[3].parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Returns the calendar year of an ISO 8601 date string.
pub fn year_of(value: &str) -> Option<i32> {
    parse_iso_date(value).map(|date| date.year())
}

/// Returns the four-digit year label used as a grouping key.
pub fn year_label(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => format!("{:04}", date.year()),
        None => UNKNOWN_YEAR.to_string(),
    }
}
