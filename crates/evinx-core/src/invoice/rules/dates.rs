//! Date parsing for German invoice dates.

use chrono::NaiveDate;

/// Parse a `DD.MM.YYYY` date. Returns `None` for impossible calendar dates.
pub fn parse_german_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%d.%m.%Y").ok()
}
