//! Trading-date helpers.
//!
//! A trading date is recovered from a tick file's name (`YYYYMMDD`) or from a
//! resolved timestamp, and serves as ground truth when correcting ambiguous
//! time keys.

use chrono::NaiveDate;

/// Parses an 8-digit compact date (`YYYYMMDD`) into a calendar date.
///
/// Returns `None` when the input is not exactly 8 digits or does not name a
/// real calendar date.
#[must_use]
pub fn parse_trading_date(s: &str) -> Option<NaiveDate> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = s[0..4].parse().ok()?;
    let month: u32 = s[4..6].parse().ok()?;
    let day: u32 = s[6..8].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Formats a trading date in the canonical `YYYY-MM-DD` form.
#[must_use]
pub fn format_trading_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
