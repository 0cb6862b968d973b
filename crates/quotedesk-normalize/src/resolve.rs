//! Timestamp resolution.
//!
//! Vendor time keys arrive in several incompatible encodings: 14-digit
//! compact date-times, 13-digit millisecond epochs (sometimes with a
//! corrupted date component), 10-digit second epochs, and bare intraday
//! digit values. The resolver tries the encodings in a fixed order and
//! returns a canonical `YYYY-MM-DD HH:MM:SS` (or bare `HH:MM:SS`) string.
//!
//! All epoch decoding uses the vendor-local zone, a fixed UTC+8 offset,
//! never the executing machine's local zone.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta};

/// Fixed vendor-local zone offset from UTC, in hours.
pub const VENDOR_UTC_OFFSET_HOURS: i64 = 8;

/// Which encoding a time key resolved through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeKeyKind {
    /// 14 digits sliced directly into `YYYYMMDDHHMMSS`.
    Compact14,
    /// 13-digit millisecond epoch.
    EpochMillis,
    /// 13-digit millisecond epoch whose date disagreed with the trading-date
    /// hint; the decoded time-of-day was reattached to the hint's date.
    EpochMillisRedated,
    /// 10-digit second epoch.
    EpochSeconds,
    /// Bare intraday digits rendered as `HH:MM:SS`.
    IntradayDigits,
    /// No encoding matched; the key passed through unchanged.
    Unparsed,
}

/// A resolved time key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTime {
    /// Canonical `YYYY-MM-DD HH:MM:SS` or `HH:MM:SS` string; for
    /// [`TimeKeyKind::Unparsed`], the raw key unchanged.
    pub stamp: String,
    /// The encoding that matched.
    pub kind: TimeKeyKind,
}

impl ResolvedTime {
    /// Returns true unless the key passed through unparsed.
    #[must_use]
    pub const fn is_parsed(&self) -> bool {
        !matches!(self.kind, TimeKeyKind::Unparsed)
    }
}

/// Resolves a raw time key against an optional trading-date hint.
///
/// Encodings are tried in order:
///
/// 1. Exactly 14 digits: sliced into `YYYY-MM-DD HH:MM:SS` with no
///    arithmetic and no zone conversion.
/// 2. 13 digits with a hint whose date disagrees with the decoded one: the
///    date portion is treated as corrupted; the decoded time-of-day is
///    reattached to the hint's date.
/// 3. 13 digits otherwise: plain millisecond epoch, vendor-local zone.
/// 4. 10 digits: second epoch, vendor-local zone.
/// 5. A bare value in `[10000, 999999]`: formatted directly as `HH:MM:SS`.
/// 6. Anything else passes through unchanged, flagged unparsed.
#[must_use]
pub fn resolve_time_key(key: &str, hint: Option<NaiveDate>) -> ResolvedTime {
    let key = key.trim();
    let unparsed = || ResolvedTime {
        stamp: key.to_string(),
        kind: TimeKeyKind::Unparsed,
    };

    if !key.bytes().all(|b| b.is_ascii_digit()) || key.is_empty() {
        return unparsed();
    }

    match key.len() {
        14 => ResolvedTime {
            stamp: format!(
                "{}-{}-{} {}:{}:{}",
                &key[0..4],
                &key[4..6],
                &key[6..8],
                &key[8..10],
                &key[10..12],
                &key[12..14]
            ),
            kind: TimeKeyKind::Compact14,
        },
        13 => key
            .parse::<i64>()
            .ok()
            .and_then(decode_millis)
            .map_or_else(unparsed, |decoded| redate(decoded, hint)),
        10 => key
            .parse::<i64>()
            .ok()
            .and_then(decode_seconds)
            .map_or_else(unparsed, |decoded| ResolvedTime {
                stamp: decoded.format("%Y-%m-%d %H:%M:%S").to_string(),
                kind: TimeKeyKind::EpochSeconds,
            }),
        5 | 6 => key
            .parse::<u32>()
            .ok()
            .filter(|v| (10_000..=999_999).contains(v))
            .map_or_else(unparsed, |value| {
                // A bare intraday HHMMSS value with no date component.
                let padded = format!("{value:06}");
                ResolvedTime {
                    stamp: format!("{}:{}:{}", &padded[0..2], &padded[2..4], &padded[4..6]),
                    kind: TimeKeyKind::IntradayDigits,
                }
            }),
        _ => unparsed(),
    }
}

/// Decodes a millisecond epoch in the vendor-local zone.
fn decode_millis(ms: i64) -> Option<NaiveDateTime> {
    let utc = DateTime::from_timestamp_millis(ms)?;
    Some(utc.naive_utc() + TimeDelta::hours(VENDOR_UTC_OFFSET_HOURS))
}

/// Decodes a second epoch in the vendor-local zone.
fn decode_seconds(secs: i64) -> Option<NaiveDateTime> {
    let utc = DateTime::from_timestamp(secs, 0)?;
    Some(utc.naive_utc() + TimeDelta::hours(VENDOR_UTC_OFFSET_HOURS))
}

/// Applies the corrupted-date rule to a decoded millisecond epoch.
fn redate(decoded: NaiveDateTime, hint: Option<NaiveDate>) -> ResolvedTime {
    match hint {
        Some(date) if decoded.date() != date => ResolvedTime {
            stamp: format!(
                "{} {}",
                date.format("%Y-%m-%d"),
                decoded.format("%H:%M:%S")
            ),
            kind: TimeKeyKind::EpochMillisRedated,
        },
        _ => ResolvedTime {
            stamp: decoded.format("%Y-%m-%d %H:%M:%S").to_string(),
            kind: TimeKeyKind::EpochMillis,
        },
    }
}
