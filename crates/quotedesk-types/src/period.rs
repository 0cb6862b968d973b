//! Data period definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::QuotedeskError;

/// The period of a vendor data file or retrieval request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    /// Intraday trade/quote snapshots, one record per market update.
    #[default]
    Tick,
    /// 1-minute bars.
    #[serde(rename = "1m")]
    Minute1,
    /// 5-minute bars.
    #[serde(rename = "5m")]
    Minute5,
    /// Daily bars.
    #[serde(rename = "1d")]
    Day1,
}

impl PeriodKind {
    /// Returns the directory period code used by the vendor layout
    /// (`0`, `60`, `300`, `86400`).
    #[must_use]
    pub const fn code(&self) -> u32 {
        match self {
            Self::Tick => 0,
            Self::Minute1 => 60,
            Self::Minute5 => 300,
            Self::Day1 => 86400,
        }
    }

    /// Looks up a period from its directory code.
    #[must_use]
    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::Tick),
            60 => Some(Self::Minute1),
            300 => Some(Self::Minute5),
            86400 => Some(Self::Day1),
            _ => None,
        }
    }

    /// Returns true for tick data (per-event records, not bars).
    #[must_use]
    pub const fn is_tick(&self) -> bool {
        matches!(self, Self::Tick)
    }

    /// Returns the expected data-file extension for this period.
    ///
    /// Matching against on-disk names is case-insensitive.
    #[must_use]
    pub const fn file_extension(&self) -> &'static str {
        match self {
            Self::Tick => "dat",
            Self::Minute1 => "lc1",
            Self::Minute5 => "lc5",
            Self::Day1 => "day",
        }
    }

    /// Candidate fixed record sizes for this period, most plausible first.
    ///
    /// The vendor's binary layout is undocumented; these sizes exist only to
    /// let the record-count estimator trial-divide a file's byte size. They
    /// are not a decoding table.
    #[must_use]
    pub const fn record_size_candidates(&self) -> &'static [u64] {
        match self {
            Self::Tick => &[28, 32, 24],
            Self::Minute1 | Self::Minute5 => &[32, 24],
            Self::Day1 => &[32, 40],
        }
    }

    /// Fallback record size when no candidate divides a file evenly.
    #[must_use]
    pub const fn default_record_size(&self) -> u64 {
        match self {
            Self::Tick => 28,
            Self::Minute1 | Self::Minute5 | Self::Day1 => 32,
        }
    }

    /// Returns the period as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Tick => "tick",
            Self::Minute1 => "1m",
            Self::Minute5 => "5m",
            Self::Day1 => "1d",
        }
    }

    /// Returns all supported periods.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Tick, Self::Minute1, Self::Minute5, Self::Day1]
    }
}

impl std::fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PeriodKind {
    type Err = QuotedeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tick" | "0" => Ok(Self::Tick),
            "1m" | "m1" | "60" => Ok(Self::Minute1),
            "5m" | "m5" | "300" => Ok(Self::Minute5),
            "1d" | "d1" | "day" | "daily" | "86400" => Ok(Self::Day1),
            _ => Err(QuotedeskError::UnknownPeriod(s.to_string())),
        }
    }
}
