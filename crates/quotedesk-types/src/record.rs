//! The uniform tick/bar record model.
//!
//! Records carry canonical field names only; vendor field spellings are
//! absorbed by the record builder and never reach collaborators.
//!
//! Numeric trade/statistics fields default to `0` when the vendor omits
//! them. Order-book fields instead default to [`Quote::Absent`], which
//! renders as `"-"`: zero is a legitimate traded quantity, so "unquoted"
//! must stay distinguishable from it.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

/// Sentinel rendered for an unquoted order-book cell.
pub const UNQUOTED: &str = "-";

/// One order-book price or volume cell.
///
/// `Absent` means the level was not quoted; it is distinct from a quoted
/// value of `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Quote {
    /// No quote at this level.
    #[default]
    Absent,
    /// A quoted price or volume.
    Value(f64),
}

impl Quote {
    /// Returns the quoted value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        match self {
            Self::Absent => None,
            Self::Value(v) => Some(*v),
        }
    }

    /// Returns true when no quote is present.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl From<f64> for Quote {
    fn from(v: f64) -> Self {
        Self::Value(v)
    }
}

impl From<Option<f64>> for Quote {
    fn from(v: Option<f64>) -> Self {
        v.map_or(Self::Absent, Self::Value)
    }
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Absent => f.write_str(UNQUOTED),
            Self::Value(v) => write!(f, "{v}"),
        }
    }
}

impl Serialize for Quote {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Absent => serializer.serialize_str(UNQUOTED),
            Self::Value(v) => serializer.serialize_f64(*v),
        }
    }
}

impl<'de> Deserialize<'de> for Quote {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }
        match Raw::deserialize(deserializer)? {
            Raw::Number(v) => Ok(Self::Value(v)),
            Raw::Text(s) if s == UNQUOTED => Ok(Self::Absent),
            Raw::Text(s) => Err(de::Error::custom(format!("invalid quote '{s}'"))),
        }
    }
}

/// One depth-of-market level: a bid/ask price-volume pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderBookLevel {
    /// Bid price, or absent.
    pub bid_price: Quote,
    /// Bid volume, or absent.
    pub bid_volume: Quote,
    /// Ask price, or absent.
    pub ask_price: Quote,
    /// Ask volume, or absent.
    pub ask_volume: Quote,
}

impl OrderBookLevel {
    /// An entirely unquoted level.
    #[must_use]
    pub const fn absent() -> Self {
        Self {
            bid_price: Quote::Absent,
            bid_volume: Quote::Absent,
            ask_price: Quote::Absent,
            ask_volume: Quote::Absent,
        }
    }

    /// Returns true when all four cells are unquoted.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        self.bid_price.is_absent()
            && self.bid_volume.is_absent()
            && self.ask_price.is_absent()
            && self.ask_volume.is_absent()
    }
}

/// Number of depth levels carried in a tick record.
pub const ORDER_BOOK_DEPTH: usize = 5;

/// One trade/quote snapshot within a trading day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickRecord {
    /// Canonical timestamp string, `YYYY-MM-DD HH:MM:SS` or `HH:MM:SS`.
    pub time: String,
    /// Last traded price.
    pub last_price: f64,
    /// Day opening price.
    pub open: f64,
    /// Day high.
    pub high: f64,
    /// Day low.
    pub low: f64,
    /// Previous session's close.
    pub prev_close: f64,
    /// Cumulative turnover amount.
    pub amount: f64,
    /// Cumulative turnover volume, whole units.
    pub volume: f64,
    /// Raw (uncorrected) volume as reported by the vendor.
    pub raw_volume: f64,
    /// Instrument trading status code.
    pub status: f64,
    /// Open interest (futures-style instruments; 0 for equities).
    pub open_interest: f64,
    /// Previous settlement price.
    pub prev_settlement: f64,
    /// Five-level order-book snapshot, level 1 first.
    pub order_book: [OrderBookLevel; ORDER_BOOK_DEPTH],
    /// Number of trades.
    pub trade_count: f64,
}

impl TickRecord {
    /// A record with every statistic zero and the whole book unquoted.
    #[must_use]
    pub fn empty(time: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            last_price: 0.0,
            open: 0.0,
            high: 0.0,
            low: 0.0,
            prev_close: 0.0,
            amount: 0.0,
            volume: 0.0,
            raw_volume: 0.0,
            status: 0.0,
            open_interest: 0.0,
            prev_settlement: 0.0,
            order_book: [OrderBookLevel::absent(); ORDER_BOOK_DEPTH],
            trade_count: 0.0,
        }
    }
}

/// One time-bucketed OHLCV bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarRecord {
    /// Canonical timestamp string.
    pub time: String,
    /// Opening price.
    pub open: f64,
    /// Highest price.
    pub high: f64,
    /// Lowest price.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Turnover volume, whole units.
    pub volume: f64,
    /// Turnover amount.
    pub amount: f64,
    /// Settlement price (futures-style instruments).
    pub settlement: f64,
    /// Open interest.
    pub open_interest: f64,
    /// Previous session's close.
    pub prev_close: f64,
    /// True when the instrument was suspended for this bucket.
    pub suspended: bool,
}

impl BarRecord {
    /// A bar with every field zero and `suspended = false`.
    #[must_use]
    pub fn empty(time: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            open: 0.0,
            high: 0.0,
            low: 0.0,
            close: 0.0,
            volume: 0.0,
            amount: 0.0,
            settlement: 0.0,
            open_interest: 0.0,
            prev_close: 0.0,
            suspended: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_absent_is_not_zero() {
        assert_ne!(Quote::Absent, Quote::Value(0.0));
        assert_eq!(Quote::Absent.to_string(), "-");
        assert_eq!(Quote::Value(0.0).to_string(), "0");
    }

    #[test]
    fn test_quote_serde() {
        assert_eq!(serde_json::to_string(&Quote::Absent).unwrap(), "\"-\"");
        assert_eq!(serde_json::to_string(&Quote::Value(10.5)).unwrap(), "10.5");
        let q: Quote = serde_json::from_str("\"-\"").unwrap();
        assert!(q.is_absent());
        let q: Quote = serde_json::from_str("3.25").unwrap();
        assert_eq!(q.value(), Some(3.25));
    }

    #[test]
    fn test_empty_tick_book_fully_unquoted() {
        let record = TickRecord::empty("09:30:00");
        for level in &record.order_book {
            assert!(level.is_absent());
        }
        assert_eq!(record.volume, 0.0);
    }
}
