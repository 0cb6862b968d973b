//! Assembling uniform tick/bar records from canonical rows.
//!
//! Vendor field spellings stop here: the builders read the vendor's names
//! through a small alias table and emit records carrying canonical names
//! only.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use quotedesk_types::{
    BarRecord, CanonicalRow, ORDER_BOOK_DEPTH, OrderBookLevel, PeriodKind, Quote, TickRecord,
    coerce_number,
};

use crate::resolve::{ResolvedTime, resolve_time_key};

// Vendor spellings per canonical field, first match wins.
const LAST_PRICE: &[&str] = &["price", "last_price", "close"];
const OPEN: &[&str] = &["open"];
const HIGH: &[&str] = &["high"];
const LOW: &[&str] = &["low"];
const CLOSE: &[&str] = &["close", "price"];
const PREV_CLOSE: &[&str] = &["pre_close", "last_close", "prev_close"];
const AMOUNT: &[&str] = &["amount", "turnover", "money"];
const VOLUME: &[&str] = &["vol", "volume"];
const RAW_VOLUME: &[&str] = &["raw_vol", "raw_volume"];
const STATUS: &[&str] = &["status", "instrument_status"];
const OPEN_INTEREST: &[&str] = &["position", "open_interest", "oi"];
const PREV_SETTLEMENT: &[&str] = &["pre_settlement", "last_settlement", "prev_settlement"];
const SETTLEMENT: &[&str] = &["settlement", "settle"];
const TRADE_COUNT: &[&str] = &["num", "trade_num", "trade_count"];
const SUSPENDED: &[&str] = &["suspend", "suspended", "is_suspended"];
const BID_PRICE: &[&str] = &["bid", "bid_price"];
const ASK_PRICE: &[&str] = &["ask", "ask_price"];
const BID_VOLUME: &[&str] = &["bid_vol", "bid_volume"];
const ASK_VOLUME: &[&str] = &["ask_vol", "ask_volume"];

/// An ordered batch of built records, tick or bar per the period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordBatch {
    /// Tick records.
    Ticks(Vec<TickRecord>),
    /// Bar records.
    Bars(Vec<BarRecord>),
}

impl RecordBatch {
    /// Number of records in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Ticks(records) => records.len(),
            Self::Bars(records) => records.len(),
        }
    }

    /// Returns true when the batch holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Builds the record batch for a canonical row sequence.
///
/// Tick periods produce [`TickRecord`]s, bar periods [`BarRecord`]s. Each
/// row's time key is resolved against the trading-date hint first.
#[must_use]
pub fn build_records(
    rows: &[CanonicalRow],
    period: PeriodKind,
    hint: Option<NaiveDate>,
) -> RecordBatch {
    if period.is_tick() {
        RecordBatch::Ticks(
            rows.iter()
                .map(|row| build_tick(row, &resolve_time_key(&row.time_key, hint)))
                .collect(),
        )
    } else {
        RecordBatch::Bars(
            rows.iter()
                .map(|row| build_bar(row, &resolve_time_key(&row.time_key, hint)))
                .collect(),
        )
    }
}

/// Builds one tick record.
///
/// Missing or uncoercible statistics become `0`; missing order-book cells
/// stay unquoted. Nothing here raises.
#[must_use]
pub fn build_tick(row: &CanonicalRow, time: &ResolvedTime) -> TickRecord {
    TickRecord {
        time: time.stamp.clone(),
        last_price: price(row, LAST_PRICE),
        open: price(row, OPEN),
        high: price(row, HIGH),
        low: price(row, LOW),
        prev_close: price(row, PREV_CLOSE),
        amount: money(row, AMOUNT),
        volume: count(row, VOLUME),
        raw_volume: count(row, RAW_VOLUME),
        status: count(row, STATUS),
        open_interest: count(row, OPEN_INTEREST),
        prev_settlement: price(row, PREV_SETTLEMENT),
        order_book: order_book(row),
        trade_count: count(row, TRADE_COUNT),
    }
}

/// Builds one bar record.
#[must_use]
pub fn build_bar(row: &CanonicalRow, time: &ResolvedTime) -> BarRecord {
    BarRecord {
        time: time.stamp.clone(),
        open: price(row, OPEN),
        high: price(row, HIGH),
        low: price(row, LOW),
        close: price(row, CLOSE),
        volume: count(row, VOLUME),
        amount: money(row, AMOUNT),
        settlement: price(row, SETTLEMENT),
        open_interest: count(row, OPEN_INTEREST),
        prev_close: price(row, PREV_CLOSE),
        suspended: first_number(row, SUSPENDED).is_some_and(|v| v != 0.0),
    }
}

/// Assembles the five-level book from per-side fields.
///
/// A side arrives either as a 5-element array-like value or as a single
/// scalar, which quotes level 1 only; unrepresented levels keep the
/// sentinel.
fn order_book(row: &CanonicalRow) -> [OrderBookLevel; ORDER_BOOK_DEPTH] {
    let bid_price = side(row, BID_PRICE, round_price);
    let ask_price = side(row, ASK_PRICE, round_price);
    let bid_volume = side(row, BID_VOLUME, f64::trunc);
    let ask_volume = side(row, ASK_VOLUME, f64::trunc);

    std::array::from_fn(|level| OrderBookLevel {
        bid_price: bid_price[level],
        bid_volume: bid_volume[level],
        ask_price: ask_price[level],
        ask_volume: ask_volume[level],
    })
}

/// Reads one book side into per-level quotes.
fn side(
    row: &CanonicalRow,
    aliases: &[&str],
    shape: fn(f64) -> f64,
) -> [Quote; ORDER_BOOK_DEPTH] {
    let mut quotes = [Quote::Absent; ORDER_BOOK_DEPTH];
    let Some(value) = aliases.iter().find_map(|alias| row.fields.get(*alias)) else {
        return quotes;
    };
    match value {
        Value::Array(items) => {
            for (level, item) in items.iter().take(ORDER_BOOK_DEPTH).enumerate() {
                quotes[level] = coerce_number(item).map(shape).into();
            }
        }
        scalar => {
            // Scalar side: a level-1-only quote.
            quotes[0] = coerce_number(scalar).map(shape).into();
        }
    }
    quotes
}

fn first_number(row: &CanonicalRow, aliases: &[&str]) -> Option<f64> {
    aliases.iter().find_map(|alias| row.number(alias))
}

fn price(row: &CanonicalRow, aliases: &[&str]) -> f64 {
    first_number(row, aliases).map_or(0.0, round_price)
}

fn money(row: &CanonicalRow, aliases: &[&str]) -> f64 {
    first_number(row, aliases).map_or(0.0, round_money)
}

fn count(row: &CanonicalRow, aliases: &[&str]) -> f64 {
    first_number(row, aliases).map_or(0.0, f64::trunc)
}

/// Prices carry 3 decimals.
fn round_price(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

/// Monetary totals carry 2 decimals.
fn round_money(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::TimeKeyKind;
    use approx::assert_relative_eq;
    use serde_json::json;

    fn row(entries: &[(&str, Value)]) -> CanonicalRow {
        let mut row = CanonicalRow::new("20240105093000");
        for (field, value) in entries {
            row.fields.insert((*field).to_string(), value.clone());
        }
        row
    }

    fn resolved() -> ResolvedTime {
        ResolvedTime {
            stamp: "2024-01-05 09:30:00".to_string(),
            kind: TimeKeyKind::Compact14,
        }
    }

    #[test]
    fn test_tick_coercion_and_defaults() {
        let row = row(&[
            ("price", json!(10.23456)),
            ("amount", json!("1234.567")),
            ("vol", json!(1200.9)),
        ]);
        let record = build_tick(&row, &resolved());

        assert_eq!(record.time, "2024-01-05 09:30:00");
        assert_relative_eq!(record.last_price, 10.235);
        assert_relative_eq!(record.amount, 1234.57);
        assert_relative_eq!(record.volume, 1200.0);
        // Everything absent defaults to zero, not an error.
        assert_eq!(record.open, 0.0);
        assert_eq!(record.trade_count, 0.0);
    }

    #[test]
    fn test_missing_book_level_is_sentinel_not_zero() {
        let record = build_tick(&row(&[("price", json!(10.0))]), &resolved());
        for level in &record.order_book {
            assert!(level.bid_price.is_absent());
            assert!(level.bid_volume.is_absent());
            assert!(level.ask_price.is_absent());
            assert!(level.ask_volume.is_absent());
        }
    }

    #[test]
    fn test_array_book_sides() {
        let row = row(&[
            ("bid", json!([10.1, 10.09, 10.08, 10.07, 10.06])),
            ("bid_vol", json!([500.7, 300.0, 0.0, 200.0, 100.0])),
            ("ask", json!([10.11, 10.12])),
        ]);
        let record = build_tick(&row, &resolved());

        assert_eq!(record.order_book[0].bid_price, Quote::Value(10.1));
        assert_eq!(record.order_book[0].bid_volume, Quote::Value(500.0));
        // A quoted zero volume stays a value, not the sentinel.
        assert_eq!(record.order_book[2].bid_volume, Quote::Value(0.0));
        // Short array: missing levels keep the sentinel.
        assert_eq!(record.order_book[1].ask_price, Quote::Value(10.12));
        assert!(record.order_book[2].ask_price.is_absent());
        // Side never sent at all.
        assert!(record.order_book[0].ask_volume.is_absent());
    }

    #[test]
    fn test_scalar_book_side_quotes_level_one_only() {
        let row = row(&[("bid", json!(10.1)), ("ask", json!("10.2"))]);
        let record = build_tick(&row, &resolved());

        assert_eq!(record.order_book[0].bid_price, Quote::Value(10.1));
        assert_eq!(record.order_book[0].ask_price, Quote::Value(10.2));
        for level in &record.order_book[1..] {
            assert!(level.bid_price.is_absent());
            assert!(level.ask_price.is_absent());
        }
    }

    #[test]
    fn test_uncoercible_values_are_absent_never_raise() {
        let row = row(&[
            ("price", json!("n/a")),
            ("bid", json!(["x", 10.09])),
            ("vol", json!({"nested": true})),
        ]);
        let record = build_tick(&row, &resolved());

        assert_eq!(record.last_price, 0.0);
        assert_eq!(record.volume, 0.0);
        assert!(record.order_book[0].bid_price.is_absent());
        assert_eq!(record.order_book[1].bid_price, Quote::Value(10.09));
    }

    #[test]
    fn test_bar_defaults_and_suspension() {
        let row = row(&[
            ("close", json!(10.5)),
            ("volume", json!(1200)),
            ("suspend", json!(1)),
        ]);
        let record = build_bar(&row, &resolved());

        assert_eq!(record.close, 10.5);
        assert_eq!(record.volume, 1200.0);
        assert_eq!(record.open, 0.0);
        assert_eq!(record.high, 0.0);
        assert_eq!(record.low, 0.0);
        assert!(record.suspended);

        let record = build_bar(&CanonicalRow::new("20240105"), &resolved());
        assert!(!record.suspended);
    }

    #[test]
    fn test_build_records_dispatches_on_period() {
        let rows = vec![row(&[("price", json!(10.0))])];
        assert!(matches!(
            build_records(&rows, PeriodKind::Tick, None),
            RecordBatch::Ticks(_)
        ));
        assert!(matches!(
            build_records(&rows, PeriodKind::Day1, None),
            RecordBatch::Bars(_)
        ));
    }
}
