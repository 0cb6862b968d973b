//! Core types for the quotedesk record pipeline.
//!
//! This crate provides the fundamental data structures used throughout
//! quotedesk:
//!
//! - [`StockIdentifier`] - Exchange-qualified stock code
//! - [`PeriodKind`] - Data period (tick, 1m, 5m, daily)
//! - [`DataFile`] / [`FileEntry`] - On-disk vendor file descriptors
//! - [`CanonicalRow`] - Shape-independent per-timestamp row
//! - [`TickRecord`] / [`BarRecord`] - The uniform output record model
//! - [`Quote`] - Order-book cell distinguishing "unquoted" from zero

#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod date;
mod error;
mod file;
mod identifier;
mod period;
mod record;
mod row;

pub use date::{format_trading_date, parse_trading_date};
pub use error::{QuotedeskError, Result};
pub use file::{DataFile, FileEntry};
pub use identifier::{Exchange, StockIdentifier};
pub use period::PeriodKind;
pub use record::{BarRecord, ORDER_BOOK_DEPTH, OrderBookLevel, Quote, TickRecord, UNQUOTED};
pub use row::{CanonicalRow, coerce_number};
