//! Response normalization, timestamp resolution and record building.
//!
//! The pipeline tail of quotedesk:
//!
//! - [`normalize`] - reshapes either vendor response shape into one ordered
//!   [`CanonicalRow`](quotedesk_types::CanonicalRow) sequence
//! - [`resolve_time_key`] - decodes a raw time key of ambiguous encoding
//!   into a canonical calendar string
//! - [`build_records`] - assembles uniform tick/bar records with
//!   deterministic defaults
//! - [`fetch_records`] - one gateway fetch composed end to end

#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod build;
mod normalize;
mod pipeline;
mod resolve;

pub use build::{RecordBatch, build_bar, build_records, build_tick};
pub use normalize::normalize;
pub use pipeline::fetch_records;
pub use resolve::{ResolvedTime, TimeKeyKind, VENDOR_UTC_OFFSET_HOURS, resolve_time_key};
