//! Path inspection and file enumeration for vendor data trees.
//!
//! The vendor terminal keeps its data under a fixed directory convention:
//!
//! ```text
//! {root}/{EXCHANGE}/{periodCode}/{stockBody}.{ext}          bar data
//! {root}/{EXCHANGE}/0/{stockBody}/{YYYYMMDD}.{ext}          tick data
//! ```
//!
//! with `EXCHANGE ∈ {SH, SZ, BJ}` and `periodCode ∈ {0, 60, 300, 86400}`.
//!
//! - [`inspect_path`] - derives stock body, exchange, period and (tick only)
//!   trading date from a single path; a pure function
//! - [`list_data_files`] / [`scan_data_file`] - enumerate a tree into sorted
//!   [`FileEntry`](quotedesk_types::FileEntry) listings and
//!   [`DataFile`](quotedesk_types::DataFile) descriptors

#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod listing;
mod path;

pub use listing::{list_data_files, scan_data_file};
pub use path::{PathMeta, inspect_path};
