//! Facade crate for the quotedesk record pipeline.
//!
//! Re-exports the workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use quotedesk_lib::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let vendor: Box<dyn VendorPrimitive> = obtain_vendor_binding()?;
//!     let gateway = Gateway::new(vendor);
//!
//!     let stock: StockIdentifier = "600000.SH".parse()?;
//!     let request = FetchRequest::new(stock, PeriodKind::Day1, "/data/vendor")
//!         .with_fields(["open", "high", "low", "close", "volume"]);
//!
//!     match fetch_records(&gateway, &request, None)? {
//!         RecordBatch::Bars(bars) => println!("{} bars", bars.len()),
//!         RecordBatch::Ticks(ticks) => println!("{} ticks", ticks.len()),
//!     }
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use quotedesk_types::*;

// Re-export path inspection and enumeration
#[cfg(feature = "inspect")]
pub use quotedesk_inspect::{PathMeta, inspect_path, list_data_files, scan_data_file};

// Re-export the gateway
#[cfg(feature = "gateway")]
pub use quotedesk_gateway::{
    Adjustment, FetchRequest, Gateway, Shape, TaggedResponse, VendorError, VendorPrimitive,
    classify,
};

// Re-export normalization and record building
#[cfg(feature = "normalize")]
pub use quotedesk_normalize::{
    RecordBatch, ResolvedTime, TimeKeyKind, VENDOR_UTC_OFFSET_HOURS, build_bar, build_records,
    build_tick, fetch_records, normalize, resolve_time_key,
};

// Re-export estimation
#[cfg(feature = "estimate")]
pub use quotedesk_estimate::{
    RecordCountEstimate, SAMPLE_RECORD_LIMIT, annotate, estimate_record_count, refine_with_sample,
    sample_record_count,
};

/// Prelude module for convenient imports.
///
/// ```
/// use quotedesk_lib::prelude::*;
/// ```
pub mod prelude {
    pub use quotedesk_types::{
        BarRecord, CanonicalRow, DataFile, Exchange, FileEntry, OrderBookLevel, PeriodKind, Quote,
        QuotedeskError, Result, StockIdentifier, TickRecord,
    };

    #[cfg(feature = "inspect")]
    pub use quotedesk_inspect::{PathMeta, inspect_path, list_data_files, scan_data_file};

    #[cfg(feature = "gateway")]
    pub use quotedesk_gateway::{FetchRequest, Gateway, TaggedResponse, VendorPrimitive};

    #[cfg(feature = "normalize")]
    pub use quotedesk_normalize::{RecordBatch, fetch_records, normalize, resolve_time_key};

    #[cfg(feature = "estimate")]
    pub use quotedesk_estimate::{RecordCountEstimate, annotate, estimate_record_count};
}
