//! Record-count estimation for vendor data files.
//!
//! The vendor's on-disk binary layout is undocumented, so no authoritative
//! record count exists. This crate infers one from a file's byte size:
//!
//! - [`estimate_record_count`] - ordered trial division against the period's
//!   candidate record sizes, with a period default as fallback
//! - [`refine_with_sample`] - grows an estimate against a bounded sample
//!   pulled through the gateway (a lower bound, so never shrinks it)
//! - [`annotate`] - fills the lazy estimate fields of a
//!   [`DataFile`](quotedesk_types::DataFile)

#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod estimator;

pub use estimator::{
    RecordCountEstimate, SAMPLE_RECORD_LIMIT, annotate, estimate_record_count, refine_with_sample,
    sample_record_count,
};
