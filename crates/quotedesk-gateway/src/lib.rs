//! Adapter around the vendor data-retrieval primitive.
//!
//! The pipeline never calls the vendor directly. It goes through this crate:
//!
//! - [`VendorPrimitive`] - the injected capability that produces raw mappings
//! - [`FetchRequest`] - the parameters of one retrieval call
//! - [`Gateway`] - maps vendor failures to explicit errors and classifies the
//!   raw mapping into a [`TaggedResponse`] exactly once
//!
//! Downstream components operate on [`TaggedResponse`] and never branch on
//! the vendor's shape again.

#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod gateway;
mod request;
mod shape;
mod vendor;

pub use gateway::Gateway;
pub use request::{Adjustment, FetchRequest};
pub use shape::{
    FieldIndex, FieldValues, PerFieldTable, PerStockTable, RowTable, Shape, TaggedResponse,
    classify,
};
pub use vendor::{VendorError, VendorPrimitive};
