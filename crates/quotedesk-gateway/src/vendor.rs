//! The injected vendor capability.

use serde_json::Value;
use thiserror::Error;

use crate::FetchRequest;

/// Errors a vendor primitive may report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VendorError {
    /// The vendor library is not installed or cannot be loaded.
    #[error("vendor primitive unavailable: {0}")]
    Unavailable(String),

    /// The vendor primitive was invoked but failed.
    #[error("vendor retrieval failed: {0}")]
    Failed(String),
}

/// The external vendor data-retrieval primitive.
///
/// Implementations wrap the vendor-maintained retrieval function and return
/// its raw mapping as an opaque JSON value; this core does no byte-level
/// decoding of its own. The capability is injected into
/// [`Gateway::new`](crate::Gateway::new) so tests can substitute a
/// deterministic fake.
///
/// An implementation must never fabricate rows: if it cannot retrieve, it
/// returns an error.
pub trait VendorPrimitive: Send + Sync {
    /// Invokes the vendor retrieval function.
    ///
    /// # Errors
    ///
    /// Returns a [`VendorError`] when the vendor library is unavailable or
    /// the retrieval fails.
    fn retrieve(&self, request: &FetchRequest) -> Result<Value, VendorError>;
}
