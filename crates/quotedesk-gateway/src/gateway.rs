//! The gateway adapter.

use quotedesk_types::{QuotedeskError, Result};

use crate::shape::{TaggedResponse, classify};
use crate::vendor::VendorPrimitive;
use crate::FetchRequest;

/// Adapter owning the injected vendor capability.
///
/// The gateway performs exactly one blocking vendor call per fetch, maps any
/// vendor failure to [`QuotedeskError::RetrievalUnavailable`] and classifies
/// the raw mapping into a [`TaggedResponse`]. It holds no mutable state;
/// independent fetches may run concurrently from separate workers.
pub struct Gateway {
    vendor: Box<dyn VendorPrimitive>,
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway").finish_non_exhaustive()
    }
}

impl Gateway {
    /// Creates a gateway over the given vendor capability.
    #[must_use]
    pub fn new(vendor: Box<dyn VendorPrimitive>) -> Self {
        Self { vendor }
    }

    /// Invokes the vendor primitive and classifies its response.
    ///
    /// An empty vendor mapping is returned as [`TaggedResponse::Empty`]; it
    /// is not an error and must propagate as an empty record sequence. The
    /// gateway never substitutes generated values for a failed retrieval.
    ///
    /// # Errors
    ///
    /// - [`QuotedeskError::InvalidIdentifier`] when the request names no stock.
    /// - [`QuotedeskError::RetrievalUnavailable`] when the vendor primitive
    ///   cannot be invoked or returns a malformed response.
    pub fn fetch(&self, request: &FetchRequest) -> Result<TaggedResponse> {
        let stock = request.primary_stock().ok_or_else(|| {
            QuotedeskError::InvalidIdentifier("request names no stock".to_string())
        })?;
        let raw = self
            .vendor
            .retrieve(request)
            .map_err(|e| QuotedeskError::RetrievalUnavailable {
                reason: e.to_string(),
            })?;
        classify(&raw, stock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vendor::VendorError;
    use quotedesk_types::{Exchange, PeriodKind, StockIdentifier};
    use serde_json::{Value, json};

    struct StaticVendor(Value);

    impl VendorPrimitive for StaticVendor {
        fn retrieve(&self, _request: &FetchRequest) -> std::result::Result<Value, VendorError> {
            Ok(self.0.clone())
        }
    }

    struct MissingVendor;

    impl VendorPrimitive for MissingVendor {
        fn retrieve(&self, _request: &FetchRequest) -> std::result::Result<Value, VendorError> {
            Err(VendorError::Unavailable("library not installed".to_string()))
        }
    }

    fn request() -> FetchRequest {
        let stock = StockIdentifier::new("600000", Exchange::Sh).unwrap();
        FetchRequest::new(stock, PeriodKind::Day1, "/data")
    }

    #[test]
    fn test_fetch_classifies_response() {
        let gateway = Gateway::new(Box::new(StaticVendor(json!({
            "600000.SH": {"20240105": {"close": 10.5}}
        }))));
        let response = gateway.fetch(&request()).unwrap();
        assert_eq!(response.shape(), Some(crate::Shape::PerStock));
    }

    #[test]
    fn test_unavailable_vendor_is_an_error_not_fake_rows() {
        let gateway = Gateway::new(Box::new(MissingVendor));
        let result = gateway.fetch(&request());
        assert!(matches!(
            result,
            Err(QuotedeskError::RetrievalUnavailable { .. })
        ));
    }

    #[test]
    fn test_empty_mapping_is_not_an_error() {
        let gateway = Gateway::new(Box::new(StaticVendor(json!({}))));
        let response = gateway.fetch(&request()).unwrap();
        assert_eq!(response, TaggedResponse::Empty);
    }
}
