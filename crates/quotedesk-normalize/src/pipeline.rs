//! End-to-end composition of one retrieval.

use chrono::NaiveDate;

use quotedesk_gateway::{FetchRequest, Gateway};
use quotedesk_types::{QuotedeskError, Result};

use crate::build::{RecordBatch, build_records};
use crate::normalize::normalize;

/// Runs one blocking gateway fetch through normalization, timestamp
/// resolution and record building.
///
/// The whole call is a pure computation over the single materialized
/// response; callers run it off the interactive thread and apply any
/// cancellation before invoking it. An empty retrieval produces an empty
/// batch, never substituted rows.
///
/// # Errors
///
/// - [`QuotedeskError::RetrievalUnavailable`] when the vendor primitive
///   cannot be invoked.
/// - [`QuotedeskError::NoReferenceField`] when a per-field response carries
///   the identifier in no field's index.
pub fn fetch_records(
    gateway: &Gateway,
    request: &FetchRequest,
    hint: Option<NaiveDate>,
) -> Result<RecordBatch> {
    let stock = request.primary_stock().ok_or_else(|| {
        QuotedeskError::InvalidIdentifier("request names no stock".to_string())
    })?;
    let response = gateway.fetch(request)?;
    let rows = normalize(&response, stock, &request.fields, request.limit)?;
    Ok(build_records(&rows, request.period, hint))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotedesk_gateway::{VendorError, VendorPrimitive};
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
            Err(VendorError::Unavailable("not installed".to_string()))
        }
    }

    fn request() -> FetchRequest {
        let stock = StockIdentifier::new("600000", Exchange::Sh).unwrap();
        FetchRequest::new(stock, PeriodKind::Day1, "/data")
            .with_fields(["open", "close", "volume"])
    }

    #[test]
    fn test_sparse_per_field_response_builds_bars() {
        let gateway = Gateway::new(Box::new(StaticVendor(json!({
            "close": {"600000.SH": {"20240104093000": 10.2, "20240105093000": 10.5}},
            "volume": {"600000.SH": {"20240104093000": 800, "20240105093000": 1200}}
        }))));

        let batch = fetch_records(&gateway, &request(), None).unwrap();
        let RecordBatch::Bars(bars) = batch else {
            panic!("expected bars");
        };
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].time, "2024-01-04 09:30:00");
        assert_eq!(bars[0].close, 10.2);
        assert_eq!(bars[0].volume, 800.0);
        // The unpopulated requested fields default to zero, no failure.
        assert_eq!(bars[0].open, 0.0);
        assert_eq!(bars[0].high, 0.0);
        assert_eq!(bars[0].low, 0.0);
    }

    #[test]
    fn test_unavailable_vendor_yields_error_and_no_rows() {
        let gateway = Gateway::new(Box::new(MissingVendor));
        let result = fetch_records(&gateway, &request(), None);
        assert!(matches!(
            result,
            Err(QuotedeskError::RetrievalUnavailable { .. })
        ));
    }

    #[test]
    fn test_empty_retrieval_is_an_empty_batch() {
        let gateway = Gateway::new(Box::new(StaticVendor(json!({}))));
        let batch = fetch_records(&gateway, &request(), None).unwrap();
        assert!(batch.is_empty());
    }
}
