//! Retrieval request parameters.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use quotedesk_types::{PeriodKind, StockIdentifier};

/// Price adjustment mode passed through to the vendor primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Adjustment {
    /// No adjustment.
    #[default]
    None,
    /// Forward adjustment.
    Forward,
    /// Backward adjustment.
    Backward,
}

impl Adjustment {
    /// Returns the adjustment as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

/// Parameters of one vendor retrieval call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchRequest {
    /// Field names to retrieve, vendor spelling.
    pub fields: Vec<String>,
    /// Stocks to retrieve; the first entry is the requested identifier the
    /// response shape is classified against.
    pub stocks: Vec<StockIdentifier>,
    /// Record period.
    pub period: PeriodKind,
    /// Range start, vendor time-key spelling. Empty means unbounded.
    pub start: String,
    /// Range end, vendor time-key spelling. Empty means unbounded.
    pub end: String,
    /// Maximum number of records to return.
    pub limit: usize,
    /// Price adjustment mode.
    pub adjustment: Adjustment,
    /// Whether the vendor should fill missing buckets.
    pub fill_missing: bool,
    /// Root of the vendor's on-disk data tree.
    pub data_root: PathBuf,
}

impl FetchRequest {
    /// Default record limit for interactive use.
    pub const DEFAULT_LIMIT: usize = 800;

    /// Creates a request for one stock with an unbounded range and the
    /// default limit.
    #[must_use]
    pub fn new(stock: StockIdentifier, period: PeriodKind, data_root: impl Into<PathBuf>) -> Self {
        Self {
            fields: Vec::new(),
            stocks: vec![stock],
            period,
            start: String::new(),
            end: String::new(),
            limit: Self::DEFAULT_LIMIT,
            adjustment: Adjustment::None,
            fill_missing: false,
            data_root: data_root.into(),
        }
    }

    /// Sets the requested field names.
    #[must_use]
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the time range.
    #[must_use]
    pub fn with_range(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start = start.into();
        self.end = end.into();
        self
    }

    /// Sets the record limit.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Returns the requested identifier, if any stock was requested.
    #[must_use]
    pub fn primary_stock(&self) -> Option<&StockIdentifier> {
        self.stocks.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotedesk_types::Exchange;

    #[test]
    fn test_request_builder() {
        let stock = StockIdentifier::new("600000", Exchange::Sh).unwrap();
        let request = FetchRequest::new(stock.clone(), PeriodKind::Day1, "/data")
            .with_fields(["open", "close"])
            .with_limit(100);

        assert_eq!(request.primary_stock(), Some(&stock));
        assert_eq!(request.fields, vec!["open", "close"]);
        assert_eq!(request.limit, 100);
        assert_eq!(request.adjustment, Adjustment::None);
        assert!(!request.fill_missing);
    }
}
