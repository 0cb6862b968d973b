//! Record-count estimation logic.

use serde::{Deserialize, Serialize};

use quotedesk_gateway::{FetchRequest, Gateway};
use quotedesk_types::{DataFile, PeriodKind, Result, StockIdentifier};

/// Upper bound on the optional cross-check sample.
///
/// The sample re-enters the gateway, so it stays small and fixed to bound
/// latency.
pub const SAMPLE_RECORD_LIMIT: usize = 100;

/// A heuristic record-count estimate for one data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordCountEstimate {
    /// The record size the estimate is based on.
    pub record_size: u64,
    /// Estimated number of records.
    pub record_count: u64,
    /// True when no candidate size divided the file evenly and the period
    /// default was used, or when a sample forced the count upward.
    pub approximate: bool,
}

impl RecordCountEstimate {
    /// Creates an estimate.
    #[must_use]
    pub const fn new(record_size: u64, record_count: u64, approximate: bool) -> Self {
        Self {
            record_size,
            record_count,
            approximate,
        }
    }
}

/// Estimates the record count of a file from its byte size.
///
/// The period's candidate sizes are tried in order, most plausible first;
/// the first one that divides `byte_size` evenly wins and the estimate is
/// exact. When none divides evenly the period's default size is used, the
/// quotient is accepted as-is and `approximate` is set.
///
/// Trial division is inherently ambiguous when several candidates divide
/// evenly; the chosen size is always surfaced so callers can communicate
/// uncertainty instead of false precision.
#[must_use]
pub fn estimate_record_count(byte_size: u64, period: PeriodKind) -> RecordCountEstimate {
    for &size in period.record_size_candidates() {
        if byte_size % size == 0 {
            return RecordCountEstimate::new(size, byte_size / size, false);
        }
    }
    let size = period.default_record_size();
    RecordCountEstimate::new(size, byte_size / size, true)
}

/// Refines an estimate against a sampled row count.
///
/// The sample is truncated at [`SAMPLE_RECORD_LIMIT`], so it is only a lower
/// bound on the true count. A sample that exceeds the current estimate grows
/// it to at least double (and at least the sample itself) and marks the
/// result approximate; the estimate never shrinks.
#[must_use]
pub fn refine_with_sample(estimate: RecordCountEstimate, sample_len: usize) -> RecordCountEstimate {
    let sample_len = sample_len as u64;
    if sample_len <= estimate.record_count {
        return estimate;
    }
    RecordCountEstimate {
        record_size: estimate.record_size,
        record_count: (estimate.record_count * 2).max(sample_len),
        approximate: true,
    }
}

/// Pulls a bounded sample through the gateway and returns its row count.
///
/// # Errors
///
/// Propagates gateway failures; an unavailable vendor is an error here, not
/// a zero count.
pub fn sample_record_count(
    gateway: &Gateway,
    stock: StockIdentifier,
    period: PeriodKind,
    data_root: impl Into<std::path::PathBuf>,
) -> Result<usize> {
    let request = FetchRequest::new(stock.clone(), period, data_root).with_limit(SAMPLE_RECORD_LIMIT);
    let response = gateway.fetch(&request)?;
    Ok(response.row_count(&stock).min(SAMPLE_RECORD_LIMIT))
}

/// Fills the lazy estimate fields of a data-file descriptor.
pub fn annotate(file: &mut DataFile) {
    let estimate = estimate_record_count(file.byte_size, file.period);
    file.record_size_estimate = Some(estimate.record_size);
    file.record_count_estimate = Some(estimate.record_count);
    file.approximate = estimate.approximate;
}
