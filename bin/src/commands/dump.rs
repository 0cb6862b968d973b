//! Dump command implementation.
//!
//! Runs a captured vendor retrieval response through the full record
//! pipeline: gateway classification, normalization, timestamp resolution and
//! record building.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use quotedesk_lib::prelude::*;
use quotedesk_lib::VendorError;
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::display::{Format, print_batch};

/// A vendor capability backed by a JSON capture file.
///
/// Useful for debugging retrievals offline. A capture that cannot be read is
/// an error at construction; the pipeline never sees fabricated rows.
struct CapturedVendor {
    response: Value,
}

impl CapturedVendor {
    fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading capture {}", path.display()))?;
        let response = serde_json::from_str(&text)
            .with_context(|| format!("parsing capture {}", path.display()))?;
        Ok(Self { response })
    }
}

impl VendorPrimitive for CapturedVendor {
    fn retrieve(&self, _request: &FetchRequest) -> std::result::Result<Value, VendorError> {
        Ok(self.response.clone())
    }
}

/// Dump the records a capture yields for one stock.
pub(crate) fn dump(
    response: &Path,
    stock: &str,
    period: &str,
    fields: &[String],
    limit: usize,
    date: Option<&str>,
    format: Format,
) -> Result<()> {
    let stock: StockIdentifier = stock.parse()?;
    let period: PeriodKind = period.parse()?;
    let hint = date
        .map(|d| {
            NaiveDate::parse_from_str(d, "%Y-%m-%d")
                .with_context(|| format!("invalid trading date '{d}'"))
        })
        .transpose()?;

    let gateway = Gateway::new(Box::new(CapturedVendor::load(response)?));
    let request = FetchRequest::new(stock, period, ".")
        .with_fields(fields.iter().cloned())
        .with_limit(limit);

    let batch = fetch_records(&gateway, &request, hint)?;
    if batch.is_empty() {
        println!("No records in capture for the requested stock.");
        return Ok(());
    }
    print_batch(&batch, format)
}
