//! The canonical per-timestamp row.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One per-timestamp row after shape normalization.
///
/// This is the single intermediate form the pipeline operates on; which
/// vendor response shape produced it is no longer visible here. The time key
/// is kept raw and unresolved until the timestamp resolver runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRow {
    /// Raw, unresolved time key as the vendor reported it.
    pub time_key: String,
    /// Field name to vendor value.
    pub fields: BTreeMap<String, Value>,
}

impl CanonicalRow {
    /// Creates a row with no fields.
    #[must_use]
    pub fn new(time_key: impl Into<String>) -> Self {
        Self {
            time_key: time_key.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Returns a field's numeric value, coercing number-like strings.
    ///
    /// Returns `None` for missing fields and for values that are not
    /// number-like; the caller decides the default.
    #[must_use]
    pub fn number(&self, field: &str) -> Option<f64> {
        coerce_number(self.fields.get(field)?)
    }
}

/// Coerces a vendor value to `f64` where possible.
///
/// Accepts JSON numbers and numeric strings; everything else (nulls, arrays,
/// objects, non-numeric text) is `None`, never an error.
#[must_use]
pub fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
