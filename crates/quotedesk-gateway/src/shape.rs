//! Vendor response shapes and classification.
//!
//! The vendor primitive returns one of two top-level structures:
//!
//! - **Shape A** (per-stock): one row-table keyed by stock identifier, each
//!   row-table keyed by time, each row mapping field name to value.
//! - **Shape B** (per-field): one table per field name, each keyed by stock
//!   identifier and then by time, with a bare value at the leaf.
//!
//! Classification happens exactly once, relative to the requested
//! identifier. Everything downstream consumes the tagged union.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use quotedesk_types::{QuotedeskError, Result, StockIdentifier};

/// Field name to vendor value: one row of a per-stock table.
pub type FieldValues = BTreeMap<String, Value>;

/// Time key to row.
pub type RowTable = BTreeMap<String, FieldValues>;

/// Stock identifier to row-table (Shape A).
pub type PerStockTable = BTreeMap<String, RowTable>;

/// Stock identifier to time-keyed values: one field's index.
pub type FieldIndex = BTreeMap<String, BTreeMap<String, Value>>;

/// Field name to index (Shape B).
pub type PerFieldTable = BTreeMap<String, FieldIndex>;

/// Which top-level structure matched the requested identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    /// Shape A: keyed by stock identifier.
    PerStock,
    /// Shape B: keyed by field name.
    PerField,
}

impl Shape {
    /// Returns the shape as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PerStock => "per-stock",
            Self::PerField => "per-field",
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A vendor response after one-time shape classification.
#[derive(Debug, Clone, PartialEq)]
pub enum TaggedResponse {
    /// The vendor returned an empty mapping. Valid and non-exceptional:
    /// normalization yields an empty sequence.
    Empty,
    /// Shape A data.
    PerStock(PerStockTable),
    /// Shape B data.
    PerField(PerFieldTable),
}

impl TaggedResponse {
    /// Returns the matched shape, or `None` for an empty response.
    #[must_use]
    pub const fn shape(&self) -> Option<Shape> {
        match self {
            Self::Empty => None,
            Self::PerStock(_) => Some(Shape::PerStock),
            Self::PerField(_) => Some(Shape::PerField),
        }
    }

    /// Returns the number of rows present for the given stock.
    ///
    /// For Shape B this is the largest per-field index length, since fields
    /// may be sparsely populated.
    #[must_use]
    pub fn row_count(&self, stock: &StockIdentifier) -> usize {
        let key = stock.to_string();
        match self {
            Self::Empty => 0,
            Self::PerStock(table) => table.get(&key).map_or(0, RowTable::len),
            Self::PerField(table) => table
                .values()
                .filter_map(|index| index.get(&key))
                .map(BTreeMap::len)
                .max()
                .unwrap_or(0),
        }
    }
}

/// Classifies a raw vendor mapping relative to the requested identifier.
///
/// The identifier present as a top-level key selects Shape A; any other
/// non-empty mapping is read as Shape B; an empty mapping is
/// [`TaggedResponse::Empty`].
///
/// # Errors
///
/// Returns [`QuotedeskError::RetrievalUnavailable`] when the raw value is
/// not a mapping at all.
pub fn classify(raw: &Value, stock: &StockIdentifier) -> Result<TaggedResponse> {
    let Some(object) = raw.as_object() else {
        return Err(QuotedeskError::RetrievalUnavailable {
            reason: "vendor returned a non-mapping response".to_string(),
        });
    };
    if object.is_empty() {
        return Ok(TaggedResponse::Empty);
    }
    if object.contains_key(&stock.to_string()) {
        Ok(TaggedResponse::PerStock(read_per_stock(object)))
    } else {
        Ok(TaggedResponse::PerField(read_per_field(object)))
    }
}

/// Reads a Shape A mapping: stock -> time -> field -> value.
fn read_per_stock(object: &Map<String, Value>) -> PerStockTable {
    let mut table = PerStockTable::new();
    for (stock_key, rows) in object {
        let Some(rows) = rows.as_object() else {
            continue;
        };
        let mut row_table = RowTable::new();
        for (time_key, row) in rows {
            let Some(row) = row.as_object() else {
                continue;
            };
            row_table.insert(
                time_key.clone(),
                row.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
            );
        }
        table.insert(stock_key.clone(), row_table);
    }
    table
}

/// Reads a Shape B mapping: field -> stock -> time -> value.
fn read_per_field(object: &Map<String, Value>) -> PerFieldTable {
    let mut table = PerFieldTable::new();
    for (field, index) in object {
        let Some(index) = index.as_object() else {
            continue;
        };
        let mut field_index = FieldIndex::new();
        for (stock_key, values) in index {
            let Some(values) = values.as_object() else {
                continue;
            };
            field_index.insert(
                stock_key.clone(),
                values.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
            );
        }
        table.insert(field.clone(), field_index);
    }
    table
}
