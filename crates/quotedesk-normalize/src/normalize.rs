//! Reshaping vendor responses into canonical rows.

use serde_json::json;
use std::cmp::Ordering;

use quotedesk_gateway::{PerFieldTable, TaggedResponse};
use quotedesk_types::{CanonicalRow, QuotedeskError, Result, StockIdentifier};

/// The field preferred as the row-count reference for per-field responses.
const REFERENCE_FIELD: &str = "close";

/// Reshapes a classified response into an ordered canonical row sequence.
///
/// Rows come back in ascending time-key order, truncated to `limit`. For a
/// per-stock (Shape A) response the stock's own row-table is iterated
/// directly; a table that lacks the identifier yields an empty sequence,
/// which is valid and non-exceptional. For a per-field (Shape B) response a
/// reference field (`close` when its index contains the identifier,
/// otherwise the first field that does) determines row count and order, and
/// every requested field is looked up at the same time key, defaulting to
/// `0` silently when missing.
///
/// # Errors
///
/// Returns [`QuotedeskError::NoReferenceField`] when a per-field response
/// contains the identifier in no field's index. That is the only failure;
/// every other absence is a default, never an error.
pub fn normalize(
    response: &TaggedResponse,
    stock: &StockIdentifier,
    fields: &[String],
    limit: usize,
) -> Result<Vec<CanonicalRow>> {
    match response {
        TaggedResponse::Empty => Ok(Vec::new()),
        TaggedResponse::PerStock(table) => {
            let Some(rows) = table.get(&stock.to_string()) else {
                return Ok(Vec::new());
            };
            let mut keys: Vec<&String> = rows.keys().collect();
            keys.sort_by(|a, b| time_key_order(a.as_str(), b.as_str()));
            Ok(keys
                .into_iter()
                .take(limit)
                .map(|time_key| CanonicalRow {
                    time_key: time_key.clone(),
                    fields: rows[time_key].clone(),
                })
                .collect())
        }
        TaggedResponse::PerField(table) => normalize_per_field(table, stock, fields, limit),
    }
}

fn normalize_per_field(
    table: &PerFieldTable,
    stock: &StockIdentifier,
    fields: &[String],
    limit: usize,
) -> Result<Vec<CanonicalRow>> {
    let key = stock.to_string();
    let reference = select_reference(table, fields, &key).ok_or_else(|| {
        QuotedeskError::NoReferenceField {
            stock: key.clone(),
        }
    })?;

    let mut keys: Vec<&String> = table[reference]
        .get(&key)
        .map(|values| values.keys().collect())
        .unwrap_or_default();
    keys.sort_by(|a, b| time_key_order(a.as_str(), b.as_str()));

    // With no explicit field list, every field the response carries is taken.
    let wanted: Vec<&String> = if fields.is_empty() {
        table.keys().collect()
    } else {
        fields.iter().collect()
    };

    Ok(keys
        .into_iter()
        .take(limit)
        .map(|time_key| {
            let mut row = CanonicalRow::new(time_key.clone());
            for field in &wanted {
                let value = table
                    .get(field.as_str())
                    .and_then(|index| index.get(&key))
                    .and_then(|values| values.get(time_key))
                    .cloned()
                    .unwrap_or_else(|| json!(0));
                row.fields.insert((*field).clone(), value);
            }
            row
        })
        .collect())
}

/// Picks the reference field: `close` first, then the requested fields in
/// order, then whatever else the response carries.
fn select_reference<'a>(
    table: &'a PerFieldTable,
    fields: &[String],
    stock_key: &str,
) -> Option<&'a str> {
    let has_stock =
        |field: &str| table.get(field).is_some_and(|index| index.contains_key(stock_key));

    if has_stock(REFERENCE_FIELD) {
        return table.get_key_value(REFERENCE_FIELD).map(|(k, _)| k.as_str());
    }
    for field in fields {
        if has_stock(field) {
            return table.get_key_value(field.as_str()).map(|(k, _)| k.as_str());
        }
    }
    table
        .iter()
        .find(|(_, index)| index.contains_key(stock_key))
        .map(|(field, _)| field.as_str())
}

/// Ascending order of raw time keys: numeric when both parse, lexicographic
/// otherwise.
fn time_key_order(a: &str, b: &str) -> Ordering {
    match (a.parse::<u128>(), b.parse::<u128>()) {
        (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        _ => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotedesk_gateway::classify;
    use quotedesk_types::Exchange;
    use serde_json::json;

    fn stock() -> StockIdentifier {
        StockIdentifier::new("600000", Exchange::Sh).unwrap()
    }

    fn fields(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_per_stock_rows_ascending_and_truncated() {
        let raw = json!({
            "600000.SH": {
                "20240105": {"close": 10.5},
                "20240103": {"close": 10.1},
                "20240104": {"close": 10.2}
            }
        });
        let response = classify(&raw, &stock()).unwrap();

        let rows = normalize(&response, &stock(), &[], 2).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].time_key, "20240103");
        assert_eq!(rows[1].time_key, "20240104");
    }

    #[test]
    fn test_per_stock_missing_identifier_is_empty() {
        let raw = json!({"000001.SZ": {"20240105": {"close": 9.0}}});
        let response = classify(&raw, &StockIdentifier::new("000001", Exchange::Sz).unwrap())
            .unwrap();

        let rows = normalize(&response, &stock(), &[], 100).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_per_field_missing_fields_default_to_zero() {
        let raw = json!({
            "close": {"600000.SH": {"20240104": 10.2, "20240105": 10.5}},
            "volume": {"600000.SH": {"20240105": 1200}}
        });
        let response = classify(&raw, &stock()).unwrap();

        let rows = normalize(
            &response,
            &stock(),
            &fields(&["open", "close", "volume"]),
            100,
        )
        .unwrap();
        assert_eq!(rows.len(), 2);
        // Sparse and unpopulated fields default silently.
        assert_eq!(rows[0].number("open"), Some(0.0));
        assert_eq!(rows[0].number("volume"), Some(0.0));
        assert_eq!(rows[0].number("close"), Some(10.2));
        assert_eq!(rows[1].number("volume"), Some(1200.0));
    }

    #[test]
    fn test_per_field_reference_fallback_without_close() {
        let raw = json!({
            "volume": {"600000.SH": {"20240104": 800, "20240105": 1200}}
        });
        let response = classify(&raw, &stock()).unwrap();

        let rows = normalize(&response, &stock(), &fields(&["volume"]), 100).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_per_field_absent_everywhere_is_no_reference_field() {
        let raw = json!({
            "close": {"000001.SZ": {"20240105": 9.0}},
            "volume": {"000001.SZ": {"20240105": 100}}
        });
        let response = classify(&raw, &stock()).unwrap();

        let result = normalize(&response, &stock(), &fields(&["close"]), 100);
        assert!(matches!(
            result,
            Err(QuotedeskError::NoReferenceField { .. })
        ));
    }

    #[test]
    fn test_equivalent_shapes_yield_identical_rows() {
        let per_stock = json!({
            "600000.SH": {
                "20240104": {"close": 10.2, "volume": 800.0},
                "20240105": {"close": 10.5, "volume": 1200.0}
            }
        });
        let per_field = json!({
            "close": {"600000.SH": {"20240104": 10.2, "20240105": 10.5}},
            "volume": {"600000.SH": {"20240104": 800.0, "20240105": 1200.0}}
        });

        let a = normalize(
            &classify(&per_stock, &stock()).unwrap(),
            &stock(),
            &fields(&["close", "volume"]),
            100,
        )
        .unwrap();
        let b = normalize(
            &classify(&per_field, &stock()).unwrap(),
            &stock(),
            &fields(&["close", "volume"]),
            100,
        )
        .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_numeric_time_key_order_beats_lexicographic() {
        let raw = json!({
            "600000.SH": {
                "93000": {"price": 10.0},
                "130000": {"price": 10.2},
                "145900": {"price": 10.4}
            }
        });
        let response = classify(&raw, &stock()).unwrap();

        let rows = normalize(&response, &stock(), &[], 100).unwrap();
        let keys: Vec<_> = rows.iter().map(|r| r.time_key.as_str()).collect();
        assert_eq!(keys, vec!["93000", "130000", "145900"]);
    }
}
