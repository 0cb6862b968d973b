//! Deriving record metadata from file locations.

use chrono::NaiveDate;
use std::path::Path;

use quotedesk_types::{
    Exchange, PeriodKind, QuotedeskError, Result, StockIdentifier, parse_trading_date,
};

/// Metadata recovered from a data file's location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMeta {
    /// The 6-digit stock body.
    pub stock_body: String,
    /// Exchange the file belongs to.
    pub exchange: Exchange,
    /// Period of the file's records.
    pub period: PeriodKind,
    /// Trading date, present only for tick files.
    pub trading_date: Option<NaiveDate>,
}

impl PathMeta {
    /// Builds the exchange-qualified identifier for this file.
    ///
    /// # Errors
    ///
    /// Never fails for metadata produced by [`inspect_path`], which has
    /// already validated the body.
    pub fn identifier(&self) -> Result<StockIdentifier> {
        StockIdentifier::new(&self.stock_body, self.exchange)
    }
}

/// Derives stock body, exchange, period and trading date from a path.
///
/// Bar paths look like `.../{EXCHANGE}/{periodCode}/{stockBody}.{ext}`, tick
/// paths like `.../{EXCHANGE}/0/{stockBody}/{YYYYMMDD}.{ext}`. The function
/// touches no filesystem state.
///
/// # Errors
///
/// Returns [`QuotedeskError::PathNotResolvable`] when the stock body is not
/// exactly six digits, a tick path's trailing component is not eight digits,
/// or the exchange or period component is unknown.
pub fn inspect_path(path: &Path) -> Result<PathMeta> {
    let fail = |reason: &str| QuotedeskError::path_not_resolvable(path, reason);

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| fail("missing file name"))?;
    let parent = component_name(path, 1).ok_or_else(|| fail("missing parent directory"))?;
    let grandparent = component_name(path, 2).ok_or_else(|| fail("missing exchange directory"))?;

    if grandparent == "0" {
        // Tick layout: .../{EXCHANGE}/0/{stockBody}/{YYYYMMDD}.{ext}
        let exchange = component_name(path, 3)
            .ok_or_else(|| fail("missing exchange directory"))?
            .parse::<Exchange>()
            .map_err(|_| fail("unknown exchange"))?;
        if !is_stock_body(parent) {
            return Err(fail("stock directory is not a 6-digit code"));
        }
        let trading_date =
            parse_trading_date(stem).ok_or_else(|| fail("tick file name is not an 8-digit date"))?;
        return Ok(PathMeta {
            stock_body: parent.to_string(),
            exchange,
            period: PeriodKind::Tick,
            trading_date: Some(trading_date),
        });
    }

    // Bar layout: .../{EXCHANGE}/{periodCode}/{stockBody}.{ext}
    let exchange = grandparent
        .parse::<Exchange>()
        .map_err(|_| fail("unknown exchange"))?;
    let period = parent
        .parse::<u32>()
        .ok()
        .and_then(PeriodKind::from_code)
        .ok_or_else(|| fail("unknown period code"))?;
    if !is_stock_body(stem) {
        return Err(fail("file name is not a 6-digit stock code"));
    }
    Ok(PathMeta {
        stock_body: stem.to_string(),
        exchange,
        period,
        trading_date: None,
    })
}

/// Returns the name of the `n`-th ancestor component (1 = parent directory).
fn component_name(path: &Path, n: usize) -> Option<&str> {
    let mut current = path;
    for _ in 0..n {
        current = current.parent()?;
    }
    current.file_name()?.to_str()
}

fn is_stock_body(s: &str) -> bool {
    s.len() == 6 && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_inspect_tick_path() {
        let meta = inspect_path(&PathBuf::from("/data/SZ/0/000001/20240105.dat")).unwrap();
        assert_eq!(meta.stock_body, "000001");
        assert_eq!(meta.exchange, Exchange::Sz);
        assert_eq!(meta.period, PeriodKind::Tick);
        assert_eq!(
            meta.trading_date,
            Some(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap())
        );
        assert_eq!(meta.identifier().unwrap().to_string(), "000001.SZ");
    }

    #[test]
    fn test_inspect_bar_path() {
        let meta = inspect_path(&PathBuf::from("/data/SH/86400/600000.day")).unwrap();
        assert_eq!(meta.stock_body, "600000");
        assert_eq!(meta.exchange, Exchange::Sh);
        assert_eq!(meta.period, PeriodKind::Day1);
        assert_eq!(meta.trading_date, None);
    }

    #[test]
    fn test_inspect_minute_path() {
        let meta = inspect_path(&PathBuf::from("/data/BJ/300/830799.lc5")).unwrap();
        assert_eq!(meta.period, PeriodKind::Minute5);
        assert_eq!(meta.exchange, Exchange::Bj);
    }

    #[test]
    fn test_reject_short_stock_body() {
        let result = inspect_path(&PathBuf::from("/data/SH/86400/60000.day"));
        assert!(matches!(
            result,
            Err(QuotedeskError::PathNotResolvable { .. })
        ));
    }

    #[test]
    fn test_reject_non_date_tick_file() {
        let result = inspect_path(&PathBuf::from("/data/SZ/0/000001/latest.dat"));
        assert!(matches!(
            result,
            Err(QuotedeskError::PathNotResolvable { .. })
        ));
    }

    #[test]
    fn test_reject_unknown_exchange_and_period() {
        assert!(inspect_path(&PathBuf::from("/data/HK/86400/600000.day")).is_err());
        assert!(inspect_path(&PathBuf::from("/data/SH/3600/600000.day")).is_err());
    }
}
