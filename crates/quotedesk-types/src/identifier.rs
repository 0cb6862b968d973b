//! Exchange and stock identifier types.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::QuotedeskError;

/// A mainland stock exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Exchange {
    /// Shanghai.
    Sh,
    /// Shenzhen.
    Sz,
    /// Beijing.
    Bj,
}

impl Exchange {
    /// Returns the exchange suffix as used in identifiers and directory names.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sh => "SH",
            Self::Sz => "SZ",
            Self::Bj => "BJ",
        }
    }

    /// Returns all known exchanges.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Sh, Self::Sz, Self::Bj]
    }
}

impl std::fmt::Display for Exchange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Exchange {
    type Err = QuotedeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SH" => Ok(Self::Sh),
            "SZ" => Ok(Self::Sz),
            "BJ" => Ok(Self::Bj),
            _ => Err(QuotedeskError::InvalidIdentifier(format!(
                "unknown exchange '{s}'"
            ))),
        }
    }
}

/// An exchange-qualified stock code, e.g. `600000.SH`.
///
/// The body is always exactly six ASCII digits; construction enforces the
/// invariant so downstream code never re-validates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StockIdentifier {
    body: String,
    exchange: Exchange,
}

impl StockIdentifier {
    /// Creates an identifier from a 6-digit body and an exchange.
    ///
    /// # Errors
    ///
    /// Returns [`QuotedeskError::InvalidIdentifier`] if the body is not
    /// exactly six ASCII digits.
    pub fn new(body: impl Into<String>, exchange: Exchange) -> crate::Result<Self> {
        let body = body.into();
        if body.len() != 6 || !body.bytes().all(|b| b.is_ascii_digit()) {
            return Err(QuotedeskError::InvalidIdentifier(body));
        }
        Ok(Self { body, exchange })
    }

    /// Returns the 6-digit numeric body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the exchange.
    #[must_use]
    pub const fn exchange(&self) -> Exchange {
        self.exchange
    }
}

impl std::fmt::Display for StockIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.body, self.exchange)
    }
}

impl FromStr for StockIdentifier {
    type Err = QuotedeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (body, suffix) = s
            .split_once('.')
            .ok_or_else(|| QuotedeskError::InvalidIdentifier(s.to_string()))?;
        Self::new(body, suffix.parse()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_round_trip() {
        let id: StockIdentifier = "600000.SH".parse().unwrap();
        assert_eq!(id.body(), "600000");
        assert_eq!(id.exchange(), Exchange::Sh);
        assert_eq!(id.to_string(), "600000.SH");
    }

    #[test]
    fn test_exchange_case_insensitive() {
        assert_eq!("sz".parse::<Exchange>().unwrap(), Exchange::Sz);
        assert!("NYSE".parse::<Exchange>().is_err());
    }

    #[test]
    fn test_body_must_be_six_digits() {
        assert!(StockIdentifier::new("00001", Exchange::Sz).is_err());
        assert!(StockIdentifier::new("0000001", Exchange::Sz).is_err());
        assert!(StockIdentifier::new("00000a", Exchange::Sz).is_err());
        assert!(StockIdentifier::new("000001", Exchange::Sz).is_ok());
    }

    #[test]
    fn test_parse_rejects_missing_suffix() {
        assert!("600000".parse::<StockIdentifier>().is_err());
        assert!("600000.XX".parse::<StockIdentifier>().is_err());
    }
}
