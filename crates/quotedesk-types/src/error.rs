//! Error types for quotedesk.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for quotedesk operations.
pub type Result<T> = std::result::Result<T, QuotedeskError>;

/// Errors that can occur while resolving paths and retrieving records.
///
/// An empty retrieval is not an error: it propagates as an empty record
/// sequence. Only a vendor primitive that cannot be invoked at all maps to
/// [`QuotedeskError::RetrievalUnavailable`].
#[derive(Error, Debug)]
pub enum QuotedeskError {
    /// A data-file path does not follow the vendor directory convention.
    #[error("path not resolvable: {path}: {reason}")]
    PathNotResolvable {
        /// The offending path.
        path: PathBuf,
        /// Why the path could not be resolved.
        reason: String,
    },

    /// A stock identifier string is malformed.
    #[error("invalid stock identifier: {0}")]
    InvalidIdentifier(String),

    /// An unknown period code or period name.
    #[error("unknown period: {0}")]
    UnknownPeriod(String),

    /// The vendor retrieval primitive could not be invoked.
    ///
    /// This is an explicit failure state; callers must surface it and must
    /// never substitute generated rows for the missing data.
    #[error("vendor retrieval unavailable: {reason}")]
    RetrievalUnavailable {
        /// Vendor-reported reason.
        reason: String,
    },

    /// A per-field response contains the requested identifier in no field's
    /// index, so no reference field can order the rows.
    #[error("no reference field for stock {stock}")]
    NoReferenceField {
        /// The identifier that was absent from every field table.
        stock: String,
    },

    /// I/O error while enumerating or stat-ing data files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed vendor response capture.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl QuotedeskError {
    /// Convenience constructor for [`QuotedeskError::PathNotResolvable`].
    pub fn path_not_resolvable(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::PathNotResolvable {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
