//! On-disk data-file descriptors.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{Exchange, PeriodKind};

/// A vendor data file found by directory enumeration.
///
/// The estimate fields start unset and are filled lazily by the record-count
/// estimator; they are never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataFile {
    /// Full path to the file.
    pub path: PathBuf,
    /// Period of the records the file holds.
    pub period: PeriodKind,
    /// Exchange the file belongs to.
    pub exchange: Exchange,
    /// File size in bytes.
    pub byte_size: u64,
    /// Record size chosen by the estimator, if computed.
    pub record_size_estimate: Option<u64>,
    /// Record count derived from the chosen size, if computed.
    pub record_count_estimate: Option<u64>,
    /// True when the count is a fallback quotient rather than an even split.
    pub approximate: bool,
}

impl DataFile {
    /// Creates a descriptor with estimates unset.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, period: PeriodKind, exchange: Exchange, byte_size: u64) -> Self {
        Self {
            path: path.into(),
            period,
            exchange,
            byte_size,
            record_size_estimate: None,
            record_count_estimate: None,
            approximate: false,
        }
    }
}

/// One row of a file listing shown to UI collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Bare file name.
    pub filename: String,
    /// Full path.
    pub full_path: PathBuf,
    /// File size in bytes.
    pub byte_size: u64,
    /// Modification time, formatted `YYYY-MM-DD HH:MM:SS`.
    pub modified: String,
}

impl FileEntry {
    /// Returns the stock-code portion of the filename (its digit prefix).
    ///
    /// Listings are sorted by this key.
    #[must_use]
    pub fn stock_code(&self) -> &str {
        let end = self
            .filename
            .bytes()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(self.filename.len());
        &self.filename[..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_code_portion() {
        let entry = FileEntry {
            filename: "600000.day".to_string(),
            full_path: PathBuf::from("/data/SH/86400/600000.day"),
            byte_size: 8000,
            modified: "2024-01-05 16:00:00".to_string(),
        };
        assert_eq!(entry.stock_code(), "600000");
    }

    #[test]
    fn test_new_data_file_has_no_estimates() {
        let file = DataFile::new("/data/SH/86400/600000.day", PeriodKind::Day1, Exchange::Sh, 8000);
        assert_eq!(file.record_size_estimate, None);
        assert_eq!(file.record_count_estimate, None);
        assert!(!file.approximate);
    }
}
