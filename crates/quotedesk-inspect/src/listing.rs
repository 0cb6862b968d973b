//! Directory enumeration over the vendor data tree.

use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

use quotedesk_types::{DataFile, Exchange, FileEntry, PeriodKind, Result};

use crate::path::inspect_path;

/// Enumerates one exchange/period directory into a sorted listing.
///
/// Bar periods scan `{root}/{EXCHANGE}/{periodCode}` directly; tick scans the
/// per-stock subdirectories of `{root}/{EXCHANGE}/0`. Only files carrying
/// the period's expected extension are listed; the match is
/// case-insensitive. Entries are sorted by the stock-code portion (for tick,
/// by the stock directory and then the date-named file).
///
/// A directory that does not exist yields an empty listing rather than an
/// error: an exchange the user never downloaded is not exceptional.
///
/// # Errors
///
/// Returns an I/O error when an existing directory cannot be read.
pub fn list_data_files(root: &Path, exchange: Exchange, period: PeriodKind) -> Result<Vec<FileEntry>> {
    let dir = root
        .join(exchange.as_str())
        .join(period.code().to_string());
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut entries = Vec::new();
    if period.is_tick() {
        for stock_dir in read_dirs(&dir)? {
            collect_files(&stock_dir, period, &mut entries)?;
        }
        entries.sort_by(|a, b| sort_key_tick(a).cmp(&sort_key_tick(b)));
    } else {
        collect_files(&dir, period, &mut entries)?;
        entries.sort_by(|a, b| a.stock_code().cmp(b.stock_code()).then_with(|| a.filename.cmp(&b.filename)));
    }
    Ok(entries)
}

/// Stats one data file into a [`DataFile`] descriptor.
///
/// Estimate fields are left unset; the record-count estimator fills them
/// lazily.
///
/// # Errors
///
/// Returns [`PathNotResolvable`](quotedesk_types::QuotedeskError::PathNotResolvable)
/// for a path outside the directory convention, or an I/O error when the
/// file cannot be stat-ed.
pub fn scan_data_file(path: &Path) -> Result<DataFile> {
    let meta = inspect_path(path)?;
    let byte_size = fs::metadata(path)?.len();
    Ok(DataFile::new(path, meta.period, meta.exchange, byte_size))
}

/// Collects matching files of one directory into the listing.
fn collect_files(dir: &Path, period: PeriodKind, entries: &mut Vec<FileEntry>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() || !has_extension(&path, period.file_extension()) {
            continue;
        }
        let Some(filename) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let metadata = entry.metadata()?;
        entries.push(FileEntry {
            filename: filename.to_string(),
            full_path: path.clone(),
            byte_size: metadata.len(),
            modified: modified_string(&metadata),
        });
    }
    Ok(())
}

/// Returns the subdirectories of `dir`.
fn read_dirs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

fn has_extension(path: &Path, expected: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(expected))
}

fn modified_string(metadata: &fs::Metadata) -> String {
    metadata.modified().map_or_else(
        |_| String::new(),
        |time| {
            DateTime::<Local>::from(time)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        },
    )
}

/// Sort key for tick listings: stock directory first, then the date file.
fn sort_key_tick(entry: &FileEntry) -> (String, String) {
    let stock_dir = entry
        .full_path
        .parent()
        .and_then(|p| p.file_name())
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();
    (stock_dir, entry.filename.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    fn write_file(path: &Path, bytes: usize) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        let mut file = File::create(path).unwrap();
        file.write_all(&vec![0u8; bytes]).unwrap();
    }

    #[test]
    fn test_listing_sorted_by_stock_code() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("SH").join("86400");
        write_file(&dir.join("601398.day"), 64);
        write_file(&dir.join("600000.day"), 32);
        // Wrong extension for the period: must be skipped.
        write_file(&dir.join("600519.lc1"), 32);
        // Uppercase extension still matches.
        write_file(&dir.join("600036.DAY"), 96);

        let entries = list_data_files(root.path(), Exchange::Sh, PeriodKind::Day1).unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.filename.as_str()).collect();
        assert_eq!(names, vec!["600000.day", "600036.DAY", "601398.day"]);
        assert_eq!(entries[0].byte_size, 32);
        assert!(!entries[0].modified.is_empty());
    }

    #[test]
    fn test_tick_listing_walks_stock_directories() {
        let root = tempfile::tempdir().unwrap();
        let base = root.path().join("SZ").join("0");
        write_file(&base.join("000002").join("20240105.dat"), 28);
        write_file(&base.join("000001").join("20240105.dat"), 28);
        write_file(&base.join("000001").join("20240104.dat"), 28);

        let entries = list_data_files(root.path(), Exchange::Sz, PeriodKind::Tick).unwrap();
        let paths: Vec<_> = entries
            .iter()
            .map(|e| sort_key_tick(e))
            .collect();
        assert_eq!(
            paths,
            vec![
                ("000001".to_string(), "20240104.dat".to_string()),
                ("000001".to_string(), "20240105.dat".to_string()),
                ("000002".to_string(), "20240105.dat".to_string()),
            ]
        );
    }

    #[test]
    fn test_missing_directory_is_empty_listing() {
        let root = tempfile::tempdir().unwrap();
        let entries = list_data_files(root.path(), Exchange::Bj, PeriodKind::Minute1).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_scan_data_file() {
        let root = tempfile::tempdir().unwrap();
        let path = root.path().join("SH").join("86400").join("600000.day");
        write_file(&path, 8000);

        let file = scan_data_file(&path).unwrap();
        assert_eq!(file.byte_size, 8000);
        assert_eq!(file.period, PeriodKind::Day1);
        assert_eq!(file.exchange, Exchange::Sh);
        assert_eq!(file.record_count_estimate, None);
    }
}
