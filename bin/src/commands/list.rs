//! List command implementation.
//!
//! This module handles listing vendor data files under a data root.

use anyhow::Result;
use quotedesk_lib::prelude::*;
use std::path::Path;

/// List the data files of one period, for one exchange or all of them.
pub(crate) fn list_files(root: &Path, exchange: Option<&str>, period: &str) -> Result<()> {
    let period: PeriodKind = period.parse()?;
    let exchanges: Vec<Exchange> = match exchange {
        Some(name) => vec![name.parse()?],
        None => Exchange::all().to_vec(),
    };

    let mut total = 0usize;
    for exchange in exchanges {
        let entries = list_data_files(root, exchange, period)?;
        if entries.is_empty() {
            continue;
        }

        println!("{exchange} / {period}");
        println!("{:<24} {:>12} {:<20}", "FILENAME", "BYTES", "MODIFIED");
        println!("{}", "-".repeat(58));
        for entry in &entries {
            println!(
                "{:<24} {:>12} {:<20}",
                entry.filename, entry.byte_size, entry.modified
            );
        }
        println!();
        total += entries.len();
    }

    if total == 0 {
        println!("No data files found.");
    } else {
        println!("Total: {total} files");
    }
    Ok(())
}
