//! Info command implementation.

use anyhow::Result;
use quotedesk_lib::prelude::*;
use std::path::Path;

/// Show path metadata and the record-count estimate for one data file.
pub(crate) fn show_info(path: &Path) -> Result<()> {
    let meta = inspect_path(path)?;
    let mut file = scan_data_file(path)?;
    annotate(&mut file);

    println!("{:<16} {}", "Stock:", meta.identifier()?);
    println!("{:<16} {}", "Exchange:", meta.exchange);
    println!("{:<16} {}", "Period:", meta.period);
    if let Some(date) = meta.trading_date {
        println!("{:<16} {}", "Trading date:", date.format("%Y-%m-%d"));
    }
    println!("{:<16} {}", "Byte size:", file.byte_size);
    if let (Some(size), Some(count)) = (file.record_size_estimate, file.record_count_estimate) {
        println!("{:<16} {}", "Record size:", size);
        println!(
            "{:<16} {}{}",
            "Record count:",
            count,
            if file.approximate { " (approximate)" } else { "" },
        );
    }
    Ok(())
}
