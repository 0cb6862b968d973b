//! Display utilities and output formatting for the quotedesk CLI.

use anyhow::Result;
use clap::ValueEnum;
use quotedesk_lib::prelude::*;

/// Output format for dumped records.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    /// Aligned columns for the terminal.
    Table,
    /// Comma-separated values.
    Csv,
    /// One JSON array.
    Json,
}

/// Prints a record batch in the chosen format.
pub(crate) fn print_batch(batch: &RecordBatch, format: Format) -> Result<()> {
    match (batch, format) {
        (RecordBatch::Ticks(records), Format::Table) => print_tick_table(records),
        (RecordBatch::Ticks(records), Format::Csv) => print_tick_csv(records),
        (RecordBatch::Bars(records), Format::Table) => print_bar_table(records),
        (RecordBatch::Bars(records), Format::Csv) => print_bar_csv(records),
        (_, Format::Json) => println!("{}", serde_json::to_string_pretty(batch)?),
    }
    Ok(())
}

fn print_tick_table(records: &[TickRecord]) {
    println!(
        "{:<20} {:>10} {:>12} {:>14} {:>10} {:>10} {:>10} {:>10}",
        "TIME", "PRICE", "VOLUME", "AMOUNT", "BID1", "BIDVOL1", "ASK1", "ASKVOL1"
    );
    println!("{}", "-".repeat(104));
    for record in records {
        let level1 = &record.order_book[0];
        println!(
            "{:<20} {:>10} {:>12} {:>14} {:>10} {:>10} {:>10} {:>10}",
            record.time,
            record.last_price,
            record.volume,
            record.amount,
            level1.bid_price,
            level1.bid_volume,
            level1.ask_price,
            level1.ask_volume,
        );
    }
    println!("\nTotal: {} ticks", records.len());
}

fn print_bar_table(records: &[BarRecord]) {
    println!(
        "{:<20} {:>10} {:>10} {:>10} {:>10} {:>12} {:>14} {:>5}",
        "TIME", "OPEN", "HIGH", "LOW", "CLOSE", "VOLUME", "AMOUNT", "SUSP"
    );
    println!("{}", "-".repeat(98));
    for record in records {
        println!(
            "{:<20} {:>10} {:>10} {:>10} {:>10} {:>12} {:>14} {:>5}",
            record.time,
            record.open,
            record.high,
            record.low,
            record.close,
            record.volume,
            record.amount,
            if record.suspended { "yes" } else { "" },
        );
    }
    println!("\nTotal: {} bars", records.len());
}

fn print_tick_csv(records: &[TickRecord]) {
    println!(
        "time,last_price,open,high,low,prev_close,amount,volume,raw_volume,status,\
         open_interest,prev_settlement,trade_count,\
         bid1,bid_vol1,ask1,ask_vol1,bid2,bid_vol2,ask2,ask_vol2,bid3,bid_vol3,ask3,ask_vol3,\
         bid4,bid_vol4,ask4,ask_vol4,bid5,bid_vol5,ask5,ask_vol5"
    );
    for record in records {
        let book: Vec<String> = record
            .order_book
            .iter()
            .map(|level| {
                format!(
                    "{},{},{},{}",
                    level.bid_price, level.bid_volume, level.ask_price, level.ask_volume
                )
            })
            .collect();
        println!(
            "{},{},{},{},{},{},{},{},{},{},{},{},{},{}",
            record.time,
            record.last_price,
            record.open,
            record.high,
            record.low,
            record.prev_close,
            record.amount,
            record.volume,
            record.raw_volume,
            record.status,
            record.open_interest,
            record.prev_settlement,
            record.trade_count,
            book.join(","),
        );
    }
}

fn print_bar_csv(records: &[BarRecord]) {
    println!(
        "time,open,high,low,close,volume,amount,settlement,open_interest,prev_close,suspended"
    );
    for record in records {
        println!(
            "{},{},{},{},{},{},{},{},{},{},{}",
            record.time,
            record.open,
            record.high,
            record.low,
            record.close,
            record.volume,
            record.amount,
            record.settlement,
            record.open_interest,
            record.prev_close,
            record.suspended,
        );
    }
}
