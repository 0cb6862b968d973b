//! quotedesk CLI - Inspect vendor market-data files and retrieval captures.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod display;

use display::Format;

#[derive(Parser)]
#[command(name = "quotedesk")]
#[command(about = "Inspect vendor market-data files and retrieval captures", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List vendor data files under a data root
    List {
        /// Root of the vendor data tree
        root: PathBuf,

        /// Exchange to list (SH, SZ, BJ); all exchanges when omitted
        #[arg(short, long)]
        exchange: Option<String>,

        /// Period (tick, 1m, 5m, 1d)
        #[arg(short, long, default_value = "1d")]
        period: String,
    },

    /// Show path metadata and the record-count estimate for one data file
    Info {
        /// Path to a vendor data file
        file: PathBuf,
    },

    /// Run a captured vendor response through the record pipeline
    Dump {
        /// JSON capture of a vendor retrieval response
        #[arg(short, long)]
        response: PathBuf,

        /// Stock identifier, e.g. 600000.SH
        #[arg(short, long)]
        stock: String,

        /// Period (tick, 1m, 5m, 1d)
        #[arg(short, long, default_value = "1d")]
        period: String,

        /// Field names to request (vendor spelling)
        #[arg(short, long, value_delimiter = ',')]
        fields: Vec<String>,

        /// Maximum number of records
        #[arg(short, long, default_value = "800")]
        limit: usize,

        /// Trading-date hint (YYYY-MM-DD) for ambiguous time keys
        #[arg(short, long)]
        date: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: Format,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::List {
            root,
            exchange,
            period,
        } => commands::list::list_files(&root, exchange.as_deref(), &period),
        Commands::Info { file } => commands::info::show_info(&file),
        Commands::Dump {
            response,
            stock,
            period,
            fields,
            limit,
            date,
            format,
        } => commands::dump::dump(
            &response,
            &stock,
            &period,
            &fields,
            limit,
            date.as_deref(),
            format,
        ),
    }
}
