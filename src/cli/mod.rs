pub mod compare;
pub mod filter;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tally",
    about = "Reconcile two transaction ledgers, tolerating small date discrepancies."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare a reference ledger against another and report mismatches.
    Compare {
        /// Path to the reference CSV file (treated as ground truth)
        reference_file: String,
        /// Path to the other CSV file (validated against the reference)
        other_file: String,
        /// Days of date difference to still consider a match
        #[arg(short = 'd', long)]
        date_delta: Option<u32>,
        /// Show matched entries
        #[arg(short = 's', long)]
        show_matches: bool,
        /// Path to the output CSV file for mismatches
        #[arg(short = 'o', long)]
        output_file: Option<String>,
        /// Path to the output CSV file for matches
        #[arg(short = 'm', long)]
        matches_file: Option<String>,
        /// Abort on the first malformed row instead of skipping it
        #[arg(long)]
        strict: bool,
    },
    /// Keep and rename columns across a folder of CSV exports so `compare`
    /// can read them.
    Filter {
        /// Folder containing CSV files to process
        input_dir: String,
        /// Destination folder (default: <INPUT_DIR>/filtered)
        #[arg(long)]
        output_dir: Option<String>,
        /// Column to keep, in output order (repeatable; default from settings)
        #[arg(short = 'k', long = "keep")]
        keep: Vec<String>,
        /// Rename a kept column, as OLD=NEW (repeatable; default from settings)
        #[arg(short = 'r', long = "rename")]
        rename: Vec<String>,
    },
}
