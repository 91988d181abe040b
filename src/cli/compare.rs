use std::path::Path;

use colored::Colorize;

use crate::error::Result;
use crate::exporter;
use crate::loader::{self, LoadedLedger};
use crate::normalizer::NormalizeOptions;
use crate::reconciler;
use crate::reports;
use crate::settings::load_settings;

#[allow(clippy::too_many_arguments)]
pub fn run(
    reference_file: &str,
    other_file: &str,
    date_delta: Option<u32>,
    show_matches: bool,
    output_file: Option<&str>,
    matches_file: Option<&str>,
    strict: bool,
) -> Result<()> {
    let settings = load_settings();
    let options = NormalizeOptions::from_settings(&settings);
    let delta = date_delta.unwrap_or(settings.date_delta);

    let reference = loader::load_transactions(Path::new(reference_file), &options, strict)?;
    let other = loader::load_transactions(Path::new(other_file), &options, strict)?;
    report_skipped(&reference);
    report_skipped(&other);

    let outcome = reconciler::reconcile(&reference.transactions, &other.transactions, delta);
    let mismatches = reports::display_order(&outcome.mismatches);

    reports::print_mismatches(&mismatches, &settings.date_format);
    reports::print_matches(&outcome.matches, &settings.date_format, show_matches);

    let columns = exporter::union_columns(&reference.columns, &other.columns);
    if let Some(path) = output_file {
        exporter::export_mismatches(Path::new(path), &mismatches, &columns, &settings.date_format)?;
        println!("\nMismatches exported to {path}");
    }
    if let Some(path) = matches_file {
        exporter::export_matches(
            Path::new(path),
            &outcome.matches,
            &columns,
            &settings.date_format,
        )?;
        println!("\nMatches exported to {path}");
    }

    reports::print_totals(&reference.transactions, &other.transactions);
    Ok(())
}

fn report_skipped(ledger: &LoadedLedger) {
    for skipped in &ledger.skipped {
        println!(
            "{} {}: skipping row {}: {}",
            "Warning:".yellow().bold(),
            ledger.file,
            skipped.row,
            skipped.reason
        );
    }
}
