use colored::Colorize;
use comfy_table::{Cell, Table};
use rust_decimal::Decimal;

use crate::fmt::money;
use crate::models::{MatchResult, Mismatch, Transaction};

// ---------------------------------------------------------------------------
// Display ordering
// ---------------------------------------------------------------------------

/// Sort mismatches by source file then date for display and export. The
/// engine emits discovery order; ordering for humans is a presentation
/// concern and lives here.
pub fn display_order(mismatches: &[Mismatch]) -> Vec<Mismatch> {
    let mut ordered = mismatches.to_vec();
    ordered.sort_by_key(|m| (m.side.label(), m.transaction.date));
    ordered
}

// ---------------------------------------------------------------------------
// Console tables
// ---------------------------------------------------------------------------

pub fn print_mismatches(mismatches: &[Mismatch], date_format: &str) {
    if mismatches.is_empty() {
        println!("\nNo mismatches found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["Source", "Date", "Description", "Amount"]);
    for m in mismatches {
        table.add_row(vec![
            Cell::new(m.side.label()),
            Cell::new(m.transaction.date.format(date_format)),
            Cell::new(&m.transaction.description),
            Cell::new(money(m.transaction.amount)),
        ]);
    }

    let headline = format!("{} mismatched entries", mismatches.len());
    println!("\n{}\n{table}", headline.red().bold());
}

pub fn print_matches(matches: &[MatchResult], date_format: &str, show: bool) {
    if matches.is_empty() {
        println!("\nNo matches found.");
        return;
    }
    if !show {
        println!(
            "\n{} matched entries (run with --show-matches to list them)",
            matches.len()
        );
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        "Ref Date",
        "Ref Description",
        "Ref Amount",
        "Other Date",
        "Other Description",
        "Other Amount",
    ]);
    for m in matches {
        table.add_row(vec![
            Cell::new(m.reference.date.format(date_format)),
            Cell::new(&m.reference.description),
            Cell::new(money(m.reference.amount)),
            Cell::new(m.other.date.format(date_format)),
            Cell::new(&m.other.description),
            Cell::new(money(m.other.amount)),
        ]);
    }

    let headline = format!("{} matched entries", matches.len());
    println!("\n{}\n{table}", headline.green().bold());
}

pub fn print_totals(reference: &[Transaction], other: &[Transaction]) {
    let ref_total: Decimal = reference.iter().map(|t| t.amount).sum();
    let other_total: Decimal = other.iter().map(|t| t.amount).sum();
    println!("\nTotal amount in reference file: {}", money(ref_total));
    println!("Total amount in other file:     {}", money(other_total));
}
