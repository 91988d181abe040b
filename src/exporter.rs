use std::path::Path;

use crate::error::Result;
use crate::models::{MatchResult, Mismatch, Transaction};
use crate::normalizer::DATE_FIELD;

/// Deterministic union of the two files' column names: reference order
/// first, then columns only the other file has, in its order. Lets an
/// export carry source-specific columns the other side lacks.
pub fn union_columns(reference: &[String], other: &[String]) -> Vec<String> {
    let mut columns = reference.to_vec();
    for column in other {
        if !columns.contains(column) {
            columns.push(column.clone());
        }
    }
    columns
}

/// Write mismatches as CSV: a `Source` column plus the full column union.
/// Columns a row's source file lacks export as empty strings.
pub fn export_mismatches(
    path: &Path,
    mismatches: &[Mismatch],
    columns: &[String],
    date_format: &str,
) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    let mut header = vec!["Source".to_string()];
    header.extend(columns.iter().cloned());
    wtr.write_record(&header)?;

    for m in mismatches {
        let mut row = vec![m.side.label().to_string()];
        row.extend(raw_values(&m.transaction, columns, date_format));
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write matched pairs as CSV: six summary columns, then the reference
/// side's raw columns prefixed `Ref`, then the other side's prefixed
/// `Other`, so header and rows stay aligned.
pub fn export_matches(
    path: &Path,
    matches: &[MatchResult],
    columns: &[String],
    date_format: &str,
) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    let mut header: Vec<String> = [
        "Ref Date",
        "Ref Description",
        "Ref Amount",
        "Other Date",
        "Other Description",
        "Other Amount",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    header.extend(columns.iter().map(|c| format!("Ref {c}")));
    header.extend(columns.iter().map(|c| format!("Other {c}")));
    wtr.write_record(&header)?;

    for m in matches {
        let mut row = vec![
            m.reference.date.format(date_format).to_string(),
            m.reference.description.clone(),
            m.reference.amount.to_string(),
            m.other.date.format(date_format).to_string(),
            m.other.description.clone(),
            m.other.amount.to_string(),
        ];
        row.extend(raw_values(&m.reference, columns, date_format));
        row.extend(raw_values(&m.other, columns, date_format));
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}

fn raw_values(transaction: &Transaction, columns: &[String], date_format: &str) -> Vec<String> {
    columns
        .iter()
        .map(|column| {
            if column == DATE_FIELD {
                transaction.date.format(date_format).to_string()
            } else {
                transaction.raw.get(column).unwrap_or("").to_string()
            }
        })
        .collect()
}
