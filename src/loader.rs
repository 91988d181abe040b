use std::path::Path;

use crate::error::{NormalizeError, Result, TallyError};
use crate::models::{RawRow, Transaction};
use crate::normalizer::{normalize, NormalizeOptions};

/// One fully materialized input file: ordered header list, the rows that
/// normalized cleanly, and the rows that did not.
#[derive(Debug)]
pub struct LoadedLedger {
    pub file: String,
    pub columns: Vec<String>,
    pub transactions: Vec<Transaction>,
    pub skipped: Vec<SkippedRow>,
}

#[derive(Debug)]
pub struct SkippedRow {
    pub row: usize,
    pub reason: NormalizeError,
}

/// Read a header-first CSV file into Transactions. In strict mode the first
/// malformed row aborts with file/row context; otherwise bad rows are
/// collected in `skipped` and reconciliation proceeds on the rest.
pub fn load_transactions(
    path: &Path,
    options: &NormalizeOptions,
    strict: bool,
) -> Result<LoadedLedger> {
    let file = path.display().to_string();
    let mut rdr = csv::Reader::from_path(path)?;
    let columns: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();

    let mut transactions = Vec::new();
    let mut skipped = Vec::new();
    for (idx, record) in rdr.records().enumerate() {
        let record = record?;
        let fields = columns
            .iter()
            .zip(record.iter())
            .map(|(name, value)| (name.clone(), value.to_string()))
            .collect();
        let raw = RawRow::new(fields);

        match normalize(&raw, options) {
            Ok(transaction) => transactions.push(transaction),
            Err(reason) => {
                // 1-based file line number, counting the header
                let row = idx + 2;
                if strict {
                    return Err(TallyError::Row {
                        file,
                        row,
                        source: reason,
                    });
                }
                skipped.push(SkippedRow { row, reason });
            }
        }
    }

    Ok(LoadedLedger {
        file,
        columns,
        transactions,
        skipped,
    })
}
