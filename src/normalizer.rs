use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::NormalizeError;
use crate::models::{RawRow, Transaction};
use crate::settings::Settings;

/// The loader expects these exact column names; `tally filter` exists to
/// rename whatever a bank export calls them into this shape.
pub const DATE_FIELD: &str = "Date";
pub const AMOUNT_FIELD: &str = "Amount";

/// Knobs the normalizer needs, lifted out of Settings so the heuristics
/// stay inspectable and testable on their own.
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    pub date_format: String,
    pub description_aliases: Vec<String>,
}

impl NormalizeOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            date_format: settings.date_format.clone(),
            description_aliases: settings.description_aliases.clone(),
        }
    }
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

/// Turn a raw row into a canonical Transaction, or reject it. A row that
/// gets past here always carries a valid date and amount.
pub fn normalize(row: &RawRow, options: &NormalizeOptions) -> Result<Transaction, NormalizeError> {
    let date_value = row
        .get(DATE_FIELD)
        .ok_or(NormalizeError::MissingField(DATE_FIELD))?;
    let date = NaiveDate::parse_from_str(date_value.trim(), &options.date_format)
        .map_err(|_| NormalizeError::InvalidDate(date_value.to_string()))?;

    let amount_value = row
        .get(AMOUNT_FIELD)
        .ok_or(NormalizeError::MissingField(AMOUNT_FIELD))?;
    let amount = parse_amount(amount_value)?;

    let description_key = resolve_description_key(row, &options.description_aliases)
        .ok_or(NormalizeError::DescriptionKeyNotFound)?;
    let description = row.get(description_key).unwrap_or_default().to_string();

    Ok(Transaction {
        date,
        amount,
        description,
        raw: row.clone(),
    })
}

/// Parse a currency-formatted string into an exact decimal. Strips `$`,
/// thousands separators and stray quotes; `(50.00)` reads as -50.00.
pub fn parse_amount(raw: &str) -> Result<Decimal, NormalizeError> {
    let stripped = raw.replace(['$', ',', '"'], "");
    let stripped = stripped.trim();
    let (digits, negative) = match stripped
        .strip_prefix('(')
        .and_then(|v| v.strip_suffix(')'))
    {
        Some(inner) => (inner.trim(), true),
        None => (stripped, false),
    };
    let amount: Decimal = digits
        .parse()
        .map_err(|_| NormalizeError::InvalidAmount(raw.to_string()))?;
    Ok(if negative { -amount } else { amount })
}

/// Find the column holding the description: scan field names in original
/// column order and take the first that either equals a configured alias or
/// contains "description" case-insensitively. Best-effort: with both
/// "Payee" and "Memo" present, first in column order wins.
pub fn resolve_description_key<'a>(row: &'a RawRow, aliases: &[String]) -> Option<&'a str> {
    row.columns().find(|name| {
        aliases.iter().any(|alias| alias == name) || name.to_lowercase().contains("description")
    })
}
