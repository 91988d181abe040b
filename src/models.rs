use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Which input file a one-sided mismatch came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Reference,
    Other,
}

impl Side {
    pub fn label(&self) -> &'static str {
        match self {
            Side::Reference => "Reference File",
            Side::Other => "Other File",
        }
    }
}

/// A CSV data row as read: column name → value pairs in original column
/// order. Kept on each Transaction so exports can reproduce source-specific
/// columns losslessly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    fields: Vec<(String, String)>,
}

impl RawRow {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.iter().map(|(key, _)| key.as_str())
    }
}

/// Canonical transaction, immutable once built by the normalizer. Amount is
/// a Decimal because the matcher compares with `==`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub date: NaiveDate,
    pub amount: Decimal,
    pub description: String,
    pub raw: RawRow,
}

/// A matched pair; both sides are consumed and ineligible for re-matching.
#[derive(Debug, Clone)]
pub struct MatchResult {
    pub reference: Transaction,
    pub other: Transaction,
}

/// A transaction with no eligible counterpart within tolerance.
#[derive(Debug, Clone)]
pub struct Mismatch {
    pub transaction: Transaction,
    pub side: Side,
}
