use thiserror::Error;

#[derive(Error, Debug)]
pub enum TallyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{file}: row {row}: {source}")]
    Row {
        file: String,
        row: usize,
        source: NormalizeError,
    },

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, TallyError>;

/// Why a raw row could not become a Transaction. One variant per rejected
/// row; "no match found" is never an error, it is reconciliation output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("missing '{0}' column")]
    MissingField(&'static str),

    #[error("unparsable date '{0}'")]
    InvalidDate(String),

    #[error("unparsable amount '{0}'")]
    InvalidAmount(String),

    #[error("no description-like column found")]
    DescriptionKeyNotFound,
}
