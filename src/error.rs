use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no amino acid position columns detected (expected names like {prefix}1, {prefix}2, ...)")]
    NoPositionColumns { prefix: String },
    #[error("required column '{name}' not found in table header")]
    MissingColumn { name: String },
    #[error("input table is empty; expected a header line")]
    EmptyTable,
    #[error("line {line} has {found} fields, but the header has {expected}")]
    RowTooWide { line: u64, found: usize, expected: usize },
    #[error("invalid column pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("malformed table: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
