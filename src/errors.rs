use std::fmt;
use std::result::Result as StdResult;

use thiserror::Error;

use crate::ledger::Kind;

/// Unified error type for validation, addressing, and storage failures.
///
/// No variant is fatal: validation and addressing errors leave the ledger
/// untouched, and persistence failures roll back to the previous snapshot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Missing required field: {0}")]
    MissingField(Field),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Position {position} is out of range for {kind} (length {len})")]
    OutOfRange {
        kind: Kind,
        position: usize,
        len: usize,
    },
    #[error("Persistence error: {0}")]
    Storage(String),
}

pub type Result<T> = StdResult<T, LedgerError>;

/// Required entry fields, named by validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Amount,
    Category,
    Date,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Amount => "amount",
            Field::Category => "category",
            Field::Date => "date",
        };
        f.write_str(name)
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::Storage(err.to_string())
    }
}
