use thiserror::Error;

/// Validation failures raised by the ledger and budget table.
///
/// Every variant is a rejected operation, not a corrupted state: the ledger
/// is guaranteed to remain in its last-valid state after any failed call.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LedgerError {
    #[error("title must not be empty")]
    InvalidTitle,
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error("unregistered category: {0}")]
    InvalidCategory(String),
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}
