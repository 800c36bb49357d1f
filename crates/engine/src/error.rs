//! The module contains the errors the ledger can raise.
//!
//! The layers are:
//!
//! - [`ValidationError`] for rejected `add` input (one variant per field).
//! - [`StoreError`] for persistence write failures.
//! - [`LedgerError`] wrapping both for the mutating operations.
//! - [`ExportError`] for the CSV/PDF document builders.
use std::io;

use thiserror::Error;

/// A rejected field of an `add` draft.
///
/// Raised before any mutation; an `add` that returns one of these has not
/// touched the list or the store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Description must not be empty!")]
    EmptyDescription,
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Amount must be greater than zero!")]
    NonPositiveAmount,
    #[error("A valid date (YYYY-MM-DD) is required!")]
    MissingDate,
    #[error("\"{0}\" is not a transaction kind!")]
    InvalidKind(String),
}

/// Failure while writing to the backing store.
///
/// Reads never produce this: an unreadable or malformed blob degrades to an
/// empty list instead.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}

/// Ledger custom errors.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}

impl PartialEq for LedgerError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Validation(a), Self::Validation(b)) => a == b,
            (Self::Storage(a), Self::Storage(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}

/// Errors from the export document builders.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("No data to export!")]
    EmptyLedger,
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("failed to finalize export: {0}")]
    Finalize(String),
    #[error("failed to build report: {0}")]
    Pdf(String),
}
