//! Store and snapshot errors.

use ratecard_core::types::{LimitError, PricingModel, RateInputError};
use thiserror::Error;

/// Errors from editing the rate card store.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoreError {
    /// Bracket limit edit rejected
    #[error(transparent)]
    InvalidLimit(#[from] LimitError),

    /// Rate text rejected
    #[error(transparent)]
    InvalidRate(#[from] RateInputError),

    /// Route row does not exist
    #[error("Row {row} out of range (table has {len} rows)")]
    RowOutOfRange {
        /// Requested row
        row: usize,
        /// Rows in the table
        len: usize,
    },

    /// Rate column does not exist
    #[error("Column {column} out of range (have {len} brackets)")]
    ColumnOutOfRange {
        /// Requested column
        column: usize,
        /// Number of brackets
        len: usize,
    },

    /// Every table keeps at least one route row
    #[error("Cannot delete the last remaining row.")]
    LastRow,

    /// Every model keeps at least one table
    #[error("You must have at least one table for model {0}.")]
    LastTable(PricingModel),

    /// Table names cannot be blank
    #[error("Table name cannot be blank")]
    BlankName,

    /// No table with that id or name
    #[error("No table '{table}' for model {model}")]
    UnknownTable {
        /// Model searched
        model: PricingModel,
        /// Id or name requested
        table: String,
    },
}

/// Errors from reading or writing snapshot documents.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// File could not be read or written
    #[error("Snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Document is not valid JSON or has the wrong shape
    #[error("Error parsing snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Document carries neither the current version nor a limits array
    #[error("Unrecognised snapshot (app_version {0:?}) without limits")]
    Unrecognised(Option<String>),
}

/// Result alias for store edits.
pub type StoreResult<T> = Result<T, StoreError>;
