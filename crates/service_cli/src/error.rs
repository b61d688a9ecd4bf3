//! CLI error types.

use ratecard_pricing::QuoteError;
use ratecard_store::{SnapshotError, StoreError};
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be built
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A store edit was rejected
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The store file or an import document could not be used
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    /// The quote could not be priced
    #[error("{}: {}", .0.headline(), .0)]
    Quote(#[from] QuoteError),

    /// Argument value not understood
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Input file missing
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Output could not be written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Output could not be encoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;
