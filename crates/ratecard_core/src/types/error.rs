//! Error types for structured error handling.
//!
//! This module provides:
//! - `LimitError`: Errors from editing bracket limits
//! - `RateInputError`: Errors from parsing user-entered rate text
//! - `ModelParseError`: Unknown pricing model names
//! - `ChargeBasisParseError`: Unknown charge basis names
//! - `CurrencyError`: Unknown currency codes

use thiserror::Error;

/// Bracket limit errors.
///
/// # Examples
/// ```
/// use ratecard_core::types::LimitError;
///
/// let err = LimitError::NotPositive { index: 1, value: -5.0 };
/// assert_eq!(format!("{}", err), "Bracket limit 1 must be a positive number, got -5");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LimitError {
    /// Limit is zero, negative or not finite.
    #[error("Bracket limit {index} must be a positive number, got {value}")]
    NotPositive {
        /// Position of the offending limit
        index: usize,
        /// The rejected value
        value: f64,
    },

    /// Bracket position does not exist.
    #[error("Bracket index {index} out of range (have {len} brackets)")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of configured brackets
        len: usize,
    },
}

/// Rate text that cannot become a rate cell.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RateInputError {
    /// Text is neither blank nor a finite number.
    #[error("Rate '{0}' is not a finite number")]
    NotANumber(String),
}

/// Unknown pricing model name.
///
/// # Examples
/// ```
/// use ratecard_core::types::ModelParseError;
///
/// let err = ModelParseError("tiered".to_string());
/// assert!(format!("{}", err).contains("tiered"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown pricing model: {0}. Must be one of: fixed, flat, minFixed, cumulative, minCumulative, minExcess, excess")]
pub struct ModelParseError(pub String);

/// Unknown charge basis name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown charge basis: {0}. Must be one of: actual, volumetric")]
pub struct ChargeBasisParseError(pub String);

/// Currency-related errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    /// Unknown currency code.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
}
