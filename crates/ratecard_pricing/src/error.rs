//! Failure types for strategy evaluation and quote assembly.

use thiserror::Error;

/// Why a pricing strategy produced no price.
///
/// A zero price is a legitimate `Ok(0.0)`; a failure is always one of
/// these variants, so callers never have to compare the weight against the
/// limits again to pick a message.
///
/// # Examples
/// ```
/// use ratecard_pricing::PricingFailure;
///
/// let err = PricingFailure::MissingRate { bracket: 2 };
/// assert_eq!(format!("{}", err), "Rate is blank/missing for bracket 2");
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PricingFailure {
    /// The weight lies beyond the last configured bracket (or no brackets exist).
    #[error("Weight exceeds the configured maximum bracket")]
    OverLimit,

    /// A bracket the formula needs has an unset or non-finite rate.
    #[error("Rate is blank/missing for bracket {bracket}")]
    MissingRate {
        /// First bracket found without a usable rate
        bracket: usize,
    },
}

/// Quote assembly errors, one per user-facing diagnostic.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuoteError {
    /// Chargeable weight is zero, negative or not a number.
    #[error("Please enter valid weight/dimensions")]
    NonPositiveWeight {
        /// The rejected chargeable weight
        weight: f64,
    },

    /// No route in the active table matches the requested pair.
    #[error("No configured rate for this route in table: {table}")]
    RouteNotFound {
        /// Requested origin
        origin: String,
        /// Requested destination
        destination: String,
        /// Name of the table that was searched
        table: String,
    },

    /// Weight is beyond the heaviest bracket.
    #[error("Weight ({weight}kg) exceeds {}kg limit", fmt_limit(.max_limit))]
    OverLimit {
        /// Chargeable weight
        weight: f64,
        /// Last configured limit, if any brackets exist
        max_limit: Option<f64>,
    },

    /// A needed bracket has no usable rate.
    #[error("Rate is blank/missing for this bracket.")]
    MissingRate {
        /// Bracket index without a usable rate
        bracket: usize,
    },
}

fn fmt_limit(limit: &Option<f64>) -> String {
    match limit {
        Some(limit) => limit.to_string(),
        None => "0".to_string(),
    }
}

impl QuoteError {
    /// Short headline shown in place of a price.
    pub fn headline(&self) -> &'static str {
        match self {
            QuoteError::NonPositiveWeight { .. } => "No Weight",
            QuoteError::RouteNotFound { .. } => "Route Not Found",
            QuoteError::OverLimit { .. } => "Over Limit",
            QuoteError::MissingRate { .. } => "Invalid Rate",
        }
    }
}
