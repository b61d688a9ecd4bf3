//! Rate card data types.
//!
//! This module provides:
//! - `bracket`: `BracketLimits`, the shared inclusive upper bounds of every weight bracket
//! - `rate`: `RateVector`, per-bracket rate cells aligned with the limits
//! - `route`: `Route`, an origin/destination pair owning one rate vector
//! - `model`: `PricingModel`, the closed set of pricing formulas
//! - `currency`: Display currency for quoted prices
//! - `error`: Structured error types for limits, rate input and parsing
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level.

pub mod bracket;
pub mod currency;
pub mod error;
pub mod model;
pub mod rate;
pub mod route;

pub use bracket::{BracketLimits, DEFAULT_BRACKET_LIMITS, NEW_BRACKET_STEP};
pub use currency::Currency;
pub use error::{ChargeBasisParseError, CurrencyError, LimitError, ModelParseError, RateInputError};
pub use model::PricingModel;
pub use rate::{parse_rate_input, RateVector};
pub use route::{find_route, Route};
