//! Pricing strategies, one pure function per [`PricingModel`].
//!
//! Every strategy shares the signature
//! `fn(weight, rates, limits) -> Result<price, PricingFailure>` and is generic
//! over `num_traits::Float`. None of them hold state; calling one twice with
//! the same inputs gives the same result.
//!
//! # Available Strategies
//!
//! - **Per bracket**: [`fixed`], [`flat`], [`min_fixed`]
//! - **Progressive**: [`cumulative`], [`min_cumulative`]
//! - **Base plus excess**: [`min_excess`], [`excess`]
//!
//! # Usage
//!
//! ```rust
//! use ratecard_core::types::PricingModel;
//! use ratecard_pricing::strategies::evaluate;
//! use ratecard_pricing::PricingFailure;
//!
//! let limits = [50.0, 100.0];
//! let rates = [Some(10.0), Some(8.0)];
//!
//! assert_eq!(evaluate(PricingModel::Fixed, 30.0, &rates, &limits), Ok(300.0));
//! assert_eq!(evaluate(PricingModel::Cumulative, 100.0, &rates, &limits), Ok(900.0));
//! assert_eq!(
//!     evaluate(PricingModel::Flat, 101.0, &rates, &limits),
//!     Err(PricingFailure::OverLimit)
//! );
//! ```

pub mod excess;
pub mod per_bracket;
pub mod progressive;

pub use excess::{excess, min_excess};
pub use per_bracket::{fixed, flat, min_fixed};
pub use progressive::{cumulative, min_cumulative};

use num_traits::Float;
use ratecard_core::types::PricingModel;

use crate::error::PricingFailure;

/// Common signature of every strategy.
pub type StrategyFn<T> = fn(T, &[Option<T>], &[T]) -> Result<T, PricingFailure>;

/// The strategy implementing `model`.
pub fn strategy_for<T: Float>(model: PricingModel) -> StrategyFn<T> {
    match model {
        PricingModel::Fixed => fixed::<T>,
        PricingModel::Flat => flat::<T>,
        PricingModel::MinFixed => min_fixed::<T>,
        PricingModel::Cumulative => cumulative::<T>,
        PricingModel::MinCumulative => min_cumulative::<T>,
        PricingModel::MinExcess => min_excess::<T>,
        PricingModel::Excess => excess::<T>,
    }
}

/// Price `weight` with the formula of `model`.
///
/// Callers must pass a positive weight; the quote layer rejects anything else
/// before getting here.
#[inline]
pub fn evaluate<T: Float>(
    model: PricingModel,
    weight: T,
    rates: &[Option<T>],
    limits: &[T],
) -> Result<T, PricingFailure> {
    strategy_for(model)(weight, rates, limits)
}
