//! Formulas that price from the single bracket the weight falls into.

use num_traits::Float;
use ratecard_core::math::{bracket_index, rate_at};

use crate::error::PricingFailure;

/// Resolve the bracket of `weight` and its usable rate.
fn bracket_rate<T: Float>(
    weight: T,
    rates: &[Option<T>],
    limits: &[T],
) -> Result<(usize, T), PricingFailure> {
    let index = bracket_index(weight, limits).ok_or(PricingFailure::OverLimit)?;
    let rate = rate_at(rates, index).ok_or(PricingFailure::MissingRate { bracket: index })?;
    Ok((index, rate))
}

/// `weight × rate[bracket]`.
///
/// # Example
///
/// ```
/// use ratecard_pricing::strategies::fixed;
///
/// let limits = [50.0, 100.0];
/// let rates = [Some(10.0), Some(8.0)];
///
/// assert_eq!(fixed(30.0, &rates, &limits), Ok(300.0));
/// assert_eq!(fixed(75.0, &rates, &limits), Ok(600.0));
/// ```
pub fn fixed<T: Float>(weight: T, rates: &[Option<T>], limits: &[T]) -> Result<T, PricingFailure> {
    let (_, rate) = bracket_rate(weight, rates, limits)?;
    Ok(weight * rate)
}

/// `rate[bracket]`, independent of the weight inside the bracket.
///
/// # Example
///
/// ```
/// use ratecard_pricing::strategies::flat;
///
/// let limits = [50.0, 100.0];
/// let rates = [Some(250.0), Some(400.0)];
///
/// assert_eq!(flat(12.0, &rates, &limits), Ok(250.0));
/// assert_eq!(flat(99.0, &rates, &limits), Ok(400.0));
/// ```
pub fn flat<T: Float>(weight: T, rates: &[Option<T>], limits: &[T]) -> Result<T, PricingFailure> {
    let (_, rate) = bracket_rate(weight, rates, limits)?;
    Ok(rate)
}

/// `rate[0]` as a flat minimum up to the first limit, otherwise [`fixed`].
///
/// The minimum check uses the raw weight, not the floored one: with a first
/// limit of 50, a weight of 50.5 is billed per unit at bracket 0's rate.
///
/// # Example
///
/// ```
/// use ratecard_pricing::strategies::min_fixed;
///
/// let limits = [50.0, 100.0];
/// let rates = [Some(300.0), Some(8.0)];
///
/// assert_eq!(min_fixed(10.0, &rates, &limits), Ok(300.0));
/// assert_eq!(min_fixed(60.0, &rates, &limits), Ok(480.0));
/// ```
pub fn min_fixed<T: Float>(
    weight: T,
    rates: &[Option<T>],
    limits: &[T],
) -> Result<T, PricingFailure> {
    match limits.first() {
        Some(&first) if weight <= first => {
            rate_at(rates, 0).ok_or(PricingFailure::MissingRate { bracket: 0 })
        }
        _ => fixed(weight, rates, limits),
    }
}
