//! Progressive (tiered) formulas.
//!
//! The weight fills the brackets in order. Each bracket absorbs at most its
//! capacity `limits[i] - limits[i-1]` and bills what it absorbed at its own
//! rate. Unlike bracket lookup, the fill works on the raw weight.

use num_traits::Float;
use ratecard_core::math::rate_at;

use crate::error::PricingFailure;

/// How the first bracket bills the weight it absorbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FirstBracket {
    /// `fill × rate[0]`
    PerUnit,
    /// `rate[0]` once, whatever the fill
    Flat,
}

fn progressive_fill<T: Float>(
    weight: T,
    rates: &[Option<T>],
    limits: &[T],
    first: FirstBracket,
) -> Result<T, PricingFailure> {
    let mut total = T::zero();
    let mut remaining = weight;
    let mut previous = T::zero();

    for (i, &limit) in limits.iter().enumerate() {
        let rate = rate_at(rates, i).ok_or(PricingFailure::MissingRate { bracket: i })?;
        let fill = remaining.min(limit - previous);
        if fill > T::zero() {
            let charge = match (i, first) {
                (0, FirstBracket::Flat) => rate,
                _ => fill * rate,
            };
            total = total + charge;
            remaining = remaining - fill;
        }
        previous = limit;
        if remaining <= T::zero() {
            break;
        }
    }

    if remaining > T::zero() {
        Err(PricingFailure::OverLimit)
    } else {
        Ok(total)
    }
}

/// Sum over brackets of `min(remaining, capacity) × rate`.
///
/// Every bracket reached before the weight is used up needs a valid rate.
/// Weight left over after the last bracket is a failure, not a free ride.
///
/// # Example
///
/// ```
/// use ratecard_pricing::strategies::cumulative;
///
/// let limits = [50.0, 100.0];
/// let rates = [Some(10.0), Some(8.0)];
///
/// // 50 × 10 + 50 × 8
/// assert_eq!(cumulative(100.0, &rates, &limits), Ok(900.0));
/// assert!(cumulative(120.0, &rates, &limits).is_err());
/// ```
pub fn cumulative<T: Float>(
    weight: T,
    rates: &[Option<T>],
    limits: &[T],
) -> Result<T, PricingFailure> {
    progressive_fill(weight, rates, limits, FirstBracket::PerUnit)
}

/// [`cumulative`] with a flat `rate[0]` for entering the table.
///
/// # Example
///
/// ```
/// use ratecard_pricing::strategies::min_cumulative;
///
/// let limits = [50.0, 100.0];
/// let rates = [Some(20.0), Some(8.0)];
///
/// // 20 flat + 20 × 8
/// assert_eq!(min_cumulative(70.0, &rates, &limits), Ok(180.0));
/// ```
pub fn min_cumulative<T: Float>(
    weight: T,
    rates: &[Option<T>],
    limits: &[T],
) -> Result<T, PricingFailure> {
    progressive_fill(weight, rates, limits, FirstBracket::Flat)
}
