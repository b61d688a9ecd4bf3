//! Base-plus-excess formulas.
//!
//! Only the first limit and the first two rate cells matter: `rate[0]` is the
//! base tier and `rate[1]` is charged per unit above `limits[0]`. There is no
//! upper weight limit for these models.

use num_traits::Float;
use ratecard_core::math::rate_at;

use crate::error::PricingFailure;

struct ExcessTerms<T> {
    base: T,
    excess: T,
    limit: T,
}

fn excess_terms<T: Float>(
    rates: &[Option<T>],
    limits: &[T],
) -> Result<ExcessTerms<T>, PricingFailure> {
    let base = rate_at(rates, 0).ok_or(PricingFailure::MissingRate { bracket: 0 })?;
    let excess = rate_at(rates, 1).ok_or(PricingFailure::MissingRate { bracket: 1 })?;
    let limit = limits.first().copied().ok_or(PricingFailure::OverLimit)?;
    Ok(ExcessTerms {
        base,
        excess,
        limit,
    })
}

/// Flat `rate[0]` up to `limits[0]`, plus `rate[1]` per unit above it.
///
/// # Example
///
/// ```
/// use ratecard_pricing::strategies::min_excess;
///
/// let limits = [50.0, 100.0];
/// let rates = [Some(500.0), Some(12.0)];
///
/// assert_eq!(min_excess(20.0, &rates, &limits), Ok(500.0));
/// assert_eq!(min_excess(60.0, &rates, &limits), Ok(620.0));
/// ```
pub fn min_excess<T: Float>(
    weight: T,
    rates: &[Option<T>],
    limits: &[T],
) -> Result<T, PricingFailure> {
    let terms = excess_terms(rates, limits)?;
    if weight <= terms.limit {
        Ok(terms.base)
    } else {
        Ok(terms.base + (weight - terms.limit) * terms.excess)
    }
}

/// `rate[0]` per unit up to `limits[0]`, plus `rate[1]` per unit above it.
///
/// # Example
///
/// ```
/// use ratecard_pricing::strategies::excess;
///
/// let limits = [50.0, 100.0];
/// let rates = [Some(10.0), Some(12.0)];
///
/// assert_eq!(excess(20.0, &rates, &limits), Ok(200.0));
/// assert_eq!(excess(60.0, &rates, &limits), Ok(620.0));
/// ```
pub fn excess<T: Float>(
    weight: T,
    rates: &[Option<T>],
    limits: &[T],
) -> Result<T, PricingFailure> {
    let terms = excess_terms(rates, limits)?;
    if weight <= terms.limit {
        Ok(weight * terms.base)
    } else {
        Ok(terms.limit * terms.base + (weight - terms.limit) * terms.excess)
    }
}
