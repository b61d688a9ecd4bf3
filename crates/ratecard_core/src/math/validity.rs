//! Rate validity predicate.
//!
//! A rate cell takes part in a calculation only when it is set and finite.
//! Blank text never reaches a rate vector as a value: it is normalised to an
//! unset cell by [`crate::types::rate::parse_rate_input`].

use num_traits::Float;

/// Returns true when a rate cell holds a usable number.
///
/// # Example
///
/// ```
/// use ratecard_core::math::validity::is_valid_rate;
///
/// assert!(is_valid_rate(Some(12.5)));
/// assert!(is_valid_rate(Some(0.0)));
/// assert!(!is_valid_rate(None::<f64>));
/// assert!(!is_valid_rate(Some(f64::NAN)));
/// assert!(!is_valid_rate(Some(f64::INFINITY)));
/// ```
#[inline]
pub fn is_valid_rate<T: Float>(rate: Option<T>) -> bool {
    matches!(rate, Some(r) if r.is_finite())
}

/// Fetch the rate at `index` if it exists and is valid.
///
/// Indices past the end of `rates` are treated like unset cells, so a rate
/// vector shorter than its limits never panics.
#[inline]
pub fn rate_at<T: Float>(rates: &[Option<T>], index: usize) -> Option<T> {
    rates
        .get(index)
        .copied()
        .flatten()
        .filter(|r| is_valid_rate(Some(*r)))
}
