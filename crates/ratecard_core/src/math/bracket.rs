//! Weight to bracket resolution.
//!
//! Bracket `i` covers `(limits[i-1], limits[i]]`, with an implicit lower bound
//! of zero for the first bracket. The weight is truncated toward zero before
//! the comparison, so `50.9` against limits `[50, 100]` resolves to bracket 0.
//! This is the lookup rule every per-bracket formula shares.

use num_traits::Float;

/// Resolve the bracket a weight falls into.
///
/// The weight is floored, then the limits are scanned in order and the index
/// of the first limit greater than or equal to the floored weight is returned.
/// Limits are expected in ascending order but this is not checked; an
/// unsorted sequence simply yields the first qualifying position.
///
/// # Arguments
///
/// * `weight` - Chargeable weight (callers guarantee it is positive)
/// * `limits` - Inclusive upper bound of each bracket
///
/// # Returns
///
/// * `Some(i)` - The bracket index
/// * `None` - The floored weight exceeds every limit (or `weight` is NaN)
///
/// # Example
///
/// ```
/// use ratecard_core::math::bracket::bracket_index;
///
/// let limits = [50.0, 100.0, 150.0, 500.0];
///
/// assert_eq!(bracket_index(50.0, &limits), Some(0));
/// assert_eq!(bracket_index(50.9, &limits), Some(0));
/// assert_eq!(bracket_index(51.0, &limits), Some(1));
/// assert_eq!(bracket_index(500.5, &limits), Some(3));
/// assert_eq!(bracket_index(501.0, &limits), None);
/// ```
#[inline]
pub fn bracket_index<T: Float>(weight: T, limits: &[T]) -> Option<usize> {
    let effective = weight.floor();
    limits.iter().position(|&limit| effective <= limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMITS: [f64; 4] = [50.0, 100.0, 150.0, 500.0];

    // ========================================
    // Boundary Tests
    // ========================================

    #[test]
    fn test_limit_is_inclusive() {
        for (i, &limit) in LIMITS.iter().enumerate() {
            assert_eq!(bracket_index(limit, &LIMITS), Some(i));
        }
    }

    #[test]
    fn test_one_unit_over_limit_moves_to_next_bracket() {
        assert_eq!(bracket_index(51.0, &LIMITS), Some(1));
        assert_eq!(bracket_index(101.0, &LIMITS), Some(2));
        assert_eq!(bracket_index(151.0, &LIMITS), Some(3));
        assert_eq!(bracket_index(501.0, &LIMITS), None);
    }

    #[test]
    fn test_fraction_over_limit_is_truncated() {
        assert_eq!(bracket_index(50.001, &LIMITS), Some(0));
        assert_eq!(bracket_index(50.999, &LIMITS), Some(0));
        assert_eq!(bracket_index(500.9, &LIMITS), Some(3));
    }

    #[test]
    fn test_truncation_does_not_round() {
        // 5.9 must stay eligible for a limit of 5
        assert_eq!(bracket_index(5.9, &[5.0, 10.0]), Some(0));
        assert_eq!(bracket_index(5.1, &[5.0, 10.0]), Some(0));
    }

    #[test]
    fn test_fractional_limit_compares_against_floored_weight() {
        // floor(50.7) = 50 <= 50.5
        assert_eq!(bracket_index(50.7, &[50.5, 100.0]), Some(0));
        // floor(51.2) = 51 > 50.5
        assert_eq!(bracket_index(51.2, &[50.5, 100.0]), Some(1));
    }

    #[test]
    fn test_sub_unit_weight_lands_in_first_bracket() {
        assert_eq!(bracket_index(0.4, &LIMITS), Some(0));
    }

    // ========================================
    // Degenerate Inputs
    // ========================================

    #[test]
    fn test_empty_limits() {
        assert_eq!(bracket_index(1.0, &[] as &[f64]), None);
    }

    #[test]
    fn test_nan_weight_is_unmapped() {
        assert_eq!(bracket_index(f64::NAN, &LIMITS), None);
    }

    #[test]
    fn test_unsorted_limits_return_first_match() {
        assert_eq!(bracket_index(60.0, &[100.0, 50.0]), Some(0));
    }

    #[test]
    fn test_f32_support() {
        assert_eq!(bracket_index(50.5_f32, &[50.0_f32, 100.0]), Some(0));
    }

    // ========================================
    // Property-based Tests
    // ========================================

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn ascending_limits() -> impl Strategy<Value = Vec<f64>> {
            prop::collection::vec(1u32..200u32, 1..8).prop_map(|steps| {
                let mut acc = 0.0;
                steps
                    .into_iter()
                    .map(|s| {
                        acc += s as f64;
                        acc
                    })
                    .collect()
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_index_is_smallest_qualifying(
                limits in ascending_limits(),
                weight in 0.01f64..2000.0,
            ) {
                let floored = weight.floor();
                match bracket_index(weight, &limits) {
                    Some(i) => {
                        prop_assert!(floored <= limits[i]);
                        prop_assert!(limits[..i].iter().all(|&l| floored > l));
                    }
                    None => {
                        prop_assert!(floored > *limits.last().unwrap());
                    }
                }
            }

            #[test]
            fn test_lookup_is_deterministic(
                limits in ascending_limits(),
                weight in 0.01f64..2000.0,
            ) {
                prop_assert_eq!(bracket_index(weight, &limits), bracket_index(weight, &limits));
            }
        }
    }
}
