//! Property tests for the pricing strategies.
//!
//! # Test Categories
//!
//! 1. **Reference values**: hand-computed tier-by-tier totals
//! 2. **Bracket agreement**: `fixed`/`flat` read the bracket the resolver picks
//! 3. **Structure**: additivity of the progressive fill, excess continuity
//! 4. **Determinism**: identical inputs give identical outputs

use approx::assert_relative_eq;
use proptest::prelude::*;
use ratecard_core::math::bracket_index;
use ratecard_core::types::PricingModel;
use ratecard_pricing::strategies::{
    cumulative, evaluate, excess, fixed, flat, min_cumulative, min_excess, min_fixed,
};
use ratecard_pricing::PricingFailure;

// ============================================================================
// Reference Values
// ============================================================================

#[test]
fn test_cumulative_reference_at_boundary() {
    let limits = [50.0, 100.0];
    let rates = [Some(10.0), Some(8.0)];
    assert_relative_eq!(cumulative(100.0, &rates, &limits).unwrap(), 900.0);
}

#[test]
fn test_cumulative_beyond_last_limit_fails() {
    let limits = [50.0, 100.0];
    let rates = [Some(10.0), Some(8.0)];
    assert_eq!(
        cumulative(120.0, &rates, &limits),
        Err(PricingFailure::OverLimit)
    );
}

#[test]
fn test_min_cumulative_reference() {
    let limits = [50.0, 100.0];
    let rates = [Some(20.0), Some(8.0)];
    assert_relative_eq!(min_cumulative(70.0, &rates, &limits).unwrap(), 180.0);
}

#[test]
fn test_missing_rate_reference() {
    let limits = [50.0, 100.0];
    let rates = [None, Some(5.0)];
    assert_eq!(
        fixed(30.0, &rates, &limits),
        Err(PricingFailure::MissingRate { bracket: 0 })
    );
}

#[test]
fn test_excess_boundary_value() {
    let limits = [50.0, 100.0];
    let rates = [Some(10.0), Some(12.0)];
    assert_relative_eq!(excess(50.0, &rates, &limits).unwrap(), 50.0 * 10.0);
}

// ============================================================================
// Strategies
// ============================================================================

fn ascending_limits() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(1u32..100u32, 2..6).prop_map(|steps| {
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

fn table() -> impl Strategy<Value = (Vec<f64>, Vec<Option<f64>>)> {
    ascending_limits().prop_flat_map(|limits| {
        let n = limits.len();
        (
            Just(limits),
            prop::collection::vec(prop::option::weighted(0.9, 0.0f64..50.0), n),
        )
    })
}

fn full_table() -> impl Strategy<Value = (Vec<f64>, Vec<Option<f64>>)> {
    ascending_limits().prop_flat_map(|limits| {
        let n = limits.len();
        (
            Just(limits),
            prop::collection::vec((0.0f64..50.0).prop_map(Some), n),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_fixed_reads_resolved_bracket(
        (limits, rates) in table(),
        weight in 0.01f64..600.0,
    ) {
        let result = fixed(weight, &rates, &limits);
        match bracket_index(weight, &limits) {
            None => prop_assert_eq!(result, Err(PricingFailure::OverLimit)),
            Some(i) => match rates[i] {
                Some(rate) => prop_assert_eq!(result, Ok(weight * rate)),
                None => prop_assert_eq!(result, Err(PricingFailure::MissingRate { bracket: i })),
            },
        }
    }

    #[test]
    fn test_flat_reads_resolved_bracket(
        (limits, rates) in table(),
        weight in 0.01f64..600.0,
    ) {
        let result = flat(weight, &rates, &limits);
        match bracket_index(weight, &limits) {
            None => prop_assert!(result.is_err()),
            Some(i) => prop_assert_eq!(result.ok(), rates[i]),
        }
    }

    #[test]
    fn test_min_fixed_matches_fixed_above_first_limit(
        (limits, rates) in table(),
        weight in 0.01f64..600.0,
    ) {
        if weight > limits[0] {
            prop_assert_eq!(min_fixed(weight, &rates, &limits), fixed(weight, &rates, &limits));
        } else {
            prop_assert_eq!(min_fixed(weight, &rates, &limits).ok(), rates[0]);
        }
    }

    #[test]
    fn test_cumulative_matches_tier_sum(
        (limits, rates) in full_table(),
        weight in 0.01f64..600.0,
    ) {
        let max = *limits.last().unwrap();
        let result = cumulative(weight, &rates, &limits);
        if weight > max {
            prop_assert_eq!(result, Err(PricingFailure::OverLimit));
        } else {
            let mut expected = 0.0;
            let mut lower = 0.0;
            for (limit, rate) in limits.iter().zip(&rates) {
                let inside = (weight.min(*limit) - lower).max(0.0);
                expected += inside * rate.unwrap();
                lower = *limit;
            }
            let price = result.unwrap();
            prop_assert!((price - expected).abs() <= 1e-6 * expected.max(1.0));
        }
    }

    #[test]
    fn test_cumulative_and_min_cumulative_differ_in_first_bracket_only(
        (limits, rates) in full_table(),
        weight in 0.01f64..600.0,
    ) {
        if let (Ok(full), Ok(min)) = (
            cumulative(weight, &rates, &limits),
            min_cumulative(weight, &rates, &limits),
        ) {
            let first_fill = weight.min(limits[0]);
            let rate0 = rates[0].unwrap();
            let expected_gap = first_fill * rate0 - rate0;
            prop_assert!((full - min - expected_gap).abs() <= 1e-6 * full.abs().max(1.0));
        }
    }

    #[test]
    fn test_cumulative_is_monotone_for_positive_rates(
        (limits, rates) in full_table(),
        a in 0.01f64..600.0,
        b in 0.01f64..600.0,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        if let (Ok(p_lo), Ok(p_hi)) = (
            cumulative(lo, &rates, &limits),
            cumulative(hi, &rates, &limits),
        ) {
            prop_assert!(p_lo <= p_hi + 1e-9);
        }
    }

    #[test]
    fn test_excess_models_jump_only_by_rate_delta(
        limit in 1.0f64..500.0,
        base in 0.0f64..50.0,
        extra in 0.0f64..50.0,
    ) {
        let limits = [limit, limit + 100.0];
        let rates = [Some(base), Some(extra)];
        let eps = 1e-6;

        let at = excess(limit, &rates, &limits).unwrap();
        let above = excess(limit + eps, &rates, &limits).unwrap();
        prop_assert!((above - at - eps * extra).abs() < 1e-6);

        let at = min_excess(limit, &rates, &limits).unwrap();
        let above = min_excess(limit + eps, &rates, &limits).unwrap();
        prop_assert!((above - at - eps * extra).abs() < 1e-6);
    }

    #[test]
    fn test_every_model_is_deterministic(
        (limits, rates) in table(),
        weight in 0.01f64..600.0,
    ) {
        for model in PricingModel::ALL {
            prop_assert_eq!(
                evaluate(model, weight, &rates, &limits),
                evaluate(model, weight, &rates, &limits)
            );
        }
    }
}
