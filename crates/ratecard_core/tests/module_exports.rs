//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported
//! and accessible via absolute paths.

/// Test that math kernels are accessible via absolute path.
#[test]
fn test_math_module_exports() {
    use ratecard_core::math::bracket::bracket_index;
    use ratecard_core::math::validity::{is_valid_rate, rate_at};
    use ratecard_core::math::weight::{cbm, chargeable_weight, volumetric_weight};
    use ratecard_core::math::{ChargeBasis, Dimensions};

    assert_eq!(bracket_index(10.0, &[50.0]), Some(0));
    assert!(is_valid_rate(Some(1.0)));
    assert_eq!(rate_at(&[Some(2.0)], 0), Some(2.0));

    let dims = Dimensions::new(30.0, 20.0, 10.0);
    assert_eq!(volumetric_weight(&dims, 6000.0), 1.0);
    assert!(cbm(&dims) > 0.0);
    assert_eq!(chargeable_weight(ChargeBasis::Volumetric, 5.0, 1.0), 1.0);
}

/// Test that types are re-exported at the module level.
#[test]
fn test_types_module_exports() {
    use ratecard_core::types::{
        find_route, parse_rate_input, BracketLimits, Currency, PricingModel, RateVector, Route,
    };

    let limits = BracketLimits::default();
    let mut rates = RateVector::unset(limits.len());
    rates.set(0, parse_rate_input("12").unwrap());

    let routes = vec![Route::new("MNL", "CEB", rates)];
    let (_, route) = find_route(&routes, "MNL", "CEB").unwrap();
    assert_eq!(route.rates.get(0), Some(12.0));

    assert_eq!(PricingModel::ALL.len(), 7);
    assert_eq!(Currency::default(), Currency::PHP);
}

/// Test that error types are accessible and implement std::error::Error.
#[test]
fn test_error_exports() {
    use ratecard_core::types::error::{
        ChargeBasisParseError, CurrencyError, LimitError, ModelParseError, RateInputError,
    };

    fn assert_error<E: std::error::Error>(_: &E) {}

    assert_error(&LimitError::IndexOutOfRange { index: 1, len: 0 });
    assert_error(&RateInputError::NotANumber("x".to_string()));
    assert_error(&ModelParseError("x".to_string()));
    assert_error(&ChargeBasisParseError("x".to_string()));
    assert_error(&CurrencyError::UnknownCurrency("x".to_string()));
}
