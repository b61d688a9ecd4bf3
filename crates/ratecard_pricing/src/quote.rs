//! Quote assembly.
//!
//! Turns a user request (model, route, weight, dimensions) into either a
//! priced [`Quote`] or a [`QuoteError`] naming the diagnostic to show:
//!
//! 1. Work out the chargeable weight from the requested basis.
//! 2. Reject a chargeable weight that is not positive.
//! 3. Find the first route of the table matching origin and destination.
//! 4. Run the model's strategy over that route's rates.

use ratecard_core::math::{
    bracket_index, cbm, chargeable_weight, volumetric_weight, ChargeBasis, Dimensions,
    DEFAULT_VOLUME_DIVISOR,
};
use ratecard_core::types::{find_route, BracketLimits, PricingModel, Route};

use crate::error::{PricingFailure, QuoteError};
use crate::strategies::evaluate;

/// What the user asked to price.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRequest {
    /// Formula to apply
    pub model: PricingModel,
    /// Route origin
    pub origin: String,
    /// Route destination
    pub destination: String,
    /// Scale weight (kg)
    pub actual_weight: f64,
    /// Parcel dimensions (cm)
    pub dimensions: Dimensions,
    /// cm³ per kg used for volumetric weight
    pub volume_divisor: f64,
    /// Which weight is billed
    pub basis: ChargeBasis,
}

impl QuoteRequest {
    /// A request billed on actual weight with no dimensions.
    pub fn new(
        model: PricingModel,
        origin: impl Into<String>,
        destination: impl Into<String>,
        actual_weight: f64,
    ) -> Self {
        Self {
            model,
            origin: origin.into(),
            destination: destination.into(),
            actual_weight,
            dimensions: Dimensions::default(),
            volume_divisor: DEFAULT_VOLUME_DIVISOR,
            basis: ChargeBasis::Actual,
        }
    }

    /// Set the parcel dimensions.
    pub fn with_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = dimensions;
        self
    }

    /// Set the volumetric divisor.
    pub fn with_divisor(mut self, divisor: f64) -> Self {
        self.volume_divisor = divisor;
        self
    }

    /// Set the charge basis.
    pub fn with_basis(mut self, basis: ChargeBasis) -> Self {
        self.basis = basis;
        self
    }

    /// Weights derived from this request.
    pub fn weights(&self) -> WeightSummary {
        let actual = if self.actual_weight.is_finite() {
            self.actual_weight
        } else {
            0.0
        };
        let volumetric = volumetric_weight(&self.dimensions, self.volume_divisor);
        WeightSummary {
            actual,
            volumetric,
            cbm: cbm(&self.dimensions),
            chargeable: chargeable_weight(self.basis, actual, volumetric),
            basis: self.basis,
        }
    }
}

/// Actual, volumetric and chargeable weight of a request.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WeightSummary {
    /// Scale weight (kg)
    pub actual: f64,
    /// Dimensional weight (kg), two decimal places
    pub volumetric: f64,
    /// Volume (m³)
    pub cbm: f64,
    /// Weight the price is computed on
    pub chargeable: f64,
    /// Basis that selected `chargeable`
    pub basis: ChargeBasis,
}

/// The rate table a quote is priced against.
#[derive(Debug, Clone, Copy)]
pub struct RateSheet<'a> {
    /// Table name, used in diagnostics
    pub name: &'a str,
    /// Shared bracket limits
    pub limits: &'a BracketLimits,
    /// Routes of the table
    pub routes: &'a [Route],
}

/// A successful price.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Quote {
    /// Formula applied
    pub model: PricingModel,
    /// Computed price, unrounded
    pub price: f64,
    /// Weights the price was derived from
    pub weights: WeightSummary,
    /// Position of the matched route in its table
    pub route_index: usize,
    /// Bracket the chargeable weight falls into, if any
    pub bracket: Option<usize>,
    /// Range label of `bracket`, e.g. `"51-100kg"`
    pub bracket_label: Option<String>,
}

impl Quote {
    /// Summary line: model, basis, chargeable weight and bracket.
    ///
    /// ```
    /// use ratecard_core::types::{BracketLimits, PricingModel, RateVector, Route};
    /// use ratecard_pricing::quote::{quote, QuoteRequest, RateSheet};
    ///
    /// let limits = BracketLimits::default();
    /// let routes = vec![Route::new("MNL", "CEB", RateVector::from(vec![Some(10.0), Some(8.0), None, None]))];
    /// let sheet = RateSheet { name: "Standard Table", limits: &limits, routes: &routes };
    ///
    /// let q = quote(&QuoteRequest::new(PricingModel::Fixed, "MNL", "CEB", 60.0), &sheet).unwrap();
    /// assert_eq!(q.description(), "fixed | Act. Wt. (60kg) | [Bracket: 51-100kg]");
    /// ```
    pub fn description(&self) -> String {
        format!(
            "{} | {} ({}kg) | [Bracket: {}]",
            self.model,
            self.weights.basis.label(),
            self.weights.chargeable,
            self.bracket_label.as_deref().unwrap_or("Unknown"),
        )
    }
}

/// Price `request` against `sheet`.
pub fn quote(request: &QuoteRequest, sheet: &RateSheet<'_>) -> Result<Quote, QuoteError> {
    let weights = request.weights();
    let weight = weights.chargeable;

    if !(weight.is_finite() && weight > 0.0) {
        return Err(QuoteError::NonPositiveWeight { weight });
    }

    let (route_index, route) = find_route(sheet.routes, &request.origin, &request.destination)
        .ok_or_else(|| QuoteError::RouteNotFound {
            origin: request.origin.clone(),
            destination: request.destination.clone(),
            table: sheet.name.to_string(),
        })?;

    let limits = sheet.limits.as_slice();
    let price = evaluate(request.model, weight, route.rates.as_slice(), limits)
        .map_err(|failure| diagnose(failure, weight, sheet.limits))?;

    let bracket = bracket_index(weight, limits);
    Ok(Quote {
        model: request.model,
        price,
        weights,
        route_index,
        bracket,
        bracket_label: bracket.and_then(|i| sheet.limits.label(i)),
    })
}

/// Pick the diagnostic for a failed calculation.
///
/// A weight above the largest limit, or any weight when there are no limits,
/// is over the limit whatever the strategy stopped on.
fn diagnose(failure: PricingFailure, weight: f64, limits: &BracketLimits) -> QuoteError {
    let max_limit = limits.max_limit();
    let over = match max_limit {
        Some(max) => weight > max,
        None => true,
    };
    match failure {
        PricingFailure::MissingRate { bracket } if !over => QuoteError::MissingRate { bracket },
        _ => QuoteError::OverLimit { weight, max_limit },
    }
}
