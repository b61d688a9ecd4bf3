//! Pricing model identities.
//!
//! The set of formulas is closed: every table belongs to exactly one of the
//! seven models below, and the pricing layer dispatches over them with a
//! single `match`.
//!
//! # Examples
//!
//! ```
//! use ratecard_core::types::model::PricingModel;
//!
//! assert_eq!(PricingModel::ALL.len(), 7);
//! assert_eq!(PricingModel::MinExcess.key(), "minExcess");
//!
//! let model: PricingModel = "min_fixed".parse().unwrap();
//! assert_eq!(model, PricingModel::MinFixed);
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::ModelParseError;

/// Pricing formula applied to a route's rate vector.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum PricingModel {
    /// Weight times the rate of the bracket the weight falls into.
    #[default]
    Fixed,

    /// The rate of the bracket the weight falls into, not multiplied.
    Flat,

    /// Flat first-bracket rate as a minimum charge, otherwise `Fixed`.
    MinFixed,

    /// Progressive fill: each bracket bills the weight inside it at its own rate.
    Cumulative,

    /// Progressive fill with a flat charge for the first bracket.
    MinCumulative,

    /// Flat base charge up to the first limit plus a per-unit excess rate.
    MinExcess,

    /// Per-unit base rate up to the first limit plus a per-unit excess rate.
    Excess,
}

impl PricingModel {
    /// Every model, in the order the editor lists them.
    pub const ALL: [PricingModel; 7] = [
        PricingModel::Fixed,
        PricingModel::Flat,
        PricingModel::MinFixed,
        PricingModel::Cumulative,
        PricingModel::MinCumulative,
        PricingModel::MinExcess,
        PricingModel::Excess,
    ];

    /// Position of this model in [`PricingModel::ALL`].
    pub fn index(&self) -> usize {
        match self {
            PricingModel::Fixed => 0,
            PricingModel::Flat => 1,
            PricingModel::MinFixed => 2,
            PricingModel::Cumulative => 3,
            PricingModel::MinCumulative => 4,
            PricingModel::MinExcess => 5,
            PricingModel::Excess => 6,
        }
    }

    /// Stable key used in snapshots and on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            PricingModel::Fixed => "fixed",
            PricingModel::Flat => "flat",
            PricingModel::MinFixed => "minFixed",
            PricingModel::Cumulative => "cumulative",
            PricingModel::MinCumulative => "minCumulative",
            PricingModel::MinExcess => "minExcess",
            PricingModel::Excess => "excess",
        }
    }

    /// One-line formula summary.
    pub fn formula(&self) -> &'static str {
        match self {
            PricingModel::Fixed => "weight x rate[bracket]",
            PricingModel::Flat => "rate[bracket]",
            PricingModel::MinFixed => {
                "rate[0] up to the first limit, else weight x rate[bracket]"
            }
            PricingModel::Cumulative => "sum of filled capacity x rate per bracket",
            PricingModel::MinCumulative => {
                "rate[0] flat for the first bracket, then filled capacity x rate"
            }
            PricingModel::MinExcess => "rate[0] + (weight - limit[0]) x rate[1]",
            PricingModel::Excess => "limit[0] x rate[0] + (weight - limit[0]) x rate[1]",
        }
    }

    /// Returns true if the formula only ever reads the first two rate cells.
    ///
    /// These models have no upper weight limit.
    pub fn uses_excess_pair(&self) -> bool {
        matches!(self, PricingModel::MinExcess | PricingModel::Excess)
    }
}

impl fmt::Display for PricingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for PricingModel {
    type Err = ModelParseError;

    /// Parse a model key. Case, hyphens, underscores and spaces are ignored,
    /// so `minFixed`, `min-fixed` and `MIN_FIXED` are the same model.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        PricingModel::ALL
            .into_iter()
            .find(|model| model.key().to_lowercase() == normalised)
            .ok_or_else(|| ModelParseError(s.to_string()))
    }
}
