//! Chargeable weight helpers.
//!
//! Parcels are billed on either their actual weight or their volumetric
//! weight (`L × W × H / divisor`, dimensions in centimetres). The caller picks
//! the basis; nothing here decides which of the two is larger.

use std::fmt;
use std::str::FromStr;

use crate::types::error::ChargeBasisParseError;

/// Volumetric divisor used when none is configured (cm³ per kg).
pub const DEFAULT_VOLUME_DIVISOR: f64 = 6000.0;

/// Cubic centimetres per cubic metre.
const CM3_PER_CBM: f64 = 1_000_000.0;

/// Parcel dimensions in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    /// Length (cm)
    pub length: f64,
    /// Width (cm)
    pub width: f64,
    /// Height (cm)
    pub height: f64,
}

impl Dimensions {
    /// Create dimensions from length, width and height in centimetres.
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    /// Volume in cubic centimetres. Non-finite sides count as zero.
    pub fn volume(&self) -> f64 {
        let side = |v: f64| if v.is_finite() { v } else { 0.0 };
        side(self.length) * side(self.width) * side(self.height)
    }
}

/// Volumetric weight in kilograms, rounded to two decimal places.
///
/// Returns zero when `divisor` is not a positive finite number.
///
/// # Example
///
/// ```
/// use ratecard_core::math::weight::{volumetric_weight, Dimensions};
///
/// let dims = Dimensions::new(50.0, 40.0, 30.0);
/// assert_eq!(volumetric_weight(&dims, 6000.0), 10.0);
/// assert_eq!(volumetric_weight(&dims, 0.0), 0.0);
/// ```
pub fn volumetric_weight(dims: &Dimensions, divisor: f64) -> f64 {
    if !(divisor.is_finite() && divisor > 0.0) {
        return 0.0;
    }
    round_to_cents(dims.volume() / divisor)
}

/// Volume in cubic metres.
///
/// ```
/// use ratecard_core::math::weight::{cbm, Dimensions};
///
/// assert_eq!(cbm(&Dimensions::new(100.0, 100.0, 100.0)), 1.0);
/// ```
pub fn cbm(dims: &Dimensions) -> f64 {
    dims.volume() / CM3_PER_CBM
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Which weight a shipment is billed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ChargeBasis {
    /// Scale weight
    #[default]
    Actual,
    /// Dimensional weight
    Volumetric,
}

impl ChargeBasis {
    /// Short label used in quote descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            ChargeBasis::Actual => "Act. Wt.",
            ChargeBasis::Volumetric => "Vol. Wt.",
        }
    }
}

impl fmt::Display for ChargeBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChargeBasis::Actual => write!(f, "actual"),
            ChargeBasis::Volumetric => write!(f, "volumetric"),
        }
    }
}

impl FromStr for ChargeBasis {
    type Err = ChargeBasisParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "actual" | "act" => Ok(ChargeBasis::Actual),
            "volumetric" | "vol" | "volume" => Ok(ChargeBasis::Volumetric),
            _ => Err(ChargeBasisParseError(s.to_string())),
        }
    }
}

/// Pick the billed weight for `basis`.
#[inline]
pub fn chargeable_weight(basis: ChargeBasis, actual: f64, volumetric: f64) -> f64 {
    match basis {
        ChargeBasis::Actual => actual,
        ChargeBasis::Volumetric => volumetric,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_volumetric_weight_default_divisor() {
        let dims = Dimensions::new(60.0, 40.0, 25.0);
        assert_relative_eq!(volumetric_weight(&dims, DEFAULT_VOLUME_DIVISOR), 10.0);
    }

    #[test]
    fn test_volumetric_weight_is_rounded_to_two_places() {
        // 10 * 10 * 10 / 6000 = 0.1666...
        let dims = Dimensions::new(10.0, 10.0, 10.0);
        assert_relative_eq!(volumetric_weight(&dims, 6000.0), 0.17);
    }

    #[test]
    fn test_volumetric_weight_rejects_bad_divisor() {
        let dims = Dimensions::new(10.0, 10.0, 10.0);
        assert_eq!(volumetric_weight(&dims, 0.0), 0.0);
        assert_eq!(volumetric_weight(&dims, -5000.0), 0.0);
        assert_eq!(volumetric_weight(&dims, f64::NAN), 0.0);
    }

    #[test]
    fn test_missing_side_yields_zero_volume() {
        let dims = Dimensions::new(10.0, f64::NAN, 10.0);
        assert_eq!(dims.volume(), 0.0);
        assert_eq!(Dimensions::default().volume(), 0.0);
    }

    #[test]
    fn test_cbm() {
        assert_relative_eq!(cbm(&Dimensions::new(50.0, 40.0, 30.0)), 0.06);
    }

    #[test]
    fn test_chargeable_weight_follows_basis() {
        assert_eq!(chargeable_weight(ChargeBasis::Actual, 12.0, 30.0), 12.0);
        assert_eq!(chargeable_weight(ChargeBasis::Volumetric, 12.0, 30.0), 30.0);
    }

    #[test]
    fn test_charge_basis_parsing() {
        assert_eq!("actual".parse::<ChargeBasis>().unwrap(), ChargeBasis::Actual);
        assert_eq!("VOL".parse::<ChargeBasis>().unwrap(), ChargeBasis::Volumetric);
        assert!("gross".parse::<ChargeBasis>().is_err());
    }

    #[test]
    fn test_charge_basis_labels() {
        assert_eq!(ChargeBasis::Actual.label(), "Act. Wt.");
        assert_eq!(ChargeBasis::Volumetric.label(), "Vol. Wt.");
        assert_eq!(ChargeBasis::Volumetric.to_string(), "volumetric");
    }
}
