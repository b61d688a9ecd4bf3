//! Numeric kernels shared by every pricing formula.
//!
//! This module provides:
//! - `bracket`: Weight to bracket index resolution
//! - `validity`: The predicate deciding whether a rate cell takes part in a calculation
//! - `weight`: Volumetric weight, CBM and chargeable weight selection

pub mod bracket;
pub mod validity;
pub mod weight;

pub use bracket::bracket_index;
pub use validity::{is_valid_rate, rate_at};
pub use weight::{
    cbm, chargeable_weight, volumetric_weight, ChargeBasis, Dimensions, DEFAULT_VOLUME_DIVISOR,
};
