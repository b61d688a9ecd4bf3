//! # ratecard_core: Foundation Types for Weight-Bracket Rate Cards
//!
//! ## Layer 1 (Foundation) Role
//!
//! ratecard_core is the bottom layer of the workspace, providing:
//! - Bracket lookup with floor-before-compare semantics (`math::bracket`)
//! - The rate validity predicate (`math::validity`)
//! - Volumetric and chargeable weight helpers (`math::weight`)
//! - Data types: `BracketLimits`, `RateVector`, `Route`, `PricingModel` (`types`)
//! - Display currency: `Currency` (`types::currency`)
//! - Error types: `LimitError`, `RateInputError`, `ModelParseError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other ratecard_* crates, with minimal external dependencies:
//! - num-traits: Generic floating-point arithmetic for the lookup kernels
//! - thiserror: Error derives
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use ratecard_core::math::bracket::bracket_index;
//! use ratecard_core::types::{BracketLimits, PricingModel};
//!
//! let limits = BracketLimits::new(vec![50.0, 100.0, 150.0]).unwrap();
//!
//! // 50.9 truncates to 50 and stays in the first bracket
//! assert_eq!(bracket_index(50.9, limits.as_slice()), Some(0));
//! assert_eq!(bracket_index(51.0, limits.as_slice()), Some(1));
//! assert_eq!(bracket_index(151.0, limits.as_slice()), None);
//!
//! let model: PricingModel = "min-cumulative".parse().unwrap();
//! assert_eq!(model.key(), "minCumulative");
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for limits, rate vectors, routes and models

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
