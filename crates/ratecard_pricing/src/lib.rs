//! # ratecard_pricing: Weight-Bracket Pricing Kernel
//!
//! ## Layer 2 Role
//!
//! ratecard_pricing turns a route's rate vector and a chargeable weight into a
//! price:
//! - Seven pure pricing strategies, one per `PricingModel` (`strategies`)
//! - Exhaustive enum dispatch over the models (`strategies::evaluate`)
//! - Quote assembly with route lookup and diagnostics (`quote`)
//!
//! The kernel is stateless and performs no I/O. Every failure is returned as
//! a value: [`PricingFailure`] from a strategy, [`QuoteError`] from quote
//! assembly.
//!
//! ## Usage Example
//!
//! ```rust
//! use ratecard_core::types::{BracketLimits, PricingModel, RateVector, Route};
//! use ratecard_pricing::quote::{quote, QuoteRequest, RateSheet};
//! use ratecard_pricing::QuoteError;
//!
//! let limits = BracketLimits::new(vec![50.0, 100.0]).unwrap();
//! let routes = vec![Route::new("MNL", "CEB", RateVector::from(vec![Some(20.0), Some(8.0)]))];
//! let sheet = RateSheet { name: "Standard Table", limits: &limits, routes: &routes };
//!
//! let request = QuoteRequest::new(PricingModel::MinCumulative, "MNL", "CEB", 70.0);
//! assert_eq!(quote(&request, &sheet).unwrap().price, 180.0);
//!
//! let request = QuoteRequest::new(PricingModel::Fixed, "MNL", "CEB", 130.0);
//! assert!(matches!(quote(&request, &sheet), Err(QuoteError::OverLimit { .. })));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialise `Quote` and `WeightSummary`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod quote;
pub mod strategies;

pub use error::{PricingFailure, QuoteError};
pub use quote::{quote, Quote, QuoteRequest, RateSheet, WeightSummary};
pub use strategies::{evaluate, strategy_for, StrategyFn};
