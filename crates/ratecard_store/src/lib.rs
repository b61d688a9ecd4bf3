//! # ratecard_store: Rate Card Tables and Snapshots
//!
//! ## Infra Layer Role
//!
//! ratecard_store holds the editable state the pricing kernel reads:
//! - Shared bracket limits for every model (`store`)
//! - Named tables per pricing model with an active selection (`table`)
//! - Row, rate and bracket editing with alignment kept across all tables
//! - JSON snapshots for persistence, export and import (`snapshot`)
//!
//! ## Usage Example
//!
//! ```rust
//! use ratecard_core::types::PricingModel;
//! use ratecard_store::{snapshot, RateCardStore};
//!
//! let mut store = RateCardStore::new();
//! store.create_table(PricingModel::Cumulative, "VIP Rates").unwrap();
//! store.set_route(PricingModel::Cumulative, 0, "MNL", "CEB").unwrap();
//!
//! let json = snapshot::export_json(&store).unwrap();
//! let mut copy = RateCardStore::new();
//! snapshot::import_json(&mut copy, &json).unwrap();
//! assert_eq!(copy.active_table(PricingModel::Cumulative).name, "VIP Rates");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod snapshot;
pub mod store;
pub mod table;

pub use error::{SnapshotError, StoreError, StoreResult};
pub use snapshot::{ImportOutcome, SnapshotDocument, APP_VERSION};
pub use store::RateCardStore;
pub use table::{ModelTables, RateTable, DEFAULT_TABLE_NAME};
