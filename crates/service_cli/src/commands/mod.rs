//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands operate on a
//! [`Session`]: the resolved configuration plus the store loaded from disk.

pub mod limits;
pub mod models;
pub mod quote;
pub mod rate;
pub mod route;
pub mod table;
pub mod transfer;

use ratecard_core::types::Currency;
use ratecard_store::{snapshot, RateCardStore};

use crate::config::CliConfig;
use crate::Result;

/// Configuration and store for one CLI invocation.
pub struct Session {
    pub config: CliConfig,
    pub store: RateCardStore,
}

impl Session {
    /// Load the store named by `config`, or start a fresh one.
    pub fn open(config: CliConfig) -> Result<Self> {
        let store = snapshot::load(&config.store_path)?;
        Ok(Self { config, store })
    }

    /// Write the store back to its file.
    pub fn save(&self) -> Result<()> {
        snapshot::save(&self.store, &self.config.store_path)?;
        Ok(())
    }

    /// Currency prices are formatted in.
    pub fn currency(&self) -> Currency {
        self.config.currency
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use tempfile::TempDir;

    /// A session backed by a fresh store in a temporary directory.
    pub fn session() -> (TempDir, Session) {
        let dir = TempDir::new().unwrap();
        let config = CliConfig {
            store_path: dir.path().join("ratecard.json"),
            ..CliConfig::default()
        };
        let session = Session::open(config).unwrap();
        (dir, session)
    }
}
