//! JSON snapshots of the rate card store.
//!
//! The document layout is shared by the on-disk store file and by
//! export/import:
//!
//! ```json
//! {
//!   "app_version": "ratrix_v2_profiles",
//!   "exported_at": "2026-01-01T00:00:00Z",
//!   "limits": [50, 100, 150, 500],
//!   "data_store": {
//!     "fixed": { "activeId": "p_…", "profiles": { "p_…": { "name": "…", "rows": [] } } }
//!   }
//! }
//! ```
//!
//! Documents whose `app_version` differs are treated as an older format:
//! only their `limits` are adopted.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use ratecard_core::types::{BracketLimits, PricingModel};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::SnapshotError;
use crate::store::RateCardStore;
use crate::table::ModelTables;

/// Version tag written to and expected from snapshot documents.
pub const APP_VERSION: &str = "ratrix_v2_profiles";

/// Result alias for snapshot operations.
pub type SnapshotResult<T> = Result<T, SnapshotError>;

// ============================================================================
// Document
// ============================================================================

/// Serialised form of a [`RateCardStore`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotDocument {
    /// Format tag, [`APP_VERSION`] for current documents
    pub app_version: String,
    /// When the document was written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<DateTime<Utc>>,
    /// Shared bracket limits
    pub limits: BracketLimits,
    /// Tables keyed by model
    pub data_store: BTreeMap<PricingModel, ModelTables>,
}

impl SnapshotDocument {
    /// Capture `store` as a current-format document stamped with now.
    pub fn capture(store: &RateCardStore) -> Self {
        Self {
            app_version: APP_VERSION.to_string(),
            exported_at: Some(Utc::now()),
            limits: store.limits().clone(),
            data_store: store
                .models()
                .map(|(model, tables)| (model, tables.clone()))
                .collect(),
        }
    }
}

/// A current-format document as read back. Either part may be absent.
#[derive(Deserialize)]
struct IncomingDocument {
    #[serde(default)]
    limits: Option<BracketLimits>,
    #[serde(default)]
    data_store: Option<BTreeMap<PricingModel, ModelTables>>,
}

/// Only the fields needed to decide how to read a document.
#[derive(Deserialize)]
struct DocumentHeader {
    #[serde(default)]
    app_version: Option<String>,
    #[serde(default)]
    limits: Option<BracketLimits>,
}

// ============================================================================
// Import / Export
// ============================================================================

/// What an import replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    /// Current format: limits and tables were replaced by whichever of
    /// them the document carries
    Full,
    /// Older format: only the bracket limits were adopted
    LimitsOnly,
}

/// Pretty-printed JSON for `store`.
pub fn export_json(store: &RateCardStore) -> SnapshotResult<String> {
    Ok(serde_json::to_string_pretty(&SnapshotDocument::capture(store))?)
}

/// Apply a JSON document to `store`.
///
/// A current-format document replaces the limits and the tables it carries;
/// a missing part keeps the store's current value, with rate vectors
/// realigned to the resulting limits. Any other document must at least
/// carry `limits`, which are adopted while the tables are kept and
/// realigned. On error the store is left untouched.
pub fn import_json(store: &mut RateCardStore, json: &str) -> SnapshotResult<ImportOutcome> {
    let header: DocumentHeader = serde_json::from_str(json)?;

    if header.app_version.as_deref() == Some(APP_VERSION) {
        let document: IncomingDocument = serde_json::from_str(json)?;
        let limits = document.limits.unwrap_or_else(|| store.limits().clone());
        match document.data_store {
            Some(data_store) => *store = RateCardStore::from_parts(limits, data_store),
            None => store.replace_limits(limits),
        }
        info!(brackets = store.limits().len(), "Imported snapshot");
        return Ok(ImportOutcome::Full);
    }

    match header.limits {
        Some(limits) => {
            warn!(
                app_version = ?header.app_version,
                "Older snapshot format detected, importing limits only"
            );
            store.replace_limits(limits);
            Ok(ImportOutcome::LimitsOnly)
        }
        None => Err(SnapshotError::Unrecognised(header.app_version)),
    }
}

// ============================================================================
// Files
// ============================================================================

/// Load the store at `path`, or a fresh default store if the file is absent.
pub fn load(path: &Path) -> SnapshotResult<RateCardStore> {
    if !path.exists() {
        debug!(path = %path.display(), "No store file, starting fresh");
        return Ok(RateCardStore::new());
    }
    let json = fs::read_to_string(path)?;
    let mut store = RateCardStore::new();
    import_json(&mut store, &json)?;
    debug!(path = %path.display(), "Loaded store");
    Ok(store)
}

/// Write `store` to `path`, creating parent directories.
///
/// The document is written to a sibling temporary file and renamed into
/// place.
pub fn save(store: &RateCardStore, path: &Path) -> SnapshotResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = export_json(store)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    debug!(path = %path.display(), "Saved store");
    Ok(())
}
