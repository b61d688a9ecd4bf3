//! Export and import command implementations
//!
//! Moves the whole store in and out as a JSON snapshot.

use std::path::Path;

use ratecard_store::{snapshot, ImportOutcome};
use tracing::info;

use super::Session;
use crate::{CliError, Result};

/// Run the export command
pub fn export(session: &Session, output: Option<&Path>) -> Result<()> {
    let json = snapshot::export_json(&session.store)?;
    match output {
        Some(path) => {
            std::fs::write(path, json)?;
            info!(path = %path.display(), "Snapshot exported");
            println!("Exported to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

/// Apply a snapshot file to the session's store.
pub fn apply(session: &mut Session, input: &Path) -> Result<ImportOutcome> {
    if !input.exists() {
        return Err(CliError::FileNotFound(input.display().to_string()));
    }
    let json = std::fs::read_to_string(input)?;
    let outcome = snapshot::import_json(&mut session.store, &json)?;
    info!(path = %input.display(), ?outcome, "Snapshot imported");
    Ok(outcome)
}

/// Run the import command
pub fn import(session: &mut Session, input: &Path) -> Result<()> {
    match apply(session, input)? {
        ImportOutcome::Full => println!("Data imported successfully!"),
        ImportOutcome::LimitsOnly => {
            println!("Older format detected. Imported bracket limits only.")
        }
    }
    Ok(())
}
