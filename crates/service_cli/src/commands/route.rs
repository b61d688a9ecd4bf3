//! Route command implementation
//!
//! Adds, edits and deletes route rows of a model's active table.

use clap::Subcommand;
use ratecard_core::types::PricingModel;

use super::Session;
use crate::Result;

/// `ratecard route` actions
#[derive(Debug, Clone, Subcommand)]
pub enum RouteAction {
    /// Append a row, optionally naming its route
    Add {
        /// Pricing model
        #[arg(short, long, default_value = "fixed")]
        model: PricingModel,

        /// Origin
        origin: Option<String>,

        /// Destination
        destination: Option<String>,
    },

    /// Set the origin and destination of a row
    Set {
        /// Pricing model
        #[arg(short, long, default_value = "fixed")]
        model: PricingModel,

        /// Row index (0-based)
        row: usize,

        /// Origin
        origin: String,

        /// Destination
        destination: String,
    },

    /// Delete a row
    Delete {
        /// Pricing model
        #[arg(short, long, default_value = "fixed")]
        model: PricingModel,

        /// Row index (0-based)
        row: usize,
    },
}

/// Run the route command
pub fn run(session: &mut Session, action: RouteAction) -> Result<()> {
    match action {
        RouteAction::Add {
            model,
            origin,
            destination,
        } => {
            let row = session.store.add_row(model);
            let origin = origin.unwrap_or_default();
            let destination = destination.unwrap_or_default();
            session
                .store
                .set_route(model, row, origin.trim(), destination.trim())?;
            println!("Added row {} to {}", row, model);
        }
        RouteAction::Set {
            model,
            row,
            origin,
            destination,
        } => {
            session
                .store
                .set_route(model, row, origin.trim(), destination.trim())?;
            println!("Row {}: {} -> {}", row, origin.trim(), destination.trim());
        }
        RouteAction::Delete { model, row } => {
            let removed = session.store.delete_row(model, row)?;
            println!(
                "Deleted row {} ({} -> {})",
                row, removed.origin, removed.destination
            );
        }
    }
    Ok(())
}
